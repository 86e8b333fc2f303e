//! Synthesis of filtered candidates into one final answer

use crate::config::RunConfig;
use crate::error::RunError;
use chorus_core::{Message, Model, Parameters, Provider, Request};
use tracing::debug;

/// Fixed editor instruction for the synthesis pass
const SYNTHESIS_INSTRUCTIONS: &str = "You are an expert editor. Synthesize ONE best answer \
     from the candidate answers provided, merging strengths, correcting errors, and removing \
     repetition. Do not mention the candidates or the synthesis process. Be decisive and clear.";

/// Folds the usable candidates into a single answer
///
/// One structured request carries every candidate in a labeled `<cand i>`
/// block, and one low-temperature completion merges them. There is no retry
/// here; a failed synthesis surfaces directly (see `RunError::Synthesis`).
#[derive(Debug, Clone)]
pub struct Synthesizer {
    model: Model,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

impl Synthesizer {
    /// Create a synthesizer from the run configuration
    pub fn new(config: &RunConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.synthesis_temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
        }
    }

    /// Build the synthesis request for the given candidates
    ///
    /// Blocks are labeled 1..k in the order given; the labels are positions
    /// in this presentation, not the candidates' original dispatch indices.
    pub fn build_request(&self, candidates: &[String]) -> Request {
        let numbered = candidates
            .iter()
            .enumerate()
            .map(|(i, text)| format!("<cand {n}>\n{text}\n</cand {n}>", n = i + 1))
            .collect::<Vec<_>>()
            .join("\n\n");

        let user = format!(
            "You are given {} candidate answers delimited by <cand i> tags.\n\n\
             {}\n\nReturn the single best final answer.",
            candidates.len(),
            numbered
        );

        Request {
            messages: vec![
                Message::system(SYNTHESIS_INSTRUCTIONS),
                Message::user(user),
            ],
            model: self.model.clone(),
            parameters: Parameters {
                temperature: Some(self.temperature),
                top_p: Some(self.top_p),
                max_tokens: Some(self.max_tokens),
            },
        }
    }

    /// Merge the candidates with a single backend request
    ///
    /// `candidates` must already be filtered to usable texts; an empty list
    /// means every generation failed and is rejected before any traffic.
    pub async fn synthesize<P>(&self, provider: &P, candidates: &[String]) -> Result<String, RunError>
    where
        P: Provider,
    {
        if candidates.is_empty() {
            return Err(RunError::AllCandidatesFailed);
        }

        debug!(count = candidates.len(), "synthesizing candidates");
        let request = self.build_request(candidates);

        let response = provider
            .request(request)
            .await
            .map_err(RunError::Synthesis)?;

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chorus_core::{Error, Response, Result, Role};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn synthesizer() -> Synthesizer {
        Synthesizer::new(&RunConfig::default())
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    struct RecordingProvider {
        requests: Mutex<Vec<Request>>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingProvider {
        fn succeeding() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::succeeding()
            }
        }
    }

    #[async_trait]
    impl Provider for RecordingProvider {
        async fn request(&self, request: Request) -> Result<Response> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request);
            if self.fail {
                Err(Error::Timeout)
            } else {
                Ok(Response::text("merged answer"))
            }
        }
    }

    #[test]
    fn request_carries_one_labeled_block_per_candidate() {
        let request = synthesizer().build_request(&texts(&["alpha", "beta", "gamma"]));

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains("expert editor"));

        let user = &request.messages[1].content;
        assert!(user.starts_with("You are given 3 candidate answers"));
        assert!(user.contains("<cand 1>\nalpha\n</cand 1>"));
        assert!(user.contains("<cand 2>\nbeta\n</cand 2>"));
        assert!(user.contains("<cand 3>\ngamma\n</cand 3>"));
        assert!(!user.contains("<cand 4>"));
        assert!(user.ends_with("Return the single best final answer."));
    }

    #[test]
    fn labels_follow_presentation_order_not_dispatch_indices() {
        // Two survivors of a five-way dispatch still label 1 and 2
        let request = synthesizer().build_request(&texts(&["from unit 0", "from unit 4"]));
        let user = &request.messages[1].content;

        assert!(user.starts_with("You are given 2 candidate answers"));
        assert!(user.contains("<cand 1>\nfrom unit 0\n</cand 1>"));
        assert!(user.contains("<cand 2>\nfrom unit 4\n</cand 2>"));
        assert!(!user.contains("<cand 3>"));
    }

    #[test]
    fn request_uses_the_synthesis_temperature() {
        let request = synthesizer().build_request(&texts(&["only"]));
        assert_eq!(request.parameters.temperature, Some(0.2));
        assert_eq!(request.parameters.top_p, Some(1.0));
        assert_eq!(request.parameters.max_tokens, Some(30_000));
    }

    #[tokio::test]
    async fn single_candidate_synthesizes_without_issue() {
        let provider = RecordingProvider::succeeding();
        let answer = synthesizer()
            .synthesize(&provider, &texts(&["the lone answer"]))
            .await
            .unwrap();

        assert_eq!(answer, "merged answer");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        let requests = provider.requests.lock().unwrap();
        let user = &requests[0].messages[1].content;
        assert!(user.contains("<cand 1>"));
        assert!(!user.contains("<cand 2>"));
    }

    #[tokio::test]
    async fn empty_candidate_list_is_rejected_before_any_traffic() {
        let provider = RecordingProvider::succeeding();
        let result = synthesizer().synthesize(&provider, &[]).await;

        assert!(matches!(result, Err(RunError::AllCandidatesFailed)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn backend_failure_is_fatal_and_not_retried() {
        let provider = RecordingProvider::failing();
        let result = synthesizer().synthesize(&provider, &texts(&["a", "b"])).await;

        assert!(matches!(result, Err(RunError::Synthesis(_))));
        // Exactly one attempt
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
