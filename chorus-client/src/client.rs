//! The pipeline entry point

use crate::config::RunConfig;
use crate::dispatch::Dispatcher;
use crate::error::RunError;
use crate::synthesis::Synthesizer;
use chorus_core::{Message, Parameters, Provider, Request, RunResult};
use std::sync::Arc;
use tracing::info;

/// High-level client running the full generate-then-synthesize pipeline
///
/// `run` is the sole entry point: fan the prompt out into `n` independent
/// candidate generations, filter out the units that produced nothing, then
/// ask the backend to merge the survivors into one answer. The dispatch stage
/// finishes completely (every unit terminal) before synthesis begins.
///
/// # Examples
///
/// ```no_run
/// use chorus_client::Client;
/// use chorus_providers::OpenAI;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = OpenAI::with_api_key("your-api-key")?;
/// let client = Client::new(provider);
///
/// let result = client.run("Explain quantum computing in simple terms.", 5).await?;
/// println!("{}", result.answer);
/// # Ok(())
/// # }
/// ```
pub struct Client<P> {
    provider: Arc<P>,
    config: RunConfig,
}

impl<P: Provider + 'static> Client<P> {
    /// Create a client with the default configuration
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            config: RunConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the active configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Get a reference to the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate `n` candidates for the prompt and synthesize one answer
    ///
    /// Input is validated before any backend traffic: the prompt must not be
    /// blank and `n` must lie in `1..=max_candidates`. Partial candidate
    /// failures are tolerated; the run fails only when every unit failed or
    /// the synthesis call itself does.
    pub async fn run(&self, prompt: impl Into<String>, n: usize) -> Result<RunResult, RunError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(RunError::EmptyPrompt);
        }
        if n < 1 {
            return Err(RunError::InvalidCandidateCount(n));
        }
        if n > self.config.max_candidates {
            return Err(RunError::TooManyCandidates {
                given: n,
                max: self.config.max_candidates,
            });
        }

        let request = Request {
            messages: vec![Message::user(prompt)],
            model: self.config.model.clone(),
            parameters: Parameters {
                temperature: Some(self.config.candidate_temperature),
                top_p: Some(self.config.top_p),
                max_tokens: Some(self.config.max_tokens),
            },
        };

        info!(candidates = n, "generating candidates");
        let dispatcher = Dispatcher::new()
            .with_max_concurrency(self.config.max_concurrency)
            .with_retry(self.config.retry.clone());
        let candidates = dispatcher
            .dispatch(Arc::clone(&self.provider), request, n)
            .await?;

        let usable: Vec<String> = candidates
            .iter()
            .filter(|c| c.is_usable())
            .map(|c| c.text.clone())
            .collect();
        if usable.is_empty() {
            return Err(RunError::AllCandidatesFailed);
        }

        info!(usable = usable.len(), of = n, "synthesizing final answer");
        let synthesizer = Synthesizer::new(&self.config);
        let answer = synthesizer.synthesize(self.provider.as_ref(), &usable).await?;

        Ok(RunResult { answer, candidates })
    }
}
