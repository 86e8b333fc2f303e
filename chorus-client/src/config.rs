//! Run configuration with documented defaults

use crate::retry::RetryConfig;
use chorus_core::Model;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Default cap on tokens generated per backend call
pub const DEFAULT_MAX_TOKENS: u32 = 30_000;

/// Sampling temperature for candidate generation (diversity wanted)
pub const CANDIDATE_TEMPERATURE: f32 = 0.9;

/// Sampling temperature for synthesis (determinism wanted)
pub const SYNTHESIS_TEMPERATURE: f32 = 0.2;

/// Default cap on simultaneously in-flight generation units
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Default ceiling on the candidate count accepted by `run`
pub const DEFAULT_MAX_CANDIDATES: usize = 32;

/// Configuration for a pipeline run
///
/// All backend addressing and sampling knobs live here, passed explicitly at
/// construction; there is no module-level mutable state to configure.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Model to use for both stages
    pub model: Model,
    /// Token cap per backend call
    pub max_tokens: u32,
    /// Temperature for the candidate fan-out
    pub candidate_temperature: f32,
    /// Temperature for the synthesis pass
    pub synthesis_temperature: f32,
    /// Top-p for both stages
    pub top_p: f32,
    /// Cap on simultaneously in-flight generation units
    pub max_concurrency: usize,
    /// Ceiling on the candidate count accepted by `run`
    pub max_candidates: usize,
    /// Per-unit retry policy for candidate generation
    pub retry: RetryConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: Model::new(DEFAULT_MODEL),
            max_tokens: DEFAULT_MAX_TOKENS,
            candidate_temperature: CANDIDATE_TEMPERATURE,
            synthesis_temperature: SYNTHESIS_TEMPERATURE,
            top_p: 1.0,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            retry: RetryConfig::default(),
        }
    }
}

impl RunConfig {
    /// Create a configuration with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-call token cap
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = tokens;
        self
    }

    /// Set the concurrency cap
    pub fn with_max_concurrency(mut self, cap: usize) -> Self {
        self.max_concurrency = cap;
        self
    }

    /// Set the candidate-count ceiling
    pub fn with_max_candidates(mut self, cap: usize) -> Self {
        self.max_candidates = cap;
        self
    }

    /// Set the per-unit retry policy
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_documented_ones() {
        let config = RunConfig::default();
        assert_eq!(config.model.0, "gpt-5");
        assert_eq!(config.max_tokens, 30_000);
        assert_eq!(config.candidate_temperature, 0.9);
        assert_eq!(config.synthesis_temperature, 0.2);
        assert_eq!(config.top_p, 1.0);
        assert_eq!(config.max_concurrency, 16);
        assert_eq!(config.max_candidates, 32);
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn setters_override_only_their_field() {
        let config = RunConfig::new()
            .with_model("qwen3-4b-thinking-2507")
            .with_max_concurrency(4);

        assert_eq!(config.model.0, "qwen3-4b-thinking-2507");
        assert_eq!(config.max_concurrency, 4);
        assert_eq!(config.max_tokens, 30_000);
    }
}
