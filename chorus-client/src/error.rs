//! Pipeline-level error types

use thiserror::Error;

/// Errors a pipeline run can surface to its caller
///
/// Unit-level failures never appear here: a candidate that exhausts its
/// retries is downgraded to an empty slot inside the dispatcher. What remains
/// are the structural failures, each naming the stage that produced it.
#[derive(Error, Debug)]
pub enum RunError {
    /// The prompt was empty or whitespace-only; nothing was sent
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The candidate count was below 1; nothing was sent
    #[error("candidate count must be at least 1, got {0}")]
    InvalidCandidateCount(usize),

    /// The candidate count exceeded the configured cap; nothing was sent
    #[error("candidate count {given} exceeds the configured maximum of {max}")]
    TooManyCandidates {
        /// The requested count
        given: usize,
        /// The configured ceiling
        max: usize,
    },

    /// Every generation unit failed; synthesis was never attempted
    #[error("all candidate generations failed")]
    AllCandidatesFailed,

    /// The single synthesis request failed
    ///
    /// There is no retry at this layer: retrying an aggregate of
    /// already-expensive work is a different bargain than retrying one cheap
    /// candidate, so the failure goes straight to the caller.
    #[error("synthesis request failed: {0}")]
    Synthesis(#[source] chorus_core::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            RunError::InvalidCandidateCount(0).to_string(),
            "candidate count must be at least 1, got 0"
        );
        assert_eq!(
            RunError::TooManyCandidates { given: 40, max: 32 }.to_string(),
            "candidate count 40 exceeds the configured maximum of 32"
        );
        assert_eq!(
            RunError::AllCandidatesFailed.to_string(),
            "all candidate generations failed"
        );
    }

    #[test]
    fn synthesis_error_keeps_its_source() {
        use std::error::Error as _;

        let error = RunError::Synthesis(chorus_core::Error::Timeout);
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "synthesis request failed: request timed out");
    }
}
