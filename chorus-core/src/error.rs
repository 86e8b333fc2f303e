//! Error types shared across the Chorus workspace

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

/// Transport-level errors produced while talking to a completion backend
///
/// The pipeline treats every variant as retryable up to its attempt cap, so
/// the taxonomy here exists for reporting, not for branching.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request never reached the backend, or the connection dropped
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The backend answered with an error of its own
    Provider {
        /// Backend name (e.g., "openai")
        provider: String,
        /// Error message
        message: String,
        /// Backend-suggested wait before retrying (rate limits)
        retry_after: Option<Duration>,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// A request body or response payload could not be (de)serialized
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Input rejected before any backend traffic
    Validation(String),

    /// The backend did not answer in time
    Timeout,

    /// Credentials missing or rejected
    Authentication(String),

    /// Client-side configuration is unusable
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network { message, .. } => write!(f, "network error: {}", message),
            Error::Provider {
                provider, message, ..
            } => write!(f, "provider error ({}): {}", provider, message),
            Error::Serialization { message, .. } => {
                write!(f, "serialization error: {}", message)
            }
            Error::Validation(msg) => write!(f, "validation error: {}", msg),
            Error::Timeout => write!(f, "request timed out"),
            Error::Authentication(msg) => write!(f, "authentication error: {}", msg),
            Error::Configuration(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Network { source, .. }
            | Error::Provider { source, .. }
            | Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

/// Result type alias for Chorus operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Network {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
