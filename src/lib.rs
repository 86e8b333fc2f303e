//! Chorus - parallel candidate generation with synthesis for LLM backends
//!
//! Chorus asks a text-generation backend the same question several times in
//! parallel, tolerates partial failure, and then issues one dependent request
//! that merges the surviving candidate answers into a single best one.
//!
//! # Features
//!
//! - **Bounded fan-out**: N independent generations under a concurrency cap
//! - **Per-unit resilience**: exponential-backoff retry, failures downgraded
//!   to empty slots instead of aborting the run
//! - **Single synthesis pass**: one low-temperature request over the labeled
//!   candidate set
//! - **Backend-agnostic**: any `Provider` implementation will do; an
//!   OpenAI-compatible one ships in the box
//!
//! # Quick Start
//!
//! ```no_run
//! # use chorus::client::Client;
//! # use chorus::providers::OpenAI;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAI::with_api_key("your-api-key")?;
//! let client = Client::new(provider);
//!
//! let result = client.run("Explain quantum computing in simple terms.", 5).await?;
//! println!("{}", result.answer);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Re-export core types
pub use chorus_core::*;

// Re-export feature-gated modules
#[cfg(feature = "providers")]
pub mod providers {
    //! Completion backend implementations
    pub use chorus_providers::*;
}

#[cfg(feature = "client")]
pub mod client {
    //! The candidate-generation and synthesis pipeline
    pub use chorus_client::*;
}

/// Prelude module for convenient imports
pub mod prelude {

    pub use chorus_core::{
        Candidate, Error, Message, Model, Parameters, Provider, Request, Response, Role, RunResult,
    };

    #[cfg(feature = "providers")]
    pub use chorus_providers::openai::OpenAIConfig;

    #[cfg(feature = "client")]
    pub use chorus_client::{Client, RunConfig, RunError};
}
