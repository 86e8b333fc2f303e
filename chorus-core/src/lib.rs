//! Core traits and types for the Chorus pipeline
//!
//! This crate provides the fundamental abstractions shared by the rest of the
//! workspace: the completion request/response model, the `Provider` trait that
//! backends implement, and the candidate/result types the pipeline produces.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use provider::Provider;
pub use types::{
    candidate::{Candidate, RunResult},
    message::{Message, Role},
    request::{Model, Parameters, ParametersBuilder, Request, RequestBuilder},
    response::{FinishReason, Response, ResponseMetadata, Usage},
};
