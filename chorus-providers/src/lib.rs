//! Completion backend implementations for the Chorus pipeline
//!
//! One concrete backend ships today: an OpenAI-compatible chat-completions
//! provider that also serves local servers speaking the same protocol via a
//! configurable base URL. The `HttpClient` abstraction keeps the transport
//! swappable for tests.

#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod openai;
pub mod traits;

pub use openai::OpenAI;
