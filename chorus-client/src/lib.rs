//! The candidate-generation and synthesis pipeline
//!
//! This crate holds the part of Chorus with actual moving pieces: a
//! `Dispatcher` that fans one prompt out into N independent completion
//! requests under a concurrency cap with per-unit retry, and a `Synthesizer`
//! that folds the surviving candidates into a single answer with one
//! dependent request. `Client::run` sequences the two.

#![warn(missing_docs)]

mod client;
mod config;
mod dispatch;
mod error;
mod retry;
mod synthesis;

pub use client::Client;
pub use config::RunConfig;
pub use dispatch::Dispatcher;
pub use error::RunError;
pub use retry::{retry, RetryConfig};
pub use synthesis::Synthesizer;
