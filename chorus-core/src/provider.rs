//! The completion-service capability backends implement

use crate::error::Result;
use crate::types::request::Request;
use crate::types::response::Response;
use async_trait::async_trait;

/// A text-generation backend
///
/// This is the single external capability the pipeline consumes: hand the
/// backend a fully-built request, get back one completed response or an
/// error. Implementations must be shareable across concurrent dispatch units,
/// which only ever read their configuration.
///
/// The pipeline does not classify failures; any error returned here is
/// subject to the caller's retry policy and then terminal.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a request and await the complete response
    async fn request(&self, request: Request) -> Result<Response>;
}
