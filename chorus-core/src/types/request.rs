//! Request types for completion backends

use crate::types::message::Message;
use thiserror::Error;

/// A model identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model(pub String);

impl Model {
    /// Create a new model identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sampling parameters for a completion request
///
/// Only the knobs the pipeline actually turns: temperature differs between
/// the candidate and synthesis stages, top_p is pinned, and max_tokens caps
/// each call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    /// Temperature for randomness (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Top-p nucleus sampling
    pub top_p: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl Parameters {
    /// Create a new parameters builder
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }
}

/// Builder for Parameters
#[derive(Default)]
pub struct ParametersBuilder {
    params: Parameters,
}

impl ParametersBuilder {
    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.params.temperature = Some(temp);
        self
    }

    /// Set top-p
    pub fn top_p(mut self, p: f32) -> Self {
        self.params.top_p = Some(p);
        self
    }

    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.params.max_tokens = Some(tokens);
        self
    }

    /// Build the parameters
    pub fn build(self) -> Parameters {
        self.params
    }
}

/// A complete request to a completion backend
///
/// Built once per pipeline stage and shared read-only across every unit of
/// that stage; cloning is cheap enough that each attempt gets its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The messages to complete
    pub messages: Vec<Message>,
    /// The model to use
    pub model: Model,
    /// Sampling parameters
    pub parameters: Parameters,
}

impl Request {
    /// Create a new request builder
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }
}

/// Builder for Request
#[derive(Default)]
pub struct RequestBuilder {
    messages: Vec<Message>,
    model: Option<Model>,
    parameters: Parameters,
}

impl RequestBuilder {
    /// Add a message
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple messages
    pub fn messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set parameters wholesale
    pub fn parameters(mut self, params: Parameters) -> Self {
        self.parameters = params;
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.parameters.temperature = Some(temp);
        self
    }

    /// Set top-p
    pub fn top_p(mut self, p: f32) -> Self {
        self.parameters.top_p = Some(p);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.parameters.max_tokens = Some(tokens);
        self
    }

    /// Build the request, returning an error if validation fails
    pub fn try_build(self) -> Result<Request, BuildError> {
        if self.messages.is_empty() {
            return Err(BuildError::NoMessages);
        }
        let model = self.model.ok_or(BuildError::NoModel)?;

        Ok(Request {
            messages: self.messages,
            model,
            parameters: self.parameters,
        })
    }
}

/// Errors that can occur when building a request
#[derive(Debug, Error)]
pub enum BuildError {
    /// Request must contain at least one message
    #[error("request must contain at least one message")]
    NoMessages,
    /// Request must name a model
    #[error("request must name a model")]
    NoModel,
}
