//! OpenAI-compatible provider implementation
//!
//! Ties the config, converter, and parser together behind the core
//! `Provider` trait using the standardized request/response pipeline.

use crate::http::{create_headers, HttpClient, ReqwestClient};
use crate::openai::{config::OpenAIConfig, converter::OpenAIConverter, parser::OpenAIParser};
use crate::traits::{RequestConverter, ResponseParser};
use async_trait::async_trait;
use chorus_core::{Error, Provider, Request, Response};
use std::sync::Arc;
use tracing::debug;

/// OpenAI-compatible chat-completions provider
///
/// # Example
///
/// ```no_run
/// use chorus_providers::openai::{OpenAI, OpenAIConfig};
///
/// // Hosted API
/// let provider = OpenAI::with_api_key("your-api-key").unwrap();
///
/// // Local server speaking the same protocol
/// let config = OpenAIConfig::new("not-needed")
///     .with_base_url("http://localhost:1234/v1");
/// let provider = OpenAI::with_config(config).unwrap();
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl OpenAI {
    /// Create a provider with the given configuration and HTTP client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: OpenAIConverter,
            parser: OpenAIParser,
        }
    }

    /// Create a provider with the given configuration and a default client
    pub fn with_config(config: OpenAIConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(config, client))
    }

    /// Create a provider against the hosted API with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(OpenAIConfig::new(api_key))
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn request(&self, request: Request) -> Result<Response, Error> {
        let model = request.model.to_string();
        let body = self.converter.convert_request(request).await?;
        let headers = create_headers(&self.config.api_key)?;

        let url = self.config.chat_url();
        debug!(%url, %model, "sending completion request");

        let response = self.client.post(&url, headers, body).await?;
        self.parser.parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::{Message, Parameters};
    use reqwest::header::HeaderMap;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Captures the outgoing body and replies with a canned payload
    struct CapturingClient {
        seen: Mutex<Vec<(String, Value)>>,
        reply: Value,
    }

    #[async_trait]
    impl HttpClient for CapturingClient {
        async fn post(&self, url: &str, _headers: HeaderMap, body: Value) -> Result<Value, Error> {
            self.seen.lock().unwrap().push((url.to_string(), body));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn request_flows_through_converter_and_parser() {
        let client = Arc::new(CapturingClient {
            seen: Mutex::new(Vec::new()),
            reply: json!({
                "id": "1", "model": "gpt-5",
                "choices": [{ "message": { "content": "pong" }, "finish_reason": "stop" }]
            }),
        });
        let provider = OpenAI::new(OpenAIConfig::new("k"), client.clone());

        let request = Request {
            messages: vec![Message::user("ping")],
            model: "gpt-5".into(),
            parameters: Parameters {
                temperature: Some(0.9),
                top_p: Some(1.0),
                max_tokens: Some(64),
            },
        };

        let response = provider.request(request).await.unwrap();
        assert_eq!(response.content, "pong");

        let seen = client.seen.lock().unwrap();
        let (url, body) = &seen[0];
        assert_eq!(url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(body["messages"][0]["content"], "ping");
        assert_eq!(body["temperature"], json!(0.9_f32));
    }
}
