//! HTTP client abstraction and utilities

use crate::error;
use chorus_core::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// HTTP client abstraction
///
/// The pipeline is strictly request/response, so a single JSON POST is the
/// whole surface. Tests substitute their own implementation.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a POST request with a JSON body and parse a JSON reply
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error>;
}

/// Default HTTP client implementation using reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client
    ///
    /// The generous timeout accommodates large completions; per-attempt
    /// failures inside it are the retry policy's problem, not ours.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(error::network_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Network {
                message: format!("HTTP {}: {}", status, text),
                source: None,
            });
        }

        response.json().await.map_err(error::network_error)
    }
}

/// Build the standard bearer-auth JSON headers
pub fn create_headers(api_key: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| Error::Configuration(format!("invalid API key: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
