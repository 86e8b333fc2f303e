//! OpenAI-compatible backend configuration

/// Configuration for the OpenAI-compatible provider
///
/// Pointing `base_url` at a local server (LM Studio, vLLM, and friends speak
/// the same protocol) is the supported way to run against local models; such
/// servers typically ignore the API key, but one is always sent.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
}

impl OpenAIConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the URL for chat completions
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_openai() {
        let config = OpenAIConfig::new("key");
        assert_eq!(config.chat_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn base_url_override_serves_local_backends() {
        let config = OpenAIConfig::new("not-needed").with_base_url("http://localhost:1234/api/v0");
        assert_eq!(
            config.chat_url(),
            "http://localhost:1234/api/v0/chat/completions"
        );
    }
}
