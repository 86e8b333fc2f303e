//! Response parsing for the OpenAI-compatible backend

use crate::error;
use crate::traits::ResponseParser;
use async_trait::async_trait;
use chorus_core::{Error, FinishReason, Response, ResponseMetadata, Usage};
use serde::Deserialize;
use serde_json::Value;

/// Parses chat-completions responses
#[derive(Clone, Copy)]
pub struct OpenAIParser;

#[async_trait]
impl ResponseParser for OpenAIParser {
    async fn parse_response(&self, value: Value) -> Result<Response, Error> {
        let response: ChatResponse =
            serde_json::from_value(value).map_err(error::serialization_error)?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            error::to_provider_error("openai", "no choices in response", None)
        })?;

        let metadata = ResponseMetadata {
            model: Some(response.model),
            id: Some(response.id),
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(parse_finish_reason),
        };

        Ok(Response {
            content: choice.message.content.unwrap_or_default(),
            metadata,
        })
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        "stop_sequence" => FinishReason::StopSequence,
        _ => FinishReason::Stop,
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    usage: Option<UsagePayload>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct UsagePayload {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
