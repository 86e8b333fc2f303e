//! Request conversion for the OpenAI-compatible backend

use crate::traits::RequestConverter;
use async_trait::async_trait;
use chorus_core::{Error, Message, Request, Role};
use serde_json::{json, Value};

/// Converts generic requests to chat-completions JSON
#[derive(Clone, Copy)]
pub struct OpenAIConverter;

#[async_trait]
impl RequestConverter for OpenAIConverter {
    async fn convert_request(&self, request: Request) -> Result<Value, Error> {
        let mut body = json!({
            "model": request.model.to_string(),
            "messages": convert_messages(&request.messages),
            "stream": false,
        });

        if let Some(temperature) = request.parameters.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(top_p) = request.parameters.top_p {
            body["top_p"] = json!(top_p);
        }
        if let Some(max_tokens) = request.parameters.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        Ok(body)
    }
}

fn convert_messages(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .map(|msg| {
            let role = match msg.role {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            json!({ "role": role, "content": msg.content })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::Parameters;

    #[tokio::test]
    async fn body_carries_model_messages_and_parameters() {
        let request = Request {
            messages: vec![Message::system("be brief"), Message::user("hello")],
            model: "gpt-5".into(),
            parameters: Parameters {
                temperature: Some(0.9),
                top_p: Some(1.0),
                max_tokens: Some(30_000),
            },
        };

        let body = OpenAIConverter.convert_request(request).await.unwrap();

        assert_eq!(body["model"], "gpt-5");
        assert_eq!(body["stream"], false);
        // f32 widens to f64 on the way into the body
        assert_eq!(body["temperature"], json!(0.9_f32));
        assert_eq!(body["top_p"], json!(1.0_f32));
        assert_eq!(body["max_tokens"], 30_000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[tokio::test]
    async fn unset_parameters_are_omitted() {
        let request = Request {
            messages: vec![Message::user("hi")],
            model: "m".into(),
            parameters: Parameters::default(),
        };

        let body = OpenAIConverter.convert_request(request).await.unwrap();

        assert!(body.get("temperature").is_none());
        assert!(body.get("top_p").is_none());
        assert!(body.get("max_tokens").is_none());
    }
}
