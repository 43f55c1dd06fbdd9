//! Groq Completion Provider
//!
//! Calls Groq's OpenAI-compatible `/chat/completions` endpoint using reqwest.
//! One request per call: no timeout, retry or caching is applied here.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use folio::{
    ChatMessage, Completion, CompletionOptions, CompletionProvider, DomainError, TokenUsage,
};

use crate::config::GroqConfig;

const PROVIDER_NAME: &str = "groq";

/// Groq implementation of CompletionProvider
#[derive(Clone)]
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqProvider {
    pub fn new(config: &GroqConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl ChatCompletionResponse {
    /// Answer text of the first choice; anything else is an invalid response.
    fn into_completion(self) -> Result<Completion, DomainError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::InvalidResponse("no choices returned".into()))?;

        let content = choice.message.content.ok_or_else(|| {
            DomainError::InvalidResponse("first choice has no text content".into())
        })?;

        let usage = self
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(Completion {
            content,
            model: self.model,
            usage,
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<Completion, DomainError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
            stop: options.stop_sequences.as_deref(),
        };

        tracing::debug!(
            model = %self.model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::external(PROVIDER_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DomainError::external(
                PROVIDER_NAME,
                format!("API error ({}): {}", status.as_u16(), body),
            ));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))?;

        payload.into_completion()
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    fn provider_for(server: &MockServer) -> GroqProvider {
        let config = GroqConfig::new("gsk_test").with_base_url(server.base_url());
        GroqProvider::new(&config)
    }

    fn messages() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You answer questions."),
            ChatMessage::user("Who are you?"),
        ]
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer gsk_test")
                    .json_body(json!({
                        "model": "llama-3.1-8b-instant",
                        "messages": [
                            {"role": "system", "content": "You answer questions."},
                            {"role": "user", "content": "Who are you?"}
                        ],
                        "temperature": 0.2
                    }));
                then.status(200).json_body(json!({
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "model": "llama-3.1-8b-instant",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "An assistant."},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
                }));
            })
            .await;

        let provider = provider_for(&server);
        let completion = provider
            .complete(&messages(), &CompletionOptions::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(completion.content, "An assistant.");
        assert_eq!(completion.model, "llama-3.1-8b-instant");
        assert_eq!(completion.usage.total_tokens, 15);
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    }

    #[tokio::test]
    async fn test_null_content_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({
                    "model": "llama-3.1-8b-instant",
                    "choices": [{
                        "message": {"role": "assistant", "content": null},
                        "finish_reason": "tool_calls"
                    }]
                }));
            })
            .await;

        let err = provider_for(&server)
            .complete(&messages(), &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_non_text_content_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({
                    "model": "llama-3.1-8b-instant",
                    "choices": [{"message": {"role": "assistant", "content": {"parts": []}}}]
                }));
            })
            .await;

        let err = provider_for(&server)
            .complete(&messages(), &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200)
                    .json_body(json!({"model": "llama-3.1-8b-instant", "choices": []}));
            })
            .await;

        let err = provider_for(&server)
            .complete(&messages(), &CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_api_error_is_external_service_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401)
                    .json_body(json!({"error": {"message": "Invalid API Key"}}));
            })
            .await;

        let err = provider_for(&server)
            .complete(&messages(), &CompletionOptions::default())
            .await
            .unwrap_err();

        mock.assert_hits_async(1).await;
        match err {
            DomainError::ExternalService(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("Invalid API Key"));
            }
            other => panic!("Expected ExternalService, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_external_service_error() {
        // Nothing listens on the discard port
        let config = GroqConfig::new("k").with_base_url("http://127.0.0.1:9");

        let err = GroqProvider::new(&config)
            .complete(&messages(), &CompletionOptions::default())
            .await
            .unwrap_err();

        match err {
            DomainError::ExternalService(msg) => assert!(msg.starts_with("groq: ")),
            other => panic!("Expected ExternalService, got {other:?}"),
        }
    }

    #[test]
    fn test_provider_identity() {
        let config = GroqConfig::new("gsk_test").with_model("llama-3.3-70b-versatile");
        let provider = GroqProvider::new(&config);
        assert_eq!(provider.provider_name(), "groq");
        assert_eq!(provider.model_id(), "llama-3.3-70b-versatile");
    }
}
