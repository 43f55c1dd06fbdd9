//! Completion Provider Port
//!
//! Abstract interface for hosted chat-completion services.
//! The server crate provides the Groq implementation; tests substitute fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ChatMessage;
use crate::domain::errors::DomainError;

/// Options for LLM completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Top-p sampling
    pub top_p: Option<f32>,
    /// Stop sequences
    pub stop_sequences: Option<Vec<String>>,
}

impl CompletionOptions {
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: Some(0.2),
            top_p: None,
            stop_sequences: None,
        }
    }
}

/// Result of a completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Answer text
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Hosted completion service
///
/// One call to [`complete`](CompletionProvider::complete) is one outbound
/// request. Implementations must not retry or cache.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion from messages
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<Completion, DomainError>;

    /// Get the provider name (e.g., "groq")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
