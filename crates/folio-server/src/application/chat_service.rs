//! Chat Application Service (Use Case)
//!
//! Answers a single question about the profile owner.

use std::sync::Arc;

use folio::{CompletionOptions, CompletionProvider, DomainError, ProfileContext, PromptAssembler};

/// Application service for profile chat
pub struct ChatService<P: CompletionProvider + ?Sized> {
    provider: Arc<P>,
    profile: Arc<ProfileContext>,
    options: CompletionOptions,
}

impl<P: CompletionProvider + ?Sized> ChatService<P> {
    pub fn new(provider: Arc<P>, profile: Arc<ProfileContext>, options: CompletionOptions) -> Self {
        Self {
            provider,
            profile,
            options,
        }
    }

    /// Answer a question with exactly one completion call
    pub async fn ask(&self, question: &str) -> Result<String, DomainError> {
        let messages = PromptAssembler::assemble(self.profile.text(), question);

        let completion = self.provider.complete(&messages, &self.options).await?;

        tracing::info!(
            "Chat answered via {} ({}) - {} tokens",
            self.provider.provider_name(),
            completion.model,
            completion.usage.total_tokens
        );

        Ok(completion.content)
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }
}
