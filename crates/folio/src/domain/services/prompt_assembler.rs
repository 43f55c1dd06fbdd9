//! Prompt Assembler
//!
//! Renders the fixed instructions, the profile context and a visitor's
//! question into the message sequence sent to the completion service.

use crate::domain::entities::ChatMessage;

/// Fixed instructions placed ahead of the profile context
pub const SYSTEM_INSTRUCTIONS: &str = "You are a helpful assistant that answers questions about Akash Swain. \
Base your answers only on the provided context. If something is unknown, say you don't have that information. \
Keep answers concise and professional.";

/// Separator between the instructions and the context block
const CONTEXT_HEADER: &str = "\n\nContext:\n";

pub struct PromptAssembler;

impl PromptAssembler {
    /// Build `[system, user]` for a single question.
    ///
    /// The question is passed through verbatim; nothing is validated,
    /// trimmed or escaped.
    pub fn assemble(context: &str, question: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(Self::system_prompt(context)),
            ChatMessage::user(question),
        ]
    }

    /// System message content for a given context
    pub fn system_prompt(context: &str) -> String {
        let mut prompt =
            String::with_capacity(SYSTEM_INSTRUCTIONS.len() + CONTEXT_HEADER.len() + context.len());
        prompt.push_str(SYSTEM_INSTRUCTIONS);
        prompt.push_str(CONTEXT_HEADER);
        prompt.push_str(context);
        prompt
    }
}
