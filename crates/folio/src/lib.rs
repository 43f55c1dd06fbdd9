//! Folio Domain Library
//!
//! Core domain types and interfaces for the Folio portfolio chat.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Profile context and chat messages
//!   - `value_objects/`: Message roles
//!   - `services/`: Prompt assembly
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Completion provider interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use folio::{PromptAssembler, ProfileContext};
//!
//! let profile = ProfileContext::builtin();
//! let messages = PromptAssembler::assemble(profile.text(), "Where does Akash work?");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ChatMessage, DomainError, MessageRole, ProfileContext, PromptAssembler, PROFILE_CONTEXT,
    SYSTEM_INSTRUCTIONS,
};
pub use ports::{Completion, CompletionOptions, CompletionProvider, TokenUsage};
