//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the prompt assembler and the completion provider.

mod chat_service;

pub use chat_service::ChatService;
