//! Folio API Models
//!
//! - Chat: Question/answer DTOs
//! - Error: Error body returned by every failing endpoint

mod chat;
mod error;

pub use chat::*;
pub use error::*;
