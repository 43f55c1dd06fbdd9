//! Domain Entities
//!
//! - ProfileContext: Static background text about the site owner
//! - ChatMessage: Role-tagged message sent to a completion service

mod message;
mod profile;

pub use message::*;
pub use profile::*;
