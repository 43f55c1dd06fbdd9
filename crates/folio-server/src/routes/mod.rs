//! Folio Routes
//!
//! - / - Landing page
//! - /resume - Resume download
//! - /static/* - Static assets
//! - /api/chat - Profile chat (LLM)

pub mod chat;
pub mod site;
pub mod swagger;
