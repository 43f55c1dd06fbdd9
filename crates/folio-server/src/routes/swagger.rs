//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::chat::chat),
    components(schemas(ChatRequest, ChatResponse, ErrorResponse)),
    tags(
        (name = "Chat", description = "Questions about the profile owner, answered by an LLM")
    ),
    info(
        title = "Folio API",
        description = "Portfolio site with a profile chat assistant"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_chat_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/chat"));
    }
}
