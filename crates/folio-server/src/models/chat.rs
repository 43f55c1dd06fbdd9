//! Chat DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chat request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    /// Question about the profile owner
    pub message: String,
}

/// Chat response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Model answer, unmodified
    pub answer: String,
}
