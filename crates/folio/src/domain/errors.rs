//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Invalid response from external service: {0}")]
    InvalidResponse(String),
}

impl DomainError {
    pub fn external<T: AsRef<str>>(service: T, detail: impl std::fmt::Display) -> Self {
        Self::ExternalService(format!("{}: {}", service.as_ref(), detail))
    }
}
