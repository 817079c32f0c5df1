//! Base trait for reply backends

use async_trait::async_trait;
use thiserror::Error;

/// Error type for responder operations
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}

pub type ResponderResult<T> = Result<T, ResponderError>;

/// Trait for reply backends
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce the assistant's reply to a user message
    async fn respond(&self, input: &str) -> ResponderResult<String>;
}
