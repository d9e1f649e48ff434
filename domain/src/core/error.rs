//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown provider: {0} (expected \"openai\" or \"gemini\")")]
    UnknownProvider(String),

    #[error("Invalid job id: {0}")]
    InvalidJobId(String),
}
