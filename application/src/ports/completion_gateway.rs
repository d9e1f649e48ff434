//! Completion gateway port
//!
//! Defines the interface for turning a system prompt plus a user prompt into
//! completion text.

use async_trait::async_trait;
use tailor_domain::{CompletionOverrides, ProviderKind};
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No API key available for {0} provider")]
    MissingCredential(ProviderKind),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the back end refused an optional request parameter, in which
    /// case one retry with the minimal parameter set is allowed.
    pub fn is_unsupported_parameter(&self) -> bool {
        match self {
            GatewayError::RequestFailed { status: 400, message } => {
                message.contains("Unsupported parameter")
            }
            _ => false,
        }
    }
}

/// One completion call
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub system_prompt: &'a str,
    pub user_prompt: &'a str,
    pub overrides: &'a CompletionOverrides,
}

/// Gateway for completion back ends
///
/// This port defines how the orchestration engine talks to LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Whether a process-wide default credential is configured.
    fn is_enabled(&self) -> bool;

    /// Complete once. Errors propagate unmodified.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError>;
}
