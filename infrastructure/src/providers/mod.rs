//! Completion back ends
//!
//! Each adapter speaks one HTTP dialect. [`RoutingGateway`](routing::RoutingGateway)
//! picks the adapter for a call and exposes them as a single
//! [`CompletionGateway`](tailor_application::CompletionGateway).

pub mod gemini;
mod http;
pub mod openai;
pub mod routing;

use async_trait::async_trait;
use tailor_application::GatewayError;
use tailor_domain::ProviderKind;

/// A single completion call as seen by an adapter
#[derive(Debug, Clone, Copy)]
pub struct AdapterCall<'a> {
    pub system_prompt: &'a str,
    pub user_prompt: &'a str,
    /// Per-run API key, used instead of the configured one when non-blank
    pub credential: Option<&'a str>,
    /// Per-run model, used instead of the configured one when non-blank
    pub model: Option<&'a str>,
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    /// Whether a key is configured for this back end.
    fn has_credential(&self) -> bool;
    async fn complete(&self, call: AdapterCall<'_>) -> Result<String, GatewayError>;
}

/// First non-blank candidate.
fn non_blank<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    preferred
        .filter(|v| !v.trim().is_empty())
        .or(fallback.filter(|v| !v.trim().is_empty()))
}

/// Key for a call: the per-run credential, else the configured key.
fn resolve_key<'a>(
    kind: ProviderKind,
    call: &AdapterCall<'a>,
    configured: Option<&'a str>,
) -> Result<&'a str, GatewayError> {
    non_blank(call.credential, configured).ok_or(GatewayError::MissingCredential(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call<'a>(credential: Option<&'a str>) -> AdapterCall<'a> {
        AdapterCall {
            system_prompt: "sys",
            user_prompt: "user",
            credential,
            model: None,
        }
    }

    #[test]
    fn test_override_key_wins() {
        let key = resolve_key(ProviderKind::OpenAi, &call(Some("sk-run")), Some("sk-conf"));
        assert_eq!(key.unwrap(), "sk-run");
    }

    #[test]
    fn test_blank_override_falls_back_to_configured() {
        let key = resolve_key(ProviderKind::OpenAi, &call(Some("  ")), Some("sk-conf"));
        assert_eq!(key.unwrap(), "sk-conf");
    }

    #[test]
    fn test_missing_key() {
        let err = resolve_key(ProviderKind::Gemini, &call(None), None).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::MissingCredential(ProviderKind::Gemini)
        ));
    }
}
