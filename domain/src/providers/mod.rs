//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::core::error::DomainError;
use std::str::FromStr;

/// Supported completion back-end families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(DomainError::UnknownProvider(s.to_string())),
        }
    }
}

/// Per-run overrides forwarded untouched to every completion call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionOverrides {
    /// API key to use instead of the configured one
    pub credential: Option<String>,
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
}

impl CompletionOverrides {
    pub fn has_credential(&self) -> bool {
        self.credential.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider used when a run does not override it.
    pub default: ProviderKind,
    /// Request timeout for a single completion, in seconds.
    pub timeout_secs: u64,
    /// OpenAI Responses API settings.
    pub openai: BackendConfig,
    /// Gemini (OpenAI-compatible endpoint) settings.
    pub gemini: BackendConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default: ProviderKind::OpenAi,
            timeout_secs: 300,
            openai: BackendConfig::openai(),
            gemini: BackendConfig::gemini(),
        }
    }
}

/// Settings for one completion back end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Resolved API key (from the config file or its environment variable).
    pub api_key: Option<String>,
    pub base_url: String,
    /// Model used when a run does not override it.
    pub model: String,
    /// Optional output cap; dropped on retry if the back end rejects it.
    pub max_output_tokens: Option<u32>,
}

impl BackendConfig {
    pub fn openai() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-5".to_string(),
            max_output_tokens: None,
        }
    }

    pub fn gemini() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            model: "gemini-2.5-flash".to_string(),
            max_output_tokens: None,
        }
    }
}
