//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use tailor_domain::{BackendConfig, ConfigIssue, ConfigIssueCode, ProviderConfig, ProviderKind};

/// Timeout applied when the configured one is unusable.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    /// Model used when a run does not override it.
    pub model: String,
    /// Optional output cap per response.
    pub max_output_tokens: Option<u32>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let backend = BackendConfig::openai();
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: backend.base_url,
            model: backend.model,
            max_output_tokens: None,
        }
    }
}

/// Gemini provider configuration (OpenAI-compatible endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: Option<u32>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let backend = BackendConfig::gemini();
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: backend.base_url,
            model: backend.model,
            max_output_tokens: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "openai" or "gemini".
    pub default: String,
    /// Timeout for one completion request, in seconds.
    pub timeout_secs: u64,
    pub openai: FileOpenAiConfig,
    pub gemini: FileGeminiConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            default: ProviderKind::default().as_str().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            openai: FileOpenAiConfig::default(),
            gemini: FileGeminiConfig::default(),
        }
    }
}

impl FileProvidersConfig {
    /// Parse `default`, falling back to OpenAI on unknown names.
    pub fn parse_default(&self) -> (ProviderKind, Vec<ConfigIssue>) {
        match self.default.parse::<ProviderKind>() {
            Ok(kind) => (kind, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "providers.default".to_string(),
                        value: self.default.clone(),
                        valid_values: vec!["openai".to_string(), "gemini".to_string()],
                    },
                    format!(
                        "providers.default: unknown value '{}', falling back to 'openai'",
                        self.default
                    ),
                );
                (ProviderKind::default(), vec![issue])
            }
        }
    }

    /// Parse `timeout_secs`, replacing zero with the built-in default.
    pub fn parse_timeout(&self) -> (u64, Vec<ConfigIssue>) {
        if self.timeout_secs == 0 {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::ZeroTimeout,
                format!(
                    "providers.timeout_secs cannot be 0, falling back to {}",
                    DEFAULT_TIMEOUT_SECS
                ),
            );
            return (DEFAULT_TIMEOUT_SECS, vec![issue]);
        }
        (self.timeout_secs, Vec::new())
    }

    /// Resolve into the domain [`ProviderConfig`], reading key variables
    /// through `lookup_env`.
    pub fn to_provider_config_with<F>(&self, lookup_env: F) -> (ProviderConfig, Vec<ConfigIssue>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let (default, mut issues) = self.parse_default();
        let (timeout_secs, timeout_issues) = self.parse_timeout();
        issues.extend(timeout_issues);

        let openai = BackendConfig {
            api_key: resolve_key(
                self.openai.api_key.as_deref(),
                &self.openai.api_key_env,
                &lookup_env,
            ),
            base_url: self.openai.base_url.clone(),
            model: self.openai.model.clone(),
            max_output_tokens: self.openai.max_output_tokens,
        };
        let gemini = BackendConfig {
            api_key: resolve_key(
                self.gemini.api_key.as_deref(),
                &self.gemini.api_key_env,
                &lookup_env,
            ),
            base_url: self.gemini.base_url.clone(),
            model: self.gemini.model.clone(),
            max_output_tokens: self.gemini.max_output_tokens,
        };

        if openai.api_key.is_none() && gemini.api_key.is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoCredentials,
                format!(
                    "No API key found (checked {} and {}); runs return the document unchanged",
                    self.openai.api_key_env, self.gemini.api_key_env
                ),
            ));
        }

        let config = ProviderConfig {
            default,
            timeout_secs,
            openai,
            gemini,
        };
        (config, issues)
    }

    /// Resolve against the process environment.
    pub fn to_provider_config(&self) -> (ProviderConfig, Vec<ConfigIssue>) {
        self.to_provider_config_with(|name| std::env::var(name).ok())
    }
}

/// A key written in the file wins over its environment variable.
fn resolve_key<F>(direct: Option<&str>, env_name: &str, lookup_env: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    direct
        .map(str::to_string)
        .or_else(|| lookup_env(env_name))
        .filter(|key| !key.trim().is_empty())
}
