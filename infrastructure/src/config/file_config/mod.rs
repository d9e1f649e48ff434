//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod instructions;
mod output;
mod providers;

pub use instructions::FileInstructionsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};
use tailor_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion back ends
    pub providers: FileProvidersConfig,
    /// Instruction document lookup
    pub instructions: FileInstructionsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the provider name, the timeout, and whether any API key can
    /// be found. None of these stop a run.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.providers.to_provider_config().1
    }
}
