//! Instruction source configuration from TOML (`[instructions]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where instruction documents are looked up
///
/// # Example
///
/// ```toml
/// [instructions]
/// default_path = "~/resumes/instructions.md"
/// prefer_custom = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInstructionsConfig {
    /// User-edited copy, consulted first when `prefer_custom` is set
    pub custom_path: Option<PathBuf>,
    /// The user's own instruction document
    pub default_path: Option<PathBuf>,
    /// Copy shipped alongside the tool
    pub bundled_path: Option<PathBuf>,
    pub prefer_custom: bool,
}

impl Default for FileInstructionsConfig {
    fn default() -> Self {
        Self {
            custom_path: dirs::data_dir()
                .map(|d| d.join("tailor").join("instructions.custom.md")),
            default_path: None,
            bundled_path: Some(PathBuf::from("data").join("instructions.default.md")),
            prefer_custom: false,
        }
    }
}
