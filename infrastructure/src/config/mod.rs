//! Configuration file loading for tailor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TAILOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tailor.toml` or `./.tailor.toml`
//! 4. Global: `$XDG_CONFIG_HOME/tailor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileInstructionsConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig,
};
pub use loader::ConfigLoader;
