//! Prompt domain
//!
//! Templates for the system and user prompts of each pipeline stage.

pub mod stage;

pub use stage::{ARTIFACT_WINDOW, StagePromptTemplate};
