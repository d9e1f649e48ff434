//! Domain layer for tailor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Instruction compiler
//!
//! [`compile`] turns a loosely structured (or embedded-JSON structured)
//! instruction document into a [`PromptBundle`]: global rules plus an ordered,
//! never-empty list of [`Agent`] stages.
//!
//! ## Pipeline
//!
//! Each [`Agent`] has an [`AgentMode`]. `Json` stages produce analysis
//! artifacts; `Latex` stages produce a full document that replaces the
//! working document for every later stage.

pub mod config;
pub mod core;
pub mod instructions;
pub mod job;
pub mod pipeline;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::DomainError;
pub use instructions::{compile, extract_workflow_steps};
pub use job::{JobId, JobState, JobStatus};
pub use pipeline::{
    entities::{Agent, AgentMode, PromptBundle},
    value_objects::{OrchestrationResult, ProgressEvent},
};
pub use prompt::{ARTIFACT_WINDOW, StagePromptTemplate};
pub use providers::{BackendConfig, CompletionOverrides, ProviderConfig, ProviderKind};
