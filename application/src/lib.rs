//! Application layer for tailor
//!
//! This crate contains the orchestration engine, the job registry, and the
//! port definitions adapters implement. It depends only on the domain layer.

pub mod jobs;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use jobs::{JobProgressNotifier, JobRegistry};
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_pipeline::{
    COMPLETED_STAGE, DISABLED_STAGE, RunPipelineInput, RunPipelineUseCase, disabled_status,
};
pub use use_cases::start_job::{JobError, JobHandle, StartJobUseCase};
