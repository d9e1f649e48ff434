//! Use cases (application services)
//!
//! - [`run_pipeline`]: the orchestration engine: run a compiled pipeline
//! - [`start_job`]: run a pipeline in the background, tracked by job id

pub mod run_pipeline;
pub mod start_job;
