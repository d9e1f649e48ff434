//! Start Job use case
//!
//! Runs a pipeline on a background tokio task and tracks it in the
//! [`JobRegistry`]. Callers poll the registry by job id; there is no
//! cancellation, a caller that loses interest simply discards the job.

use super::run_pipeline::{RunPipelineInput, RunPipelineUseCase};
use crate::jobs::{JobProgressNotifier, JobRegistry};
use crate::ports::completion_gateway::CompletionGateway;
use std::sync::Arc;
use tailor_domain::{JobId, PromptBundle};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Errors that prevent a job from being started
#[derive(Error, Debug)]
pub enum JobError {
    #[error("No document to tailor: the initial document is empty")]
    EmptyDocument,
}

/// A started job
pub struct JobHandle {
    pub id: JobId,
    /// Resolves once the registry holds the terminal status
    pub task: JoinHandle<()>,
}

/// Use case for starting background pipeline runs
pub struct StartJobUseCase<G: CompletionGateway + ?Sized + 'static> {
    pipeline: RunPipelineUseCase<G>,
    registry: Arc<JobRegistry>,
}

impl<G: CompletionGateway + ?Sized + 'static> StartJobUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: Arc<JobRegistry>) -> Self {
        Self {
            pipeline: RunPipelineUseCase::new(gateway),
            registry,
        }
    }

    /// Register a job and spawn its run. Must be called inside a tokio runtime.
    pub fn start(
        &self,
        bundle: PromptBundle,
        input: RunPipelineInput,
    ) -> Result<JobHandle, JobError> {
        if input.document.trim().is_empty() {
            return Err(JobError::EmptyDocument);
        }

        let id = self.registry.create();
        let registry = Arc::clone(&self.registry);
        let pipeline = self.pipeline.clone();

        info!("Starting job {} ({} agents)", id, bundle.len());

        let task = tokio::spawn(async move {
            let notifier = JobProgressNotifier::new(Arc::clone(&registry), id);
            match pipeline.execute_with_progress(&bundle, input, &notifier).await {
                Ok(result) => {
                    info!("Job {} completed", id);
                    registry.update(&id, |status| {
                        status.complete(result.final_document, result.captured_analysis)
                    });
                }
                Err(e) => {
                    warn!("Job {} failed: {}", id, e);
                    registry.update(&id, |status| status.fail(e.to_string()));
                }
            }
        });

        Ok(JobHandle { id, task })
    }
}
