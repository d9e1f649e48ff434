//! Run Pipeline use case
//!
//! Executes a compiled [`PromptBundle`] against a working document, one
//! completion per agent, strictly in order.

use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use tailor_domain::{
    CompletionOverrides, OrchestrationResult, ProgressEvent, PromptBundle, ProviderKind,
    StagePromptTemplate,
};
use tracing::{debug, info, warn};

/// Stage label of the single event emitted when no credential is available
pub const DISABLED_STAGE: &str = "LLM disabled; returning document unchanged";

/// Stage label of the final event of a successful run
pub const COMPLETED_STAGE: &str = "Completed";

/// Input for the RunPipeline use case
#[derive(Debug, Clone)]
pub struct RunPipelineInput {
    /// Initial working document
    pub document: String,
    /// Job description the pipeline tailors the document to
    pub task_description: String,
    pub overrides: CompletionOverrides,
}

impl RunPipelineInput {
    pub fn new(document: impl Into<String>, task_description: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            task_description: task_description.into(),
            overrides: CompletionOverrides::default(),
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.overrides.credential = Some(credential.into());
        self
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.overrides.provider = Some(provider);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.overrides.model = Some(model.into());
        self
    }
}

/// Structured status returned as the captured analysis of a disabled run.
pub fn disabled_status() -> String {
    let status = serde_json::json!({
        "status": "llm_disabled",
        "message": "No API key available; returning the document unchanged.",
    });
    serde_json::to_string_pretty(&status).unwrap_or_else(|_| status.to_string())
}

/// Use case for running a compiled pipeline
pub struct RunPipelineUseCase<G: CompletionGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CompletionGateway + ?Sized> Clone for RunPipelineUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: CompletionGateway + ?Sized> RunPipelineUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        bundle: &PromptBundle,
        input: RunPipelineInput,
    ) -> Result<OrchestrationResult, GatewayError> {
        self.execute_with_progress(bundle, input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// A completion failure ends the run immediately and is returned as-is;
    /// no partial result is produced.
    pub async fn execute_with_progress(
        &self,
        bundle: &PromptBundle,
        input: RunPipelineInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<OrchestrationResult, GatewayError> {
        if !self.gateway.is_enabled() && !input.overrides.has_credential() {
            warn!("No completion credential configured; returning document unchanged");
            let status = disabled_status();
            progress.on_progress(
                &ProgressEvent::new(DISABLED_STAGE, 100).with_captured_analysis(Some(&status)),
            );
            return Ok(OrchestrationResult::new(input.document, status));
        }

        let RunPipelineInput {
            mut document,
            task_description,
            overrides,
        } = input;

        let total = bundle.len();
        let mut artifacts: Vec<String> = Vec::with_capacity(total);
        let mut captured_analysis: Option<String> = None;

        info!("Running pipeline with {} agents", total);

        for (index, agent) in bundle.agents().iter().enumerate() {
            let position = index + 1;

            progress.on_progress(
                &ProgressEvent::new(
                    format!("{}: running ({}/{})", agent.name, position, total),
                    ProgressEvent::stage_percent(index, total),
                )
                .with_captured_analysis(captured_analysis.as_deref()),
            );

            let system_prompt = StagePromptTemplate::system(bundle.global_rules(), agent);
            let user_prompt =
                StagePromptTemplate::user(agent, &task_description, &document, &artifacts);
            debug!(
                "{} ({}): system prompt {} bytes, user prompt {} bytes",
                agent.name,
                agent.mode,
                system_prompt.len(),
                user_prompt.len()
            );

            let output = self
                .gateway
                .complete(CompletionRequest {
                    system_prompt: &system_prompt,
                    user_prompt: &user_prompt,
                    overrides: &overrides,
                })
                .await
                .inspect_err(|e| warn!("{} failed: {}", agent.name, e))?;

            info!("{} completed ({} bytes)", agent.name, output.len());
            artifacts.push(format!("{}\n{}", agent.name, output));

            // An empty analysis counts as not captured.
            if captured_analysis.is_none() && agent.is_jd_analysis() && !output.is_empty() {
                captured_analysis = Some(output.clone());
            }

            progress.on_progress(
                &ProgressEvent::new(
                    format!("{}: completed", agent.name),
                    ProgressEvent::stage_percent(position, total),
                )
                .with_captured_analysis(captured_analysis.as_deref()),
            );

            if agent.mode.replaces_document() {
                document = output;
            }
        }

        let captured_analysis = captured_analysis
            .or_else(|| artifacts.first().cloned())
            .unwrap_or_default();

        progress.on_progress(&ProgressEvent::new(COMPLETED_STAGE, 100));

        Ok(OrchestrationResult::new(document, captured_analysis))
    }
}
