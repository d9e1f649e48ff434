//! Progress notifier that writes into the job registry

use super::registry::JobRegistry;
use crate::ports::progress::ProgressNotifier;
use std::sync::Arc;
use tailor_domain::{JobId, ProgressEvent};
use tracing::trace;

/// Adapter: `ProgressNotifier` → `JobRegistry`
///
/// Records stage label and percent, and the captured analysis whenever an
/// event carries one. Events for a discarded job are dropped.
pub struct JobProgressNotifier {
    registry: Arc<JobRegistry>,
    job_id: JobId,
}

impl JobProgressNotifier {
    pub fn new(registry: Arc<JobRegistry>, job_id: JobId) -> Self {
        Self { registry, job_id }
    }
}

impl ProgressNotifier for JobProgressNotifier {
    fn on_progress(&self, event: &ProgressEvent) {
        let recorded = self.registry.update(&self.job_id, |status| {
            status.record_progress(
                &event.stage_label,
                event.percent,
                event.captured_analysis.as_deref(),
            )
        });
        if !recorded {
            trace!("Dropping progress for discarded job {}", self.job_id);
        }
    }
}
