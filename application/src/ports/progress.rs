//! Progress notification port
//!
//! Defines the interface for reporting stage-boundary progress during a
//! pipeline run.

use tailor_domain::ProgressEvent;

/// Callback for progress updates during a pipeline run
///
/// Called synchronously on the engine's task at every stage boundary, so
/// implementations must return promptly. Implementations live in the
/// presentation layer (console) or next to the job registry.
pub trait ProgressNotifier: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
