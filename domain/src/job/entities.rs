//! Job entities

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a background pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidJobId(s.to_string()))
    }
}

/// Lifecycle state of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Running,
    Completed,
    Failed,
}

impl JobState {
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Running => "running",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobState::Running)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a job's progress (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub id: JobId,
    pub state: JobState,
    /// Label of the most recent progress event
    pub stage: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Final document, set on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_analysis: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl JobStatus {
    /// A freshly queued job.
    pub fn queued(id: JobId) -> Self {
        Self {
            id,
            state: JobState::Running,
            stage: "Queued".to_string(),
            progress: 0,
            error: None,
            document: None,
            captured_analysis: None,
            updated_at: Utc::now(),
        }
    }

    /// Record a progress event. Analysis is only overwritten when provided.
    pub fn record_progress(&mut self, stage: &str, percent: u8, captured_analysis: Option<&str>) {
        self.stage = stage.to_string();
        self.progress = percent.min(100);
        if let Some(analysis) = captured_analysis {
            self.captured_analysis = Some(analysis.to_string());
        }
        self.touch();
    }

    pub fn complete(&mut self, document: String, captured_analysis: String) {
        self.state = JobState::Completed;
        self.stage = "Completed".to_string();
        self.progress = 100;
        self.document = Some(document);
        self.captured_analysis = Some(captured_analysis);
        self.touch();
    }

    /// Progress is left where the failing stage stopped.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.state = JobState::Failed;
        self.stage = "Failed".to_string();
        self.error = Some(error.into());
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_roundtrip_through_display() {
        let id = JobId::new();
        let parsed: JobId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_job_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<JobId>().unwrap_err();
        assert_eq!(err, DomainError::InvalidJobId("not-a-uuid".to_string()));
    }

    #[test]
    fn test_queued_status() {
        let status = JobStatus::queued(JobId::new());
        assert_eq!(status.state, JobState::Running);
        assert_eq!(status.stage, "Queued");
        assert_eq!(status.progress, 0);
        assert!(!status.state.is_terminal());
    }

    #[test]
    fn test_progress_keeps_analysis_when_absent() {
        let mut status = JobStatus::queued(JobId::new());
        status.record_progress("Agent 1: JD Analyst: completed", 35, Some("{\"k\":1}"));
        status.record_progress("Agent 2: Document Tailor: running (2/3)", 35, None);

        assert_eq!(status.progress, 35);
        assert_eq!(status.captured_analysis.as_deref(), Some("{\"k\":1}"));
    }

    #[test]
    fn test_fail_keeps_progress() {
        let mut status = JobStatus::queued(JobId::new());
        status.record_progress("stage", 65, None);
        status.fail("boom");

        assert_eq!(status.state, JobState::Failed);
        assert_eq!(status.stage, "Failed");
        assert_eq!(status.progress, 65);
        assert_eq!(status.error.as_deref(), Some("boom"));
        assert!(status.state.is_terminal());
    }

    #[test]
    fn test_complete() {
        let mut status = JobStatus::queued(JobId::new());
        status.complete("doc".to_string(), "analysis".to_string());
        assert_eq!(status.state, JobState::Completed);
        assert_eq!(status.progress, 100);
        assert_eq!(status.document.as_deref(), Some("doc"));
    }
}
