//! Pipeline value objects - progress events and the run result.

use serde::{Deserialize, Serialize};

/// Percent reported before the first stage starts.
const PROGRESS_FLOOR: usize = 5;
/// Span of the progress bar shared out across stages.
const PROGRESS_SPAN: usize = 90;

/// Stage-boundary progress of a run.
///
/// Emitted synchronously, once per boundary, never replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage_label: String,
    /// Always within `0..=100`
    pub percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_analysis: Option<String>,
}

impl ProgressEvent {
    pub fn new(stage_label: impl Into<String>, percent: u8) -> Self {
        Self {
            stage_label: stage_label.into(),
            percent: percent.min(100),
            captured_analysis: None,
        }
    }

    pub fn with_captured_analysis(mut self, analysis: Option<&str>) -> Self {
        self.captured_analysis = analysis.map(str::to_string);
        self
    }

    /// Percent after `completed` of `total` stages: `5 + completed/total * 90`,
    /// truncated.
    pub fn stage_percent(completed: usize, total: usize) -> u8 {
        let total = total.max(1);
        let percent = PROGRESS_FLOOR + (completed.min(total) * PROGRESS_SPAN) / total;
        percent as u8
    }
}

/// Final outcome of one orchestration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationResult {
    /// Working document after the last document-producing stage
    pub final_document: String,
    /// Output of the JD-analysis stage, or the first artifact when no stage
    /// matched
    pub captured_analysis: String,
}

impl OrchestrationResult {
    pub fn new(final_document: impl Into<String>, captured_analysis: impl Into<String>) -> Self {
        Self {
            final_document: final_document.into(),
            captured_analysis: captured_analysis.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_percent_three_stages() {
        let percents: Vec<u8> = (0..=3).map(|i| ProgressEvent::stage_percent(i, 3)).collect();
        assert_eq!(percents, vec![5, 35, 65, 95]);
    }

    #[test]
    fn test_stage_percent_truncates() {
        // 90 / 7 = 12.857...
        assert_eq!(ProgressEvent::stage_percent(1, 7), 17);
        assert_eq!(ProgressEvent::stage_percent(7, 7), 95);
    }

    #[test]
    fn test_stage_percent_is_non_decreasing() {
        for total in 1..20 {
            let mut last = 0;
            for done in 0..=total {
                let p = ProgressEvent::stage_percent(done, total);
                assert!(p >= last);
                assert!(p <= 95);
                last = p;
            }
        }
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(ProgressEvent::new("x", 250).percent, 100);
    }

    #[test]
    fn test_captured_analysis_attachment() {
        let event = ProgressEvent::new("stage", 40).with_captured_analysis(Some("{}"));
        assert_eq!(event.captured_analysis.as_deref(), Some("{}"));

        let event = ProgressEvent::new("stage", 40).with_captured_analysis(None);
        assert!(event.captured_analysis.is_none());
    }
}
