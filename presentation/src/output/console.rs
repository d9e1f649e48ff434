//! Console output formatter for pipeline results

use colored::Colorize;
use tailor_domain::{
    ConfigIssue, OrchestrationResult, OutputFormat, PromptBundle, core::text::truncate,
};

/// Width of the step preview in `format_pipeline`
const STEP_PREVIEW_LEN: usize = 96;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off globally when the config asks for plain text
    pub fn configure_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a finished run in the requested shape
    pub fn format(result: &OrchestrationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Document => result.final_document.clone(),
            OutputFormat::Analysis => result.captured_analysis.clone(),
            OutputFormat::Full => Self::format_full(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Analysis then document, each under a heading
    pub fn format_full(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Captured Analysis"));
        output.push('\n');
        output.push_str(result.captured_analysis.trim_end());
        output.push('\n');

        output.push_str(&Self::section_header("Final Document"));
        output.push('\n');
        output.push_str(result.final_document.trim_end());
        output.push('\n');

        output
    }

    /// Format as JSON
    pub fn format_json(result: &OrchestrationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Describe a compiled pipeline: one entry per agent in run order
    pub fn format_pipeline(bundle: &PromptBundle) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} agent(s)\n",
            "Pipeline:".cyan().bold(),
            bundle.len()
        ));

        for (i, agent) in bundle.agents().iter().enumerate() {
            output.push_str(&format!(
                "\n{:>3}. {} {}\n     {}\n",
                i + 1,
                agent.name.bold(),
                format!("[{}]", agent.mode).yellow(),
                truncate(&agent.step_text, STEP_PREVIEW_LEN)
            ));
        }

        let rules = bundle.global_rules();
        output.push('\n');
        if rules.is_empty() {
            output.push_str(&format!("{} none\n", "Global rules:".cyan().bold()));
        } else {
            output.push_str(&format!(
                "{} {} line(s)\n",
                "Global rules:".cyan().bold(),
                rules.lines().count()
            ));
        }

        output
    }

    /// One line per configuration issue
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let tag = if issue.is_error() {
                    "error:".red().bold()
                } else {
                    "warning:".yellow().bold()
                };
                format!("{} {}\n", tag, issue.message)
            })
            .collect()
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("=== {} ===", title).cyan().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_domain::{ConfigIssueCode, compile};

    fn result() -> OrchestrationResult {
        OrchestrationResult::new("\\documentclass{article}\n", "{\"gaps\":[\"Kafka\"]}")
    }

    #[test]
    fn test_document_format_is_raw() {
        assert_eq!(
            ConsoleFormatter::format(&result(), OutputFormat::Document),
            "\\documentclass{article}\n"
        );
        assert_eq!(
            ConsoleFormatter::format(&result(), OutputFormat::Analysis),
            "{\"gaps\":[\"Kafka\"]}"
        );
    }

    #[test]
    fn test_json_format() {
        let json = ConsoleFormatter::format(&result(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_document"], "\\documentclass{article}\n");
        assert_eq!(value["captured_analysis"], "{\"gaps\":[\"Kafka\"]}");
    }

    #[test]
    fn test_full_format_orders_analysis_first() {
        let full = ConsoleFormatter::format(&result(), OutputFormat::Full);
        let analysis = full.find("Kafka").unwrap();
        let document = full.find("documentclass").unwrap();
        assert!(analysis < document);
        assert!(full.contains("Captured Analysis"));
        assert!(full.contains("Final Document"));
    }

    #[test]
    fn test_pipeline_lists_every_agent() {
        let bundle = compile("");
        let text = ConsoleFormatter::format_pipeline(&bundle);
        assert!(text.contains("3 agent(s)"));
        for agent in bundle.agents() {
            assert!(text.contains(&agent.name));
        }
        assert!(text.contains("none"));
    }

    #[test]
    fn test_issues_one_line_each() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::ZeroTimeout, "timeout is zero"),
            ConfigIssue::warning(ConfigIssueCode::NoCredentials, "no key"),
        ];
        let text = ConsoleFormatter::format_issues(&issues);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("timeout is zero"));
    }
}
