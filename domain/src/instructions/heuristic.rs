//! Heuristic extraction from prose instruction documents.
//!
//! Global rules are the concatenation of a fixed set of labelled sections;
//! the pipeline comes from the numbered items (`1) ...`) of the workflow
//! section.

use super::archetype::{agents_for_steps, fallback_agents};
use crate::pipeline::entities::PromptBundle;
use regex::Regex;
use std::sync::LazyLock;

/// Heading that opens the workflow section. The section runs to end of text.
pub const WORKFLOW_LABEL: &str = "Workflow (when user provides JD + LaTeX)";

/// `(start label, end label)` for each global-rules section, in output order.
///
/// A section runs from its start label to the first occurrence of its end
/// label after it, or to end of text when the end label is absent.
pub const RULE_SECTIONS: &[(&str, &str)] = &[
    ("Core Objectives", "Translation-First Policy"),
    ("Translation-First Policy", "Bullet Styling Rules"),
    ("Bullet Styling Rules", "Domain Alignment Strategy"),
    ("Technical Skills Section", "Global Anti-Density Rules"),
    ("STRICT RULES", "OUTPUT RULES"),
    ("OUTPUT RULES", "Workflow"),
];

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\)\s*(.+?)\s*$").expect("numbered item pattern"));

/// Slice `text` from `start_label` up to `end_label` (or end of text), trimmed.
///
/// Returns an empty string when `start_label` does not occur.
pub fn extract_section(text: &str, start_label: &str, end_label: Option<&str>) -> String {
    let Some(start) = text.find(start_label) else {
        return String::new();
    };
    let end = end_label
        .and_then(|label| text[start..].find(label).map(|offset| start + offset))
        .unwrap_or(text.len());
    text[start..end].trim().to_string()
}

/// Non-empty rule sections joined by blank lines.
pub fn global_rules(text: &str) -> String {
    RULE_SECTIONS
        .iter()
        .map(|(start, end)| extract_section(text, start, Some(end)))
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Ordered step texts of the workflow section's numbered items.
pub fn workflow_steps(text: &str) -> Vec<String> {
    let workflow = extract_section(text, WORKFLOW_LABEL, None);
    workflow
        .lines()
        .filter_map(|line| NUMBERED_ITEM.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Build a bundle from an already-normalized document.
pub fn build_bundle(text: &str) -> PromptBundle {
    let rules = global_rules(text);
    let steps = workflow_steps(text);

    let mut agents = agents_for_steps(&steps);
    if agents.is_empty() {
        agents = fallback_agents();
    }

    PromptBundle::from_nonempty(rules, agents)
}
