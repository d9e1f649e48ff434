//! Instruction compiler
//!
//! Turns a raw instruction document into a [`PromptBundle`]. Compilation is
//! total: every input yields a bundle with at least one agent.
//!
//! Strategies, tried in order:
//!
//! 1. [`structured`]: an embedded ` ```json ` block describing rule modules,
//!    roles and a workflow.
//! 2. [`heuristic`]: labelled prose sections for the global rules and a
//!    numbered `Workflow` list mapped onto agent archetypes, falling back to
//!    a fixed three-stage pipeline.

pub mod archetype;
pub mod heuristic;
pub mod structured;

use crate::core::text::normalize;
use crate::pipeline::entities::PromptBundle;

/// Compile an instruction document into a non-empty pipeline.
pub fn compile(raw_document: &str) -> PromptBundle {
    let text = normalize(raw_document);

    if let Some(bundle) = structured::extract_config(&text)
        .as_ref()
        .and_then(structured::build_bundle)
    {
        return bundle;
    }

    heuristic::build_bundle(&text)
}

/// Numbered workflow steps of a document, after normalization.
///
/// This is what the heuristic strategy maps onto agents; it ignores any
/// structured block.
pub fn extract_workflow_steps(raw_document: &str) -> Vec<String> {
    heuristic::workflow_steps(&normalize(raw_document))
}
