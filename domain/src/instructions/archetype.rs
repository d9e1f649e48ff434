//! Agent archetypes for free-text workflow steps.
//!
//! A step is matched against [`TRIGGERED`] top to bottom (case-insensitive
//! substring, first match wins); anything unmatched becomes [`WORKFLOW_STEP`].

use crate::pipeline::entities::{Agent, AgentMode};

/// Template an agent is stamped from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub role: &'static str,
    pub mode: AgentMode,
    pub instruction: &'static str,
}

pub const JD_ANALYST: Archetype = Archetype {
    role: "JD Analyst",
    mode: AgentMode::Json,
    instruction: "Extract required and preferred skills, responsibilities, and top keywords. \
                  Return JSON keys: required_skills, preferred_skills, responsibilities, keywords, role_type.",
};

pub const ADJACENCY_MAPPER: Archetype = Archetype {
    role: "Adjacency Mapper",
    mode: AgentMode::Json,
    instruction: "Map JD keywords to credible document adjacencies at three tiers. \
                  Return JSON keys: strong_matches, weak_matches, avoid_forcing, transferable_focus.",
};

pub const EDIT_PLANNER: Archetype = Archetype {
    role: "Edit Planner",
    mode: AgentMode::Json,
    instruction: "Create a concrete edit plan before writing. \
                  Return JSON keys: bullet_strategy, skills_strategy, section_order, keyword_placement.",
};

pub const DOCUMENT_TAILOR: Archetype = Archetype {
    role: "Document Tailor",
    mode: AgentMode::Latex,
    instruction: "Apply the planned edits and produce the FULL edited LaTeX document. \
                  Respect locked sections and formatting constraints.",
};

pub const COMPLIANCE_GUARD: Archetype = Archetype {
    role: "Compliance Guard",
    mode: AgentMode::Latex,
    instruction: "Validate the document against every rule and fix violations if present. \
                  Return the FULL corrected LaTeX document only.",
};

/// Default entry for steps no trigger matches
pub const WORKFLOW_STEP: Archetype = Archetype {
    role: "Workflow Step",
    mode: AgentMode::Json,
    instruction: "Execute this workflow step faithfully and return concise JSON with decisions and outputs.",
};

/// Ordered `(trigger, archetype)` table. Priority is table order.
pub const TRIGGERED: &[(&str, Archetype)] = &[
    ("analyze jd", JD_ANALYST),
    ("assess adjacency", ADJACENCY_MAPPER),
    ("plan edits", EDIT_PLANNER),
    ("execute", DOCUMENT_TAILOR),
    ("output", COMPLIANCE_GUARD),
];

/// Step texts of the pipeline used when a document yields no workflow.
pub const FALLBACK_STEPS: &[&str] = &["Analyze JD", "Execute edits", "Output final"];

/// Pick the archetype for a step.
pub fn classify(step_text: &str) -> &'static Archetype {
    let lower = step_text.to_lowercase();
    TRIGGERED
        .iter()
        .find(|(trigger, _)| lower.contains(*trigger))
        .map(|(_, archetype)| archetype)
        .unwrap_or(&WORKFLOW_STEP)
}

impl Archetype {
    /// Stamp an agent for the 1-based workflow position `index`.
    pub fn instantiate(&self, index: usize, step_text: &str) -> Agent {
        Agent::new(
            format!("Agent {}: {}", index, self.role),
            step_text,
            self.mode,
            self.instruction,
        )
    }
}

/// Map ordered step texts onto agents.
pub fn agents_for_steps<S: AsRef<str>>(steps: &[S]) -> Vec<Agent> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| classify(step.as_ref()).instantiate(i + 1, step.as_ref()))
        .collect()
}

/// The fixed JD Analyst → Document Tailor → Compliance Guard pipeline.
pub fn fallback_agents() -> Vec<Agent> {
    agents_for_steps(FALLBACK_STEPS)
}
