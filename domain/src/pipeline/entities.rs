//! Pipeline entities

use serde::{Deserialize, Serialize};

/// Output mode of a pipeline stage.
///
/// `Latex` stages emit a full document that replaces the working document;
/// `Json` stages emit an analysis artifact and never touch the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    #[default]
    Json,
    Latex,
}

impl AgentMode {
    /// Resolve a free-form mode field. Only `latex` (any case, surrounding
    /// whitespace ignored) selects [`AgentMode::Latex`].
    pub fn from_config(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("latex") {
            AgentMode::Latex
        } else {
            AgentMode::Json
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentMode::Json => "json",
            AgentMode::Latex => "latex",
        }
    }

    /// Whether a stage in this mode rewrites the working document.
    pub fn replaces_document(&self) -> bool {
        matches!(self, AgentMode::Latex)
    }
}

impl std::fmt::Display for AgentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One compiled pipeline stage (Entity, immutable once compiled)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Display name, e.g. `Agent 1: JD Analyst`
    pub name: String,
    /// The workflow step this agent carries out
    pub step_text: String,
    pub mode: AgentMode,
    /// Agent-specific instructions appended after the global rules
    pub system_prompt: String,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        step_text: impl Into<String>,
        mode: AgentMode,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            step_text: step_text.into(),
            mode,
            system_prompt: system_prompt.into(),
        }
    }

    /// Whether this agent is the job-description analysis stage whose output
    /// is surfaced to the caller as the captured analysis.
    pub fn is_jd_analysis(&self) -> bool {
        let name = self.name.to_lowercase();
        let step = self.step_text.to_lowercase();
        [name, step]
            .iter()
            .any(|text| text.contains("jd analyst") || text.contains("analyze jd"))
    }
}

/// Compiled instruction document: global rules plus the ordered agent list.
///
/// `agents` is never empty: [`PromptBundle::new`] refuses an empty list and
/// the compiler substitutes the fallback pipeline before building one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptBundle {
    global_rules: String,
    agents: Vec<Agent>,
}

impl PromptBundle {
    /// Returns `None` when `agents` is empty.
    pub fn new(global_rules: impl Into<String>, agents: Vec<Agent>) -> Option<Self> {
        if agents.is_empty() {
            return None;
        }
        Some(Self {
            global_rules: global_rules.into(),
            agents,
        })
    }

    /// For callers that have already guaranteed `agents` is non-empty.
    pub(crate) fn from_nonempty(global_rules: impl Into<String>, agents: Vec<Agent>) -> Self {
        debug_assert!(!agents.is_empty(), "pipeline must have at least one agent");
        Self {
            global_rules: global_rules.into(),
            agents,
        }
    }

    pub fn global_rules(&self) -> &str {
        &self.global_rules
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always `false` for a compiled bundle.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Modes of all agents in pipeline order.
    pub fn modes(&self) -> Vec<AgentMode> {
        self.agents.iter().map(|a| a.mode).collect()
    }
}
