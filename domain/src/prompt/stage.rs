//! Prompt templates for pipeline stages

use crate::pipeline::entities::{Agent, AgentMode};

/// How many of the most recent artifacts a stage sees. Older ones are
/// dropped, not summarized.
pub const ARTIFACT_WINDOW: usize = 4;

/// Templates for the two prompts sent to the completion back end per stage
pub struct StagePromptTemplate;

impl StagePromptTemplate {
    /// Global rules, identity line, step line and the agent's own
    /// instructions, blank-line separated.
    ///
    /// Blank sections are dropped rather than joined, so a bundle without
    /// global rules yields a prompt that starts at the identity line instead
    /// of a leading empty block.
    pub fn system(global_rules: &str, agent: &Agent) -> String {
        let identity = format!("You are {}.", agent.name);
        let step = format!("Workflow step: {}", agent.step_text);

        [
            global_rules,
            identity.as_str(),
            step.as_str(),
            agent.system_prompt.as_str(),
        ]
        .into_iter()
        .filter(|section| !section.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    /// Output directive for a mode; always the first line of the user prompt.
    pub fn directive(mode: AgentMode) -> &'static str {
        match mode {
            AgentMode::Json => "Return ONLY valid JSON.",
            AgentMode::Latex => "Return ONLY the full LaTeX document.",
        }
    }

    /// User prompt for a stage.
    ///
    /// `artifacts` is the whole run log, oldest first; each entry already
    /// starts with its producing agent's name.
    pub fn user(
        agent: &Agent,
        task_description: &str,
        document: &str,
        artifacts: &[String],
    ) -> String {
        let recent = &artifacts[artifacts.len().saturating_sub(ARTIFACT_WINDOW)..];
        let prior = if recent.is_empty() {
            "None".to_string()
        } else {
            recent.join("\n\n")
        };

        format!(
            "{directive}\n\n\
             Job Description:\n{task_description}\n\n\
             Current Document (LaTeX):\n{document}\n\n\
             Prior Agent Outputs:\n{prior}\n",
            directive = Self::directive(agent.mode),
        )
    }
}
