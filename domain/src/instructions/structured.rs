//! Structured instruction configs.
//!
//! An instruction document may embed a ` ```json ` block of the form:
//!
//! ```json
//! {
//!   "global_hard_locks": ["Never invent employers", "..."],
//!   "modules": { "truth": "Only claim real work", "style": ["line", "line"] },
//!   "roles": {
//!     "analyst": { "name": "JD Analyst", "instruction": "...", "mode": "json", "modules": ["truth"] }
//!   },
//!   "workflow": [ { "role": "analyst", "step": "Analyze JD" } ]
//! }
//! ```
//!
//! `modules`, `roles` and `workflow` are required. Workflow entries naming an
//! unknown role are skipped; a config that yields no agent is rejected so the
//! caller can fall back to the heuristic strategy.

use crate::pipeline::entities::{Agent, AgentMode, PromptBundle};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

const HARD_LOCKS_HEADING: &str = "HARD LOCKS (NON-NEGOTIABLE):";
const MODULES_HEADING: &str = "APPLICABLE RULE MODULES:";
const ROLE_HEADING: &str = "ROLE INSTRUCTION:";
const EMPTY_ROLE_PROMPT: &str = "Execute assigned step using provided constraints.";

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json\s*([\s\S]*?)\s*```").expect("json fence pattern"));

/// Parse the first ` ```json ` block of `text` into a JSON object.
///
/// Returns `None` when there is no block, it is not valid JSON, or the top
/// level is not an object.
pub fn extract_config(text: &str) -> Option<Map<String, Value>> {
    let body = JSON_FENCE.captures(text)?.get(1)?.as_str();
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// String value as-is, any other scalar in its JSON form.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A string, or a list of lines joined with `\n`. Anything else is empty.
fn join_lines(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_to_text).collect::<Vec<_>>().join("\n"),
        _ => String::new(),
    }
}

fn render_global_rules(config: &Map<String, Value>) -> String {
    let locks = config
        .get("global_hard_locks")
        .map(join_lines)
        .unwrap_or_default();
    let locks = locks.trim();
    if locks.is_empty() {
        String::new()
    } else {
        format!("{HARD_LOCKS_HEADING}\n{locks}")
    }
}

fn render_role_prompt(role: &Map<String, Value>, modules: &Map<String, Value>) -> String {
    let module_chunks: Vec<String> = role
        .get("modules")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| {
                    let key = value_to_text(id).trim().to_string();
                    let body = join_lines(modules.get(&key)?);
                    let body = body.trim();
                    (!body.is_empty()).then(|| format!("[{key}]\n{body}"))
                })
                .collect()
        })
        .unwrap_or_default();

    let instruction = role
        .get("instruction")
        .map(value_to_text)
        .unwrap_or_default();
    let instruction = instruction.trim();

    let mut sections = Vec::new();
    if !module_chunks.is_empty() {
        sections.push(format!("{MODULES_HEADING}\n{}", module_chunks.join("\n\n")));
    }
    if !instruction.is_empty() {
        sections.push(format!("{ROLE_HEADING}\n{instruction}"));
    }

    let prompt = sections.join("\n\n");
    if prompt.trim().is_empty() {
        EMPTY_ROLE_PROMPT.to_string()
    } else {
        prompt.trim().to_string()
    }
}

fn build_agent(
    index: usize,
    entry: &Map<String, Value>,
    roles: &Map<String, Value>,
    modules: &Map<String, Value>,
) -> Option<Agent> {
    let role_id = entry
        .get("role")
        .map(value_to_text)
        .unwrap_or_default()
        .trim()
        .to_string();
    let role = roles.get(&role_id)?.as_object()?;

    let step_text = match entry.get("step") {
        Some(step) => value_to_text(step),
        None if !role_id.is_empty() => role_id.clone(),
        None => format!("Step {index}"),
    };

    let mode = role
        .get("mode")
        .map(|m| AgentMode::from_config(&value_to_text(m)))
        .unwrap_or_default();

    let role_name = match role.get("name").map(value_to_text) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        Some(_) => format!("Role {index}"),
        None if !role_id.is_empty() => role_id.clone(),
        None => format!("Role {index}"),
    };

    Some(Agent::new(
        format!("Agent {index}: {role_name}"),
        step_text.trim(),
        mode,
        render_role_prompt(role, modules),
    ))
}

/// Build a bundle from a parsed config.
///
/// Returns `None` when a required key is missing or mistyped, or when no
/// workflow entry resolves to a known role.
pub fn build_bundle(config: &Map<String, Value>) -> Option<PromptBundle> {
    let modules = config.get("modules")?.as_object()?;
    let roles = config.get("roles")?.as_object()?;
    let workflow = config.get("workflow")?.as_array()?;

    let agents: Vec<Agent> = workflow
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| build_agent(i + 1, entry.as_object()?, roles, modules))
        .collect();

    PromptBundle::new(render_global_rules(config), agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test config must be an object"),
        }
    }

    fn sample() -> Map<String, Value> {
        config(json!({
            "global_hard_locks": ["No fabricated employers", "Keep one page"],
            "modules": {
                "truth": "Only claim real work",
                "style": ["Short bullets", "Active verbs"],
                "empty": "   "
            },
            "roles": {
                "analyst": {
                    "name": "JD Analyst",
                    "instruction": "Extract keywords.",
                    "mode": "json",
                    "modules": ["truth"]
                },
                "writer": {
                    "name": "Writer",
                    "instruction": "Rewrite bullets.",
                    "mode": "LaTeX",
                    "modules": ["truth", "style", "missing", "empty"]
                }
            },
            "workflow": [
                { "role": "analyst", "step": "Analyze JD" },
                { "role": "ghost", "step": "Haunt" },
                { "role": "writer", "step": "Execute edits" }
            ]
        }))
    }

    #[test]
    fn test_extract_config_from_fence() {
        let text = "intro\n```JSON\n{\"a\": 1}\n```\ntrailer";
        let map = extract_config(text).unwrap();
        assert_eq!(map.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_extract_config_rejects_non_object_and_garbage() {
        assert!(extract_config("```json\n[1, 2]\n```").is_none());
        assert!(extract_config("```json\n{not json\n```").is_none());
        assert!(extract_config("no fences here").is_none());
    }

    #[test]
    fn test_build_bundle_resolves_roles_and_skips_unknown() {
        let bundle = build_bundle(&sample()).unwrap();
        assert_eq!(bundle.len(), 2);

        let analyst = &bundle.agents()[0];
        assert_eq!(analyst.name, "Agent 1: JD Analyst");
        assert_eq!(analyst.step_text, "Analyze JD");
        assert_eq!(analyst.mode, AgentMode::Json);

        // Index follows the workflow position, so the skipped entry leaves a gap
        let writer = &bundle.agents()[1];
        assert_eq!(writer.name, "Agent 3: Writer");
        assert_eq!(writer.mode, AgentMode::Latex);
    }

    #[test]
    fn test_role_prompt_layout() {
        let bundle = build_bundle(&sample()).unwrap();
        let prompt = &bundle.agents()[1].system_prompt;
        assert_eq!(
            prompt,
            "APPLICABLE RULE MODULES:\n[truth]\nOnly claim real work\n\n\
             [style]\nShort bullets\nActive verbs\n\n\
             ROLE INSTRUCTION:\nRewrite bullets."
        );
    }

    #[test]
    fn test_global_rules_from_hard_locks() {
        let bundle = build_bundle(&sample()).unwrap();
        assert_eq!(
            bundle.global_rules(),
            "HARD LOCKS (NON-NEGOTIABLE):\nNo fabricated employers\nKeep one page"
        );
    }

    #[test]
    fn test_missing_hard_locks_gives_empty_rules() {
        let mut cfg = sample();
        cfg.remove("global_hard_locks");
        assert_eq!(build_bundle(&cfg).unwrap().global_rules(), "");
    }

    #[test]
    fn test_all_unknown_roles_yields_none() {
        let cfg = config(json!({
            "modules": {},
            "roles": { "a": { "name": "A" } },
            "workflow": [ { "role": "b" }, { "role": "c" } ]
        }));
        assert!(build_bundle(&cfg).is_none());
    }

    #[test]
    fn test_missing_required_key_yields_none() {
        let mut cfg = sample();
        cfg.remove("roles");
        assert!(build_bundle(&cfg).is_none());
    }

    #[test]
    fn test_defaults_for_sparse_role() {
        let cfg = config(json!({
            "modules": {},
            "roles": { "bare": {} },
            "workflow": [ { "role": "bare" }, "not an object" ]
        }));
        let bundle = build_bundle(&cfg).unwrap();
        let agent = &bundle.agents()[0];
        assert_eq!(agent.name, "Agent 1: bare");
        assert_eq!(agent.step_text, "bare");
        assert_eq!(agent.mode, AgentMode::Json);
        assert_eq!(agent.system_prompt, EMPTY_ROLE_PROMPT);
    }
}
