//! OpenAI Responses API adapter

use super::{AdapterCall, ProviderAdapter, http, non_blank, resolve_key};
use async_trait::async_trait;
use serde_json::{Value, json};
use tailor_application::GatewayError;
use tailor_domain::{BackendConfig, ProviderKind};
use tracing::debug;

pub struct OpenAiAdapter {
    config: BackendConfig,
    client: reqwest::Client,
}

impl OpenAiAdapter {
    pub fn new(config: BackendConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn request_body(&self, call: &AdapterCall<'_>, model: &str, minimal: bool) -> Value {
        let mut body = json!({
            "model": model,
            "input": [
                { "role": "system", "content": call.system_prompt },
                { "role": "user", "content": call.user_prompt }
            ],
        });
        if !minimal && let Some(max) = self.config.max_output_tokens {
            body["max_output_tokens"] = json!(max);
        }
        body
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn has_credential(&self) -> bool {
        non_blank(None, self.config.api_key.as_deref()).is_some()
    }

    async fn complete(&self, call: AdapterCall<'_>) -> Result<String, GatewayError> {
        let key = resolve_key(self.kind(), &call, self.config.api_key.as_deref())?;
        let model = non_blank(call.model, Some(self.config.model.as_str())).unwrap_or("gpt-5");
        let url = http::endpoint(&self.config.base_url, "v1/responses");

        debug!(model, "Sending OpenAI responses request");
        let full = self.request_body(&call, model, false);
        let minimal = self.request_body(&call, model, true);
        let reply = http::post_with_minimal_retry(&self.client, &url, key, &full, &minimal).await?;

        Ok(output_text(&reply).trim().to_string())
    }
}

/// Text of a Responses API reply.
///
/// Uses the top-level `output_text` convenience field when present, else
/// concatenates every `output[].content[].text`.
fn output_text(reply: &Value) -> String {
    if let Some(text) = reply.get("output_text").and_then(Value::as_str) {
        return text.to_string();
    }

    reply
        .get("output")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect()
}
