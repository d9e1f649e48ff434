//! Gemini adapter (OpenAI-compatible chat completions endpoint)

use super::{AdapterCall, ProviderAdapter, http, non_blank, resolve_key};
use async_trait::async_trait;
use serde_json::{Value, json};
use tailor_application::GatewayError;
use tailor_domain::{BackendConfig, ProviderKind};
use tracing::debug;

pub struct GeminiAdapter {
    config: BackendConfig,
    client: reqwest::Client,
}

impl GeminiAdapter {
    pub fn new(config: BackendConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn request_body(&self, call: &AdapterCall<'_>, model: &str, minimal: bool) -> Value {
        let mut body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": call.system_prompt },
                { "role": "user", "content": call.user_prompt }
            ],
        });
        if !minimal && let Some(max) = self.config.max_output_tokens {
            body["max_tokens"] = json!(max);
        }
        body
    }
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn has_credential(&self) -> bool {
        non_blank(None, self.config.api_key.as_deref()).is_some()
    }

    async fn complete(&self, call: AdapterCall<'_>) -> Result<String, GatewayError> {
        let key = resolve_key(self.kind(), &call, self.config.api_key.as_deref())?;
        let model =
            non_blank(call.model, Some(self.config.model.as_str())).unwrap_or("gemini-2.5-flash");
        let url = http::endpoint(&self.config.base_url, "chat/completions");

        debug!(model, "Sending Gemini chat completion request");
        let full = self.request_body(&call, model, false);
        let minimal = self.request_body(&call, model, true);
        let reply = http::post_with_minimal_retry(&self.client, &url, key, &full, &minimal).await?;

        Ok(first_choice_text(&reply).trim().to_string())
    }
}

/// `choices[0].message.content`, or empty when the reply has no choices.
fn first_choice_text(reply: &Value) -> &str {
    reply
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or("")
}
