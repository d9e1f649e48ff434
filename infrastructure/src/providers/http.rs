//! Shared HTTP plumbing for the completion back ends

use serde_json::Value;
use std::time::Duration;
use tailor_application::GatewayError;
use tracing::warn;

/// Build the client shared by every adapter.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("tailor/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))
}

/// POST a JSON body with bearer auth and decode the JSON reply.
///
/// Non-success statuses surface as [`GatewayError::RequestFailed`] carrying
/// the response body, so callers can inspect the back end's message.
pub async fn post_json(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    body: &Value,
) -> Result<Value, GatewayError> {
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown").to_string());
        return Err(GatewayError::RequestFailed {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| GatewayError::InvalidResponse(format!("Failed to decode body: {}", e)))
}

/// POST `full`; if the back end rejects an optional parameter, POST
/// `minimal` once instead.
pub async fn post_with_minimal_retry(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    full: &Value,
    minimal: &Value,
) -> Result<Value, GatewayError> {
    match post_json(client, url, api_key, full).await {
        Err(e) if e.is_unsupported_parameter() => {
            warn!(url, "Back end rejected an optional parameter, retrying minimal request");
            post_json(client, url, api_key, minimal).await
        }
        other => other,
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

/// Join a base URL and a path without doubling or dropping the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
