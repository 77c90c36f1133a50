//! Shared HTTP plumbing for the service clients

use crate::error::{AssistError, AssistResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Build a client with the configured per-request timeout
pub fn client(timeout: Duration) -> AssistResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("aidesk/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(AssistError::from)
}

/// Read the body of a response, turning non-2xx statuses into `RequestFailed`
pub async fn read_body(service: &str, response: reqwest::Response) -> AssistResult<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("❌ {} API error ({}): {}", service, status, body);
        return Err(AssistError::RequestFailed(format!(
            "{} returned {}: {}",
            service,
            status,
            error_message(&body)
        )));
    }

    debug!("{} raw body: {}", service, body);
    Ok(body)
}

/// Pull `error.message` out of a JSON error body, or fall back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Parse a success body, reporting malformed payloads as `RequestFailed`
pub fn parse_json<T: serde::de::DeserializeOwned>(service: &str, body: &str) -> AssistResult<T> {
    serde_json::from_str(body).map_err(|e| {
        AssistError::RequestFailed(format!("unexpected {} response: {}", service, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json() {
        let body = r#"{"error":{"code":400,"message":"API key not valid"}}"#;
        assert_eq!(error_message(body), "API key not valid");
    }

    #[test]
    fn test_error_message_from_text() {
        assert_eq!(error_message("  Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn test_parse_json_failure_is_request_failed() {
        let result: AssistResult<serde_json::Value> = parse_json("Gemini", "<html>");
        assert!(matches!(result, Err(AssistError::RequestFailed(msg)) if msg.starts_with("unexpected Gemini")));
    }
}
