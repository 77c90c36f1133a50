//! Gemini generateContent backend

use super::TextGenerator;
use crate::config::Config;
use crate::error::{AssistError, AssistResult};
use crate::http;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const SERVICE: &str = "Gemini";

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<PartText>,
}

#[derive(Deserialize)]
struct PartText {
    #[serde(default)]
    text: String,
}

pub struct GeminiGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(client: reqwest::Client, config: &Config, api_key: &str) -> Self {
        Self {
            client,
            base_url: config.gemini_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateResponse) -> AssistResult<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AssistError::RequestFailed("Gemini returned no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(AssistError::RequestFailed(format!(
            "Gemini returned an empty response (finish reason: {})",
            reason
        )));
    }
    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> AssistResult<String> {
        debug!("🧠 Gemini prompt ({}): {}", self.model, prompt);
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&serde_json::json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await?;

        let body = http::read_body(SERVICE, response).await?;
        extract_text(http::parse_json(SERVICE, &body)?)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
