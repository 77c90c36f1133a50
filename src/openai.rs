//! OpenAI-compatible API client
//!
//! Chat completions and audio transcriptions. Used for translation, speech
//! recognition and as the alternate generative backend.

use crate::error::{AssistError, AssistResult};
use crate::http;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SERVICE: &str = "OpenAI";

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Thin client bound to one base URL and key
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Run a chat completion and return the first choice's content
    pub async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> AssistResult<String> {
        debug!("💬 OpenAI chat: model={} messages={}", model, messages.len());
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model,
                messages,
                temperature,
            })
            .send()
            .await?;

        let body = http::read_body(SERVICE, response).await?;
        let parsed: ChatResponse = http::parse_json(SERVICE, &body)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssistError::RequestFailed("OpenAI returned no choices".to_string()))
    }

    /// Transcribe a WAV payload; an empty string means nothing was recognized
    pub async fn transcribe(&self, model: &str, wav: Vec<u8>) -> AssistResult<String> {
        let part = Part::bytes(wav)
            .file_name("audio.wav")
            .mime_str("audio/wav")?;
        let form = Form::new()
            .part("file", part)
            .text("model", model.to_string())
            .text("response_format", "json");

        let response = self
            .client
            .post(format!("{}/v1/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let body = http::read_body(SERVICE, response).await?;
        let parsed: TranscriptionResponse = http::parse_json(SERVICE, &body)?;
        Ok(parsed.text.trim().to_string())
    }
}
