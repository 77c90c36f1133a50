//! OpenAI chat backend for text generation

use super::TextGenerator;
use crate::config::Config;
use crate::error::AssistResult;
use crate::openai::{ChatMessage, OpenAiClient};
use async_trait::async_trait;

pub struct OpenAiGenerator {
    client: OpenAiClient,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(client: reqwest::Client, config: &Config, api_key: &str) -> Self {
        Self {
            client: OpenAiClient::new(client, &config.openai_url, api_key),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> AssistResult<String> {
        self.client
            .chat(&self.model, &[ChatMessage::user(prompt)], 0.7)
            .await
    }

    fn name(&self) -> &str {
        "openai"
    }
}
