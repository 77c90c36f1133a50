use super::Translator;
use crate::config::Config;
use crate::error::AssistResult;
use crate::openai::{ChatMessage, OpenAiClient};
use async_trait::async_trait;

/// Translates by instructing a chat model to answer with the translation only
pub struct OpenAiTranslator {
    client: OpenAiClient,
    model: String,
}

impl OpenAiTranslator {
    pub fn new(client: reqwest::Client, config: &Config, api_key: &str) -> Self {
        Self {
            client: OpenAiClient::new(client, &config.openai_url, api_key),
            model: config.openai_model.clone(),
        }
    }
}

fn instruction(target: &str) -> String {
    format!(
        "You are a translation engine. Translate the user's text into the language \
         with ISO-639 code '{target}'. Reply with the translation only, preserving \
         line breaks and without quotes or commentary."
    )
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, target: &str) -> AssistResult<String> {
        let messages = [ChatMessage::system(instruction(target)), ChatMessage::user(text)];
        self.client.chat(&self.model, &messages, 0.0).await
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_target() {
        assert!(instruction("es").contains("'es'"));
    }
}
