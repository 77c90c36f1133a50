//! Translation collaborators
//!
//! - OpenAI: prompted chat translation (`OPENAI_API_KEY`)
//! - Google: keyless web endpoint

pub mod google;
pub mod openai;

use crate::config::{Config, Secrets};
use crate::error::AssistResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use google::GoogleTranslator;
pub use openai::OpenAiTranslator;

/// Trait for translation services
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the language identified by `target` (ISO code)
    async fn translate(&self, text: &str, target: &str) -> AssistResult<String>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Factory to create the configured translator, `None` if its key is absent
pub fn create_translator(
    config: &Config,
    secrets: &Secrets,
) -> AssistResult<Option<Arc<dyn Translator>>> {
    let client = crate::http::client(config.timeout())?;
    let translator: Arc<dyn Translator> = match config.translation_provider.as_str() {
        "google" => Arc::new(GoogleTranslator::new(client, &config.google_translate_url)),
        other => {
            if other != "openai" {
                warn!("Unknown translation provider '{}', falling back to OpenAI", other);
            }
            match secrets.openai_key() {
                Ok(key) => Arc::new(OpenAiTranslator::new(client, config, key)),
                Err(e) => {
                    debug!("Translate Text disabled: {}", e);
                    return Ok(None);
                }
            }
        }
    };
    info!("✅ Translator '{}' initialized", translator.name());
    Ok(Some(translator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_translator_requires_key() {
        let config = Config::default();
        assert!(create_translator(&config, &Secrets::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_google_translator_is_keyless() {
        let config = Config {
            translation_provider: "google".to_string(),
            ..Config::default()
        };
        let translator = create_translator(&config, &Secrets::default())
            .unwrap()
            .expect("translator");
        assert_eq!(translator.name(), "google");
    }
}
