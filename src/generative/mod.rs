//! Generative text collaborators
//!
//! Provides the backends behind the Generate Response task:
//! - Gemini: Google generative-language API (`API_KEY`)
//! - OpenAI: chat completions (`OPENAI_API_KEY`)

pub mod gemini;
pub mod openai;

use crate::config::{Config, Secrets, GENERATIVE_KEY_VAR, OPENAI_KEY_VAR};
use crate::error::AssistResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;

/// Trait for text-generation services
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the generated text verbatim
    async fn generate(&self, prompt: &str) -> AssistResult<String>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Name of the secret the configured provider reads
pub fn required_key(config: &Config) -> &'static str {
    match config.generative_provider.as_str() {
        "openai" => OPENAI_KEY_VAR,
        _ => GENERATIVE_KEY_VAR,
    }
}

/// Factory to create the configured generator.
///
/// Returns `Ok(None)` when the key it needs is absent; the feature is then
/// disabled rather than failing startup.
pub fn create_generator(
    config: &Config,
    secrets: &Secrets,
) -> AssistResult<Option<Arc<dyn TextGenerator>>> {
    let client = crate::http::client(config.timeout())?;
    let generator: Arc<dyn TextGenerator> = match config.generative_provider.as_str() {
        "openai" => match secrets.openai_key() {
            Ok(key) => Arc::new(OpenAiGenerator::new(client, config, key)),
            Err(e) => {
                debug!("Generate Response disabled: {}", e);
                return Ok(None);
            }
        },
        other => {
            if other != "gemini" {
                warn!("Unknown generative provider '{}', falling back to Gemini", other);
            }
            match secrets.generative_key() {
                Ok(key) => Arc::new(GeminiGenerator::new(client, config, key)),
                Err(e) => {
                    debug!("Generate Response disabled: {}", e);
                    return Ok(None);
                }
            }
        }
    };
    info!("✅ Generator '{}' initialized", generator.name());
    Ok(Some(generator))
}
