//! Speech-to-text collaborator
//!
//! Records a fixed window from the microphone and sends it to an
//! OpenAI-compatible transcription endpoint.

pub mod capture;
pub mod whisper;

use crate::config::{Config, Secrets};
use crate::error::AssistResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub use whisper::MicrophoneRecognizer;

/// Trait for speech recognizers.
///
/// Implementations return `NotUnderstood` when audio was captured but no
/// words came out of it, and `RequestFailed` when the service could not be
/// reached.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listen once and return the recognized text
    async fn recognize(&self) -> AssistResult<String>;
}

/// Factory to create the microphone recognizer, `None` if its key is absent
pub fn create_recognizer(
    config: &Config,
    secrets: &Secrets,
) -> AssistResult<Option<Arc<dyn SpeechRecognizer>>> {
    match secrets.openai_key() {
        Ok(key) => {
            let client = crate::http::client(config.timeout())?;
            info!("✅ Speech recognizer initialized ({})", config.speech_model);
            Ok(Some(Arc::new(MicrophoneRecognizer::new(client, config, key))))
        }
        Err(e) => {
            debug!("Audio input disabled: {}", e);
            Ok(None)
        }
    }
}
