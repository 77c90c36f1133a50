use super::capture::{self, Recording};
use super::SpeechRecognizer;
use crate::config::Config;
use crate::error::{AssistError, AssistResult};
use crate::openai::OpenAiClient;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Minimum RMS amplitude considered speech
const SILENCE_RMS_THRESHOLD: f32 = 150.0;

/// Microphone capture + Whisper transcription
pub struct MicrophoneRecognizer {
    client: OpenAiClient,
    model: String,
    device_index: Option<usize>,
    duration: Duration,
}

impl MicrophoneRecognizer {
    pub fn new(client: reqwest::Client, config: &Config, api_key: &str) -> Self {
        Self {
            client: OpenAiClient::new(client, &config.openai_url, api_key),
            model: config.speech_model.clone(),
            device_index: config.input_device,
            duration: Duration::from_secs(config.record_seconds.max(1)),
        }
    }

    /// Transcribe a finished recording
    pub async fn transcribe(&self, recording: &Recording) -> AssistResult<String> {
        let energy = capture::calculate_energy(&recording.samples);
        debug!("Recording energy: {:.1}", energy);
        if energy < SILENCE_RMS_THRESHOLD {
            return Err(AssistError::NotUnderstood);
        }

        let wav = capture::encode_wav(recording)?;
        let text = self.client.transcribe(&self.model, wav).await?;

        if text.is_empty() {
            return Err(AssistError::NotUnderstood);
        }
        info!("📝 Recognized: '{}'", text);
        Ok(text)
    }
}

#[async_trait]
impl SpeechRecognizer for MicrophoneRecognizer {
    async fn recognize(&self) -> AssistResult<String> {
        let device_index = self.device_index;
        let duration = self.duration;
        let recording = tokio::task::spawn_blocking(move || capture::record(device_index, duration))
            .await
            .map_err(|e| AssistError::Audio(e.to_string()))??;
        self.transcribe(&recording).await
    }
}
