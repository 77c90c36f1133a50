//! Input acquisition
//!
//! Typed text and speech both end up as one question string.

use crate::config::OPENAI_KEY_VAR;
use crate::error::AssistError;
use crate::speech::SpeechRecognizer;
use std::str::FromStr;
use tracing::warn;

/// Where the question comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMethod {
    #[default]
    Text,
    Audio,
}

impl FromStr for InputMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "typed" | "keyboard" => Ok(InputMethod::Text),
            "audio" | "voice" | "mic" | "speech" => Ok(InputMethod::Audio),
            other => Err(format!("unknown input method '{}'", other)),
        }
    }
}

/// The acquired text plus anything that should be shown next to it.
///
/// On a recognition failure `text` is empty and `notice` holds the reason.
#[derive(Debug, Default)]
pub struct Acquisition {
    pub text: String,
    pub notice: Option<AssistError>,
}

/// Obtain the question from the chosen source
pub async fn acquire(
    method: InputMethod,
    typed: &str,
    recognizer: Option<&dyn SpeechRecognizer>,
) -> Acquisition {
    match method {
        InputMethod::Text => Acquisition {
            text: typed.to_string(),
            notice: None,
        },
        InputMethod::Audio => {
            let Some(recognizer) = recognizer else {
                return Acquisition {
                    text: String::new(),
                    notice: Some(AssistError::ConfigMissing(OPENAI_KEY_VAR.to_string())),
                };
            };
            match recognizer.recognize().await {
                Ok(text) => Acquisition { text, notice: None },
                Err(e) => {
                    warn!("Speech input failed: {}", e);
                    Acquisition {
                        text: String::new(),
                        notice: Some(e),
                    }
                }
            }
        }
    }
}
