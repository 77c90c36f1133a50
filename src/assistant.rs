//! Assembles the collaborators from configuration

use crate::browser::{BrowserLauncher, SystemBrowser};
use crate::config::{Config, Secrets, OPENAI_KEY_VAR};
use crate::dispatcher::Dispatcher;
use crate::error::{AssistError, AssistResult};
use crate::generative;
use crate::speech::{self, SpeechRecognizer};
use crate::tables::WEBSITES;
use crate::translation;
use std::sync::Arc;

/// Everything a user action needs, built once at startup
pub struct Assistant {
    pub dispatcher: Dispatcher,
    pub recognizer: Option<Arc<dyn SpeechRecognizer>>,
}

impl Assistant {
    pub fn from_config(config: &Config, secrets: &Secrets) -> AssistResult<Self> {
        Self::with_browser(config, secrets, Arc::new(SystemBrowser::new()))
    }

    /// Same as `from_config`, opening URLs through the given launcher
    pub fn with_browser(
        config: &Config,
        secrets: &Secrets,
        browser: Arc<dyn BrowserLauncher>,
    ) -> AssistResult<Self> {
        let dispatcher = Dispatcher::new(browser)
            .with_generator(generative::create_generator(config, secrets)?)
            .with_generator_key(generative::required_key(config))
            .with_translator(translation::create_translator(config, secrets)?)
            .with_websites(WEBSITES.with_overrides(&config.extra_websites));

        Ok(Self {
            dispatcher,
            recognizer: speech::create_recognizer(config, secrets)?,
        })
    }

    pub fn recognizer(&self) -> Option<&dyn SpeechRecognizer> {
        self.recognizer.as_deref()
    }
}

/// One warning line per missing key, naming the features it disables
pub fn startup_warnings(config: &Config, secrets: &Secrets) -> Vec<String> {
    secrets
        .missing()
        .into_iter()
        .map(|err| {
            let features = match &err {
                AssistError::ConfigMissing(key) => disabled_features(config, key),
                _ => Vec::new(),
            };
            if features.is_empty() {
                err.to_string()
            } else {
                format!("{} Disabled: {}.", err, features.join(", "))
            }
        })
        .collect()
}

fn disabled_features(config: &Config, key: &str) -> Vec<&'static str> {
    let mut features = Vec::new();
    if key == generative::required_key(config) {
        features.push("Generate Response");
    }
    if key == OPENAI_KEY_VAR {
        if config.translation_provider != "google" {
            features.push("Translate Text");
        }
        features.push("audio input");
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_per_missing_key() {
        let warnings = startup_warnings(&Config::default(), &Secrets::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("API_KEY not found"));
        assert!(warnings[0].ends_with("Disabled: Generate Response."));
        assert!(warnings[1].ends_with("Disabled: Translate Text, audio input."));
    }

    #[test]
    fn test_no_warnings_when_configured() {
        let secrets = Secrets {
            generative_key: Some("g".into()),
            openai_key: Some("o".into()),
        };
        assert!(startup_warnings(&Config::default(), &secrets).is_empty());
    }

    #[test]
    fn test_google_translation_survives_missing_openai_key() {
        let config = Config {
            translation_provider: "google".to_string(),
            ..Config::default()
        };
        let secrets = Secrets {
            generative_key: Some("g".into()),
            openai_key: None,
        };
        let warnings = startup_warnings(&config, &secrets);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].ends_with("Disabled: audio input."));
    }

    #[test]
    fn test_assistant_builds_without_keys() {
        let assistant = Assistant::from_config(&Config::default(), &Secrets::default()).unwrap();
        assert!(assistant.recognizer().is_none());
        assert!(!assistant
            .dispatcher
            .is_available(crate::task::Task::GenerateResponse));
        assert!(assistant.dispatcher.is_available(crate::task::Task::OpenWebsite));
    }

    #[tokio::test]
    async fn test_openai_provider_reports_openai_key() {
        let config = Config {
            generative_provider: "openai".to_string(),
            ..Config::default()
        };
        let secrets = Secrets {
            generative_key: Some("g".into()),
            openai_key: None,
        };
        let assistant = Assistant::from_config(&config, &secrets).unwrap();
        let err = assistant
            .dispatcher
            .dispatch(
                crate::task::Task::GenerateResponse,
                &crate::task::TaskInputs::question("hi"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AssistError::ConfigMissing(k) if k == "OPENAI_API_KEY"));
    }
}
