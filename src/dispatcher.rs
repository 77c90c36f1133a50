//! Dispatcher
//!
//! Routes a selected task to exactly one collaborator. Inputs are validated
//! before anything external is touched, and nothing is retried.

use crate::browser::BrowserLauncher;
use crate::config::{GENERATIVE_KEY_VAR, OPENAI_KEY_VAR};
use crate::error::{AssistError, AssistResult};
use crate::generative::TextGenerator;
use crate::resolver::{self, Resolution};
use crate::tables::{LookupTable, MUSIC_PLATFORMS, WEBSITES};
use crate::task::{Field, Task, TaskInputs};
use crate::translation::Translator;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Successful result of one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Generated text, verbatim
    Response(String),
    /// Translated text, verbatim
    Translation(String),
    /// A website was opened
    Opened { name: String, url: String },
    /// A song search was opened on a music platform
    Playing {
        song: String,
        platform: String,
        url: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Response(text) | Outcome::Translation(text) => f.write_str(text),
            Outcome::Opened { name, .. } => write!(f, "Opened {}", name),
            Outcome::Playing { song, platform, .. } => {
                write!(f, "Playing {} on {}", song, platform)
            }
        }
    }
}

/// Join the platform's search prefix with the song name, spaces as `+`
pub fn build_search_url(prefix: &str, song: &str) -> String {
    format!("{}{}", prefix, song.replace(' ', "+"))
}

pub struct Dispatcher {
    generator: Option<Arc<dyn TextGenerator>>,
    /// Secret the configured generative provider reads
    generator_key: &'static str,
    translator: Option<Arc<dyn Translator>>,
    browser: Arc<dyn BrowserLauncher>,
    websites: LookupTable,
    platforms: LookupTable,
}

impl Dispatcher {
    pub fn new(browser: Arc<dyn BrowserLauncher>) -> Self {
        Self {
            generator: None,
            generator_key: GENERATIVE_KEY_VAR,
            translator: None,
            browser,
            websites: WEBSITES.clone(),
            platforms: MUSIC_PLATFORMS.clone(),
        }
    }

    pub fn with_generator(mut self, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_generator_key(mut self, key: &'static str) -> Self {
        self.generator_key = key;
        self
    }

    pub fn with_translator(mut self, translator: Option<Arc<dyn Translator>>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_websites(mut self, websites: LookupTable) -> Self {
        self.websites = websites;
        self
    }

    pub fn websites(&self) -> &LookupTable {
        &self.websites
    }

    pub fn platforms(&self) -> &LookupTable {
        &self.platforms
    }

    /// Whether the collaborator a task needs is configured
    pub fn is_available(&self, task: Task) -> bool {
        match task {
            Task::GenerateResponse => self.generator.is_some(),
            Task::TranslateText => self.translator.is_some(),
            Task::OpenWebsite | Task::PlayMusic => true,
        }
    }

    /// Run one task against its collaborator
    pub async fn dispatch(&self, task: Task, inputs: &TaskInputs) -> AssistResult<Outcome> {
        debug!("Dispatching {}", task);
        let result = match task {
            Task::GenerateResponse => self.generate(inputs).await,
            Task::TranslateText => self.translate(inputs).await,
            Task::OpenWebsite => self.open_website(inputs),
            Task::PlayMusic => self.play_music(inputs),
        };

        if let Err(e) = &result {
            if e.is_input_error() {
                debug!("{} rejected: {}", task, e);
            } else {
                warn!("❌ {} failed: {}", task, e);
            }
        }
        result
    }

    async fn generate(&self, inputs: &TaskInputs) -> AssistResult<Outcome> {
        let question = inputs.require(Field::Question)?;
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| AssistError::ConfigMissing(self.generator_key.to_string()))?;

        let text = generator.generate(question).await?;
        Ok(Outcome::Response(text))
    }

    async fn translate(&self, inputs: &TaskInputs) -> AssistResult<Outcome> {
        let text = inputs.require(Field::Text)?;
        let target = resolver::resolve_language(inputs.require(Field::TargetLanguage)?);
        let translator = self
            .translator
            .as_ref()
            .ok_or_else(|| AssistError::ConfigMissing(OPENAI_KEY_VAR.to_string()))?;

        debug!("Translating {} chars to '{}' via {}", text.len(), target, translator.name());
        let translated = translator.translate(text, &target).await?;
        Ok(Outcome::Translation(translated))
    }

    fn open_website(&self, inputs: &TaskInputs) -> AssistResult<Outcome> {
        let raw = inputs.require(Field::Website)?;
        let url = match resolver::resolve(&self.websites, raw) {
            Resolution::Found(url) => url,
            Resolution::NotFound => return Err(unrecognized("Website", &self.websites, raw)),
        };

        self.browser.open(url)?;
        let name = crate::tables::normalize(raw);
        info!("✅ Opened {} ({})", name, url);
        Ok(Outcome::Opened {
            name,
            url: url.to_string(),
        })
    }

    fn play_music(&self, inputs: &TaskInputs) -> AssistResult<Outcome> {
        let platform = inputs.require(Field::Platform)?;
        let song = inputs.require(Field::Song)?;
        let prefix = match resolver::resolve(&self.platforms, platform) {
            Resolution::Found(prefix) => prefix,
            Resolution::NotFound => return Err(unrecognized("Platform", &self.platforms, platform)),
        };

        let url = build_search_url(prefix, song);
        self.browser.open(&url)?;
        info!("🎵 Playing '{}' on {}", song, platform);
        Ok(Outcome::Playing {
            song: song.to_string(),
            platform: platform.trim().to_string(),
            url,
        })
    }
}

fn unrecognized(kind: &str, table: &LookupTable, raw: &str) -> AssistError {
    AssistError::UnrecognizedTarget {
        kind: kind.to_string(),
        name: raw.trim().to_string(),
        suggestion: resolver::suggest(table, raw).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBrowser {
        opened: Mutex<Vec<String>>,
    }

    impl BrowserLauncher for RecordingBrowser {
        fn open(&self, url: &str) -> AssistResult<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn dispatcher() -> (Dispatcher, Arc<RecordingBrowser>) {
        let browser = Arc::new(RecordingBrowser::default());
        (Dispatcher::new(browser.clone()), browser)
    }

    #[test]
    fn test_build_search_url() {
        assert_eq!(
            build_search_url("https://www.youtube.com/results?search_query=", "bohemian rhapsody"),
            "https://www.youtube.com/results?search_query=bohemian+rhapsody"
        );
        assert_eq!(build_search_url("p/", "one"), "p/one");
    }

    #[tokio::test]
    async fn test_open_website_resolves_and_opens() {
        let (dispatcher, browser) = dispatcher();
        let outcome = dispatcher
            .dispatch(Task::OpenWebsite, &TaskInputs::website(" GitHub "))
            .await
            .unwrap();
        assert_eq!(outcome.to_string(), "Opened github");
        assert_eq!(*browser.opened.lock().unwrap(), vec!["https://www.github.com"]);
    }

    #[tokio::test]
    async fn test_open_unknown_website() {
        let (dispatcher, browser) = dispatcher();
        let err = dispatcher
            .dispatch(Task::OpenWebsite, &TaskInputs::website("myspace"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistError::UnrecognizedTarget { ref name, .. } if name == "myspace"));
        assert!(browser.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_play_music_on_youtube() {
        let (dispatcher, browser) = dispatcher();
        let outcome = dispatcher
            .dispatch(Task::PlayMusic, &TaskInputs::music("YouTube", "bohemian rhapsody"))
            .await
            .unwrap();
        assert_eq!(outcome.to_string(), "Playing bohemian rhapsody on YouTube");
        assert_eq!(
            *browser.opened.lock().unwrap(),
            vec!["https://www.youtube.com/results?search_query=bohemian+rhapsody"]
        );
    }

    #[tokio::test]
    async fn test_play_music_missing_song() {
        let (dispatcher, browser) = dispatcher();
        let err = dispatcher
            .dispatch(Task::PlayMusic, &TaskInputs::music("spotify", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistError::MissingInput(_)));
        assert!(browser.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_without_generator_is_config_missing() {
        let (dispatcher, _) = dispatcher();
        assert!(!dispatcher.is_available(Task::GenerateResponse));
        let err = dispatcher
            .dispatch(Task::GenerateResponse, &TaskInputs::question("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistError::ConfigMissing(key) if key == "API_KEY"));
    }

    #[tokio::test]
    async fn test_missing_generator_names_its_key() {
        let (dispatcher, _) = dispatcher();
        let dispatcher = dispatcher.with_generator_key(OPENAI_KEY_VAR);
        let err = dispatcher
            .dispatch(Task::GenerateResponse, &TaskInputs::question("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistError::ConfigMissing(key) if key == "OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn test_blank_input_checked_before_config() {
        let (dispatcher, _) = dispatcher();
        let err = dispatcher
            .dispatch(Task::TranslateText, &TaskInputs::translation("", "es"))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistError::MissingInput(_)));
    }
}
