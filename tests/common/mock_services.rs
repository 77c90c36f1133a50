//! Mock generative, translation and speech services for testing

use aidesk::error::{AssistError, AssistResult};
use aidesk::generative::TextGenerator;
use aidesk::speech::SpeechRecognizer;
use aidesk::translation::Translator;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Generator that answers with a fixed reply and counts calls
pub struct MockGenerator {
    reply: String,
    calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
    pub should_fail: Mutex<bool>,
}

impl MockGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            should_fail: Mutex::new(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> AssistResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if *self.should_fail.lock().unwrap() {
            return Err(AssistError::RequestFailed("503 Service Unavailable".to_string()));
        }
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Translator that tags the text with the target code
#[derive(Default)]
pub struct MockTranslator {
    pub requests: Mutex<Vec<(String, String)>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: &str) -> AssistResult<String> {
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), target.to_string()));
        Ok(format!("[{}] {}", target, text))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// What the mock recognizer should do when asked to listen
pub enum Heard {
    Words(&'static str),
    Nothing,
    Offline,
}

pub struct MockRecognizer {
    heard: Heard,
}

impl MockRecognizer {
    pub fn new(heard: Heard) -> Self {
        Self { heard }
    }
}

#[async_trait]
impl SpeechRecognizer for MockRecognizer {
    async fn recognize(&self) -> AssistResult<String> {
        match self.heard {
            Heard::Words(text) => Ok(text.to_string()),
            Heard::Nothing => Err(AssistError::NotUnderstood),
            Heard::Offline => Err(AssistError::RequestFailed("network unreachable".to_string())),
        }
    }
}
