//! Mock browser for testing
//!
//! Records every URL instead of launching anything.

use aidesk::browser::BrowserLauncher;
use aidesk::error::{AssistError, AssistResult};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockBrowser {
    /// All URLs that were "opened"
    pub opened: Arc<Mutex<Vec<String>>>,
    /// Simulate failure on open
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserLauncher for MockBrowser {
    fn open(&self, url: &str) -> AssistResult<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(AssistError::BrowserFailed("no display".to_string()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
