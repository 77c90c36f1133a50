//! Browser launcher collaborator

use crate::error::{AssistError, AssistResult};
use tracing::info;

/// Something that can show a URL to the user
pub trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> AssistResult<()>;
}

/// Opens URLs in the desktop's default browser
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> AssistResult<()> {
        info!("🌐 Opening {}", url);
        webbrowser::open(url)
            .map_err(|e| AssistError::BrowserFailed(e.to_string()))
    }
}
