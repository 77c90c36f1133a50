use crate::error::{AssistError, AssistResult};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding the generative-service key
pub const GENERATIVE_KEY_VAR: &str = "API_KEY";

/// Environment variable holding the translation / alternate-service key
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Generative
    pub generative_provider: String,
    pub gemini_url: String,
    pub gemini_model: String,

    // OpenAI-compatible service (translation, speech, alternate generation)
    pub openai_url: String,
    pub openai_model: String,

    // Translation
    pub translation_provider: String,
    pub google_translate_url: String,

    // Speech
    pub speech_model: String,
    pub record_seconds: u64,
    pub input_device: Option<usize>,

    // Network
    pub request_timeout: u64,

    // Data
    pub extra_websites: HashMap<String, String>,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generative_provider: "gemini".to_string(),
            gemini_url: "https://generativelanguage.googleapis.com".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            openai_url: "https://api.openai.com".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            translation_provider: "openai".to_string(),
            google_translate_url: "https://translate.googleapis.com".to_string(),
            speech_model: "whisper-1".to_string(),
            record_seconds: 5,
            input_device: None,
            request_timeout: 30,
            extra_websites: HashMap::new(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = config_path.with_extension("json.corrupt");
                let _ = std::fs::rename(config_path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aidesk")
        .join("config.json")
}

/// API keys read once at startup.
///
/// Blank values count as missing.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub generative_key: Option<String>,
    pub openai_key: Option<String>,
}

impl Secrets {
    /// Read both keys from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read both keys through an arbitrary lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        Self {
            generative_key: read(GENERATIVE_KEY_VAR),
            openai_key: read(OPENAI_KEY_VAR),
        }
    }

    pub fn generative_key(&self) -> AssistResult<&str> {
        self.generative_key
            .as_deref()
            .ok_or_else(|| AssistError::ConfigMissing(GENERATIVE_KEY_VAR.to_string()))
    }

    pub fn openai_key(&self) -> AssistResult<&str> {
        self.openai_key
            .as_deref()
            .ok_or_else(|| AssistError::ConfigMissing(OPENAI_KEY_VAR.to_string()))
    }

    /// One `ConfigMissing` per absent key, in a stable order
    pub fn missing(&self) -> Vec<AssistError> {
        [self.generative_key().err(), self.openai_key().err()]
            .into_iter()
            .flatten()
            .collect()
    }
}
