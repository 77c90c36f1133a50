//! aidesk Error Types
//!
//! Every user action ends in either an `Outcome` or exactly one of these.

use thiserror::Error;

/// Central error type for aidesk
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Please enter {0}")]
    MissingInput(String),

    #[error(
        "{} '{}' not recognized. Please enter a valid {} name.{}",
        .kind,
        .name,
        .kind,
        suggestion_hint(.suggestion)
    )]
    UnrecognizedTarget {
        kind: String,
        name: String,
        suggestion: Option<String>,
    },

    #[error("Could not understand audio")]
    NotUnderstood,

    #[error("Could not request results; {0}")]
    RequestFailed(String),

    #[error("Could not open browser: {0}")]
    BrowserFailed(String),

    #[error("{0} not found. Please add it to the environment or .env file.")]
    ConfigMissing(String),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("Field '{field}' does not belong to task {task}")]
    UnknownField { field: String, task: String },

    #[error("Audio capture error: {0}")]
    Audio(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for aidesk operations
pub type AssistResult<T> = Result<T, AssistError>;

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" Did you mean '{}'?", s),
        None => String::new(),
    }
}

/// Collaborator transport failures are terminal for the action.
impl From<reqwest::Error> for AssistError {
    fn from(err: reqwest::Error) -> Self {
        AssistError::RequestFailed(err.to_string())
    }
}

impl AssistError {
    /// Errors caused by what the user typed rather than by a service
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AssistError::MissingInput(_)
                | AssistError::UnrecognizedTarget { .. }
                | AssistError::UnknownTask(_)
                | AssistError::UnknownCommand(_)
                | AssistError::UnknownField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_message_with_suggestion() {
        let err = AssistError::UnrecognizedTarget {
            kind: "Website".to_string(),
            name: "githb".to_string(),
            suggestion: Some("github".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Website 'githb' not recognized. Please enter a valid Website name. Did you mean 'github'?"
        );
    }

    #[test]
    fn test_unrecognized_message_without_suggestion() {
        let err = AssistError::UnrecognizedTarget {
            kind: "Platform".to_string(),
            name: "myspace".to_string(),
            suggestion: None,
        };
        assert!(err.to_string().ends_with("valid Platform name."));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(AssistError::MissingInput("a question".into()).is_input_error());
        assert!(!AssistError::NotUnderstood.is_input_error());
        assert!(!AssistError::ConfigMissing("API_KEY".into()).is_input_error());
        assert!(!AssistError::BrowserFailed("no display".into()).is_input_error());
    }

    #[test]
    fn test_browser_failure_message() {
        let err = AssistError::BrowserFailed("no display".to_string());
        assert_eq!(err.to_string(), "Could not open browser: no display");
    }
}
