//! Task selection and per-task form fields

use crate::error::AssistError;
use std::fmt;
use std::str::FromStr;

/// The four things the assistant can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    GenerateResponse,
    TranslateText,
    OpenWebsite,
    PlayMusic,
}

impl Task {
    pub const ALL: [Task; 4] = [
        Task::GenerateResponse,
        Task::TranslateText,
        Task::OpenWebsite,
        Task::PlayMusic,
    ];

    /// Label shown in task listings
    pub fn label(self) -> &'static str {
        match self {
            Task::GenerateResponse => "Generate Response",
            Task::TranslateText => "Translate Text",
            Task::OpenWebsite => "Open Website",
            Task::PlayMusic => "Play Music",
        }
    }

    /// Label of the button that runs the task
    pub fn action(self) -> &'static str {
        match self {
            Task::GenerateResponse => "Generate Response",
            Task::TranslateText => "Translate",
            Task::OpenWebsite => "Open",
            Task::PlayMusic => "Play",
        }
    }

    /// Form fields this task reads
    pub fn fields(self) -> &'static [Field] {
        match self {
            Task::GenerateResponse => &[Field::Question],
            Task::TranslateText => &[Field::Text, Field::TargetLanguage],
            Task::OpenWebsite => &[Field::Website],
            Task::PlayMusic => &[Field::Platform, Field::Song],
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Task {
    type Err = AssistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match key.as_str() {
            "generate" | "generateresponse" | "ask" | "1" => Ok(Task::GenerateResponse),
            "translate" | "translatetext" | "2" => Ok(Task::TranslateText),
            "open" | "openwebsite" | "website" | "3" => Ok(Task::OpenWebsite),
            "play" | "playmusic" | "music" | "4" => Ok(Task::PlayMusic),
            _ => Err(AssistError::UnknownTask(s.trim().to_string())),
        }
    }
}

/// One input field of the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Question,
    Text,
    TargetLanguage,
    Website,
    Platform,
    Song,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Question => "question",
            Field::Text => "text",
            Field::TargetLanguage => "lang",
            Field::Website => "website",
            Field::Platform => "platform",
            Field::Song => "song",
        }
    }

    /// Wording used in "Please enter ..." messages
    pub fn prompt(self) -> &'static str {
        match self {
            Field::Question => "a question",
            Field::Text => "text to translate",
            Field::TargetLanguage => "a target language",
            Field::Website => "a website name",
            Field::Platform => "a music platform",
            Field::Song => "a song name",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "question" | "q" | "prompt" => Some(Field::Question),
            "text" => Some(Field::Text),
            "lang" | "language" | "target" | "to" => Some(Field::TargetLanguage),
            "website" | "site" | "name" => Some(Field::Website),
            "platform" => Some(Field::Platform),
            "song" => Some(Field::Song),
            _ => None,
        }
    }
}

/// Raw user inputs for a single action. Blank means not entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInputs {
    pub question: String,
    pub text: String,
    pub target_language: String,
    pub website: String,
    pub platform: String,
    pub song: String,
}

impl TaskInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Question => &self.question,
            Field::Text => &self.text,
            Field::TargetLanguage => &self.target_language,
            Field::Website => &self.website,
            Field::Platform => &self.platform,
            Field::Song => &self.song,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Question => &mut self.question,
            Field::Text => &mut self.text,
            Field::TargetLanguage => &mut self.target_language,
            Field::Website => &mut self.website,
            Field::Platform => &mut self.platform,
            Field::Song => &mut self.song,
        };
        *slot = value.into();
    }

    /// The field's value, or `MissingInput` if it is blank
    pub fn require(&self, field: Field) -> Result<&str, AssistError> {
        let value = self.get(field);
        if value.trim().is_empty() {
            Err(AssistError::MissingInput(field.prompt().to_string()))
        } else {
            Ok(value)
        }
    }

    pub fn question(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    pub fn translation(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            ..Self::default()
        }
    }

    pub fn website(website: impl Into<String>) -> Self {
        Self {
            website: website.into(),
            ..Self::default()
        }
    }

    pub fn music(platform: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            song: song.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_parsing() {
        assert_eq!("Generate Response".parse::<Task>().unwrap(), Task::GenerateResponse);
        assert_eq!("translate".parse::<Task>().unwrap(), Task::TranslateText);
        assert_eq!(" open-website ".parse::<Task>().unwrap(), Task::OpenWebsite);
        assert_eq!("PLAY_MUSIC".parse::<Task>().unwrap(), Task::PlayMusic);
        assert_eq!("4".parse::<Task>().unwrap(), Task::PlayMusic);
        assert!(matches!(
            "dance".parse::<Task>(),
            Err(AssistError::UnknownTask(name)) if name == "dance"
        ));
    }

    #[test]
    fn test_labels_round_trip() {
        for task in Task::ALL {
            assert_eq!(task.label().parse::<Task>().unwrap(), task);
        }
    }

    #[test]
    fn test_require_blank_is_missing_input() {
        let inputs = TaskInputs::translation("hola", "  ");
        assert_eq!(inputs.require(Field::Text).unwrap(), "hola");
        assert!(matches!(
            inputs.require(Field::TargetLanguage),
            Err(AssistError::MissingInput(field)) if field == "a target language"
        ));
    }

    #[test]
    fn test_field_set_and_get() {
        let mut inputs = TaskInputs::default();
        for task in Task::ALL {
            for field in task.fields() {
                inputs.set(*field, field.name());
            }
        }
        assert_eq!(inputs.get(Field::TargetLanguage), "lang");
        assert_eq!(inputs.song, "song");
        assert_eq!(Field::parse("language"), Some(Field::TargetLanguage));
        assert_eq!(Field::parse("volume"), None);
    }
}
