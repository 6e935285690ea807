pub mod error;
pub mod speech;
pub mod voice;
pub mod workflow;

pub use error::{ValidationError, WorkflowError};
pub use speech::{SpeechErrorReason, SpeechEvent, SpeechOutput, SpeechRequest, UtteranceId, Voice};
pub use voice::select_voice;
pub use workflow::{AnnouncementWorkflow, PendingTranslation};

use crate::domain::shared::language::LanguageCode;
use serde::{Deserialize, Serialize};

/// Default playback volume for new sessions
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Longest announcement accepted, in characters
pub const MAX_ANNOUNCEMENT_LENGTH: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechState {
    Idle,
    Translating,
    Speaking,
    Paused,
}

/// A validated announcement ready for translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementRequest {
    pub source_text: String,
    pub target_language: LanguageCode,
}

impl AnnouncementRequest {
    pub fn new(text: &str, language: Option<&str>) -> Result<Self, ValidationError> {
        let source_text = text.trim();
        if source_text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        if source_text.chars().count() > MAX_ANNOUNCEMENT_LENGTH {
            return Err(ValidationError::TooLong {
                limit: MAX_ANNOUNCEMENT_LENGTH,
            });
        }

        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or(ValidationError::NoLanguage)?;

        let target_language = language
            .parse::<LanguageCode>()
            .map_err(|e| ValidationError::UnsupportedLanguage(e.0))?;

        Ok(Self {
            source_text: source_text.to_string(),
            target_language,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A user-visible message, shown as a toast by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Error,
        }
    }

    pub fn speech_started(language: LanguageCode) -> Self {
        Self::info("Speech Started", format!("Converting to {}", language.display_name()))
    }

    /// The notice to show for a workflow error, if any
    pub fn for_error(err: &WorkflowError) -> Option<Self> {
        match err {
            WorkflowError::Validation(ValidationError::EmptyText) => {
                Some(Self::error("No text provided", err_description(err)))
            }
            WorkflowError::Validation(ValidationError::NoLanguage) => {
                Some(Self::error("No language selected", err_description(err)))
            }
            WorkflowError::Validation(ValidationError::UnsupportedLanguage(_)) => {
                Some(Self::error("Unsupported language", err_description(err)))
            }
            WorkflowError::Validation(ValidationError::TooLong { .. }) => {
                Some(Self::error("Text too long", err_description(err)))
            }
            WorkflowError::SpeechOutput(_) => Some(Self::error(
                "Speech Error",
                "There was an error generating the speech. Please try again.",
            )),
            WorkflowError::StaleRequest(_) => None,
        }
    }
}

fn err_description(err: &WorkflowError) -> String {
    match err {
        WorkflowError::Validation(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
