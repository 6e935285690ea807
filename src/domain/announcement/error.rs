use super::speech::{SpeechErrorReason, UtteranceId};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter some text to convert to speech.")]
    EmptyText,
    #[error("Please select a target language.")]
    NoLanguage,
    #[error("Language {0} is not supported.")]
    UnsupportedLanguage(String),
    #[error("Text must be {limit} characters or less.")]
    TooLong { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("invalid announcement: {0}")]
    Validation(#[from] ValidationError),
    #[error("speech output failed: {0}")]
    SpeechOutput(String),
    /// A completion for a submission that has since been replaced or stopped
    #[error("stale completion for utterance {0}")]
    StaleRequest(UtteranceId),
}

impl WorkflowError {
    pub fn speech(reason: SpeechErrorReason) -> Self {
        WorkflowError::SpeechOutput(reason.to_string())
    }

    /// Stale completions are bookkeeping, never something to show the user
    pub fn is_silent(&self) -> bool {
        matches!(self, WorkflowError::StaleRequest(_))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::TooLong { .. } => AppError::PayloadTooLarge(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
