pub mod error;
pub mod phrasebook;
pub mod prompt;
pub mod service;

pub use error::TranslationServiceError;
pub use phrasebook::Phrasebook;
pub use service::{TranslationService, TranslationServiceApi};

use crate::domain::shared::language::LanguageCode;
use serde::{Deserialize, Serialize};

/// Where a translated text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranslationOrigin {
    /// Target was the source language, text returned as-is
    Passthrough,
    Remote { provider: String },
    Phrasebook,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub origin: TranslationOrigin,
}

/// Repository trait for the static phrase tables used when no remote
/// translation is available
pub trait PhrasebookRepository: Send + Sync {
    /// Returns None for languages without a table (the source language)
    fn phrasebook(&self, language: LanguageCode) -> Option<&Phrasebook>;
}
