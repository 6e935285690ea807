use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// BCP 47 tags supported for announcements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "ms-MY")]
    MalayMalaysia,
    #[serde(rename = "zh-CN")]
    ChineseSimplified,
    #[serde(rename = "zh-TW")]
    ChineseTraditional,
}

/// Announcements are always written in this language
pub const SOURCE_LANGUAGE: LanguageCode = LanguageCode::EnglishUs;

/// Fixed speech parameters applied to every utterance of a language family
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeechParameters {
    pub rate: f32,
    pub pitch: f32,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::EnglishUs,
        LanguageCode::MalayMalaysia,
        LanguageCode::ChineseSimplified,
        LanguageCode::ChineseTraditional,
    ];

    /// Get the BCP 47 tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::EnglishUs => "en-US",
            LanguageCode::MalayMalaysia => "ms-MY",
            LanguageCode::ChineseSimplified => "zh-CN",
            LanguageCode::ChineseTraditional => "zh-TW",
        }
    }

    /// Primary language subtag, shared by all regional variants
    pub fn family(&self) -> &'static str {
        match self {
            LanguageCode::EnglishUs => "en",
            LanguageCode::MalayMalaysia => "ms",
            LanguageCode::ChineseSimplified | LanguageCode::ChineseTraditional => "zh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::EnglishUs => "English (United States)",
            LanguageCode::MalayMalaysia => "Malay (Malaysia)",
            LanguageCode::ChineseSimplified => "Chinese (Mandarin)",
            LanguageCode::ChineseTraditional => "Chinese (Traditional)",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            LanguageCode::EnglishUs => "🇺🇸",
            LanguageCode::MalayMalaysia => "🇲🇾",
            LanguageCode::ChineseSimplified => "🇨🇳",
            LanguageCode::ChineseTraditional => "🇹🇼",
        }
    }

    pub fn is_source(&self) -> bool {
        *self == SOURCE_LANGUAGE
    }

    /// Rate and pitch tuned per family so synthesized speech stays intelligible
    /// over a terminal PA system
    pub fn speech_parameters(&self) -> SpeechParameters {
        match self.family() {
            "zh" => SpeechParameters { rate: 0.7, pitch: 1.1 },
            "ms" => SpeechParameters { rate: 0.8, pitch: 1.2 },
            _ => SpeechParameters { rate: 0.85, pitch: 1.1 },
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_tag(s);
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// Platforms disagree on the subtag separator (`zh_CN` on Android, `zh-CN` elsewhere)
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-")
}
