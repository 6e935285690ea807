use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::shared::language::{LanguageCode, SOURCE_LANGUAGE};

/// Canned announcements offered by the client as one-click inputs
pub const SAMPLE_ANNOUNCEMENTS: &[&str] = &[
    "Attention passengers, Flight MH123 to Kuala Lumpur is now boarding at Gate 5.",
    "Final boarding call for passengers on Flight SQ456 to Singapore.",
    "Ladies and gentlemen, welcome to Kuala Lumpur International Airport.",
    "Please proceed to the departure gate for your connecting flight.",
];

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageResponse {
    pub code: LanguageCode,
    pub name: String,
    pub flag: String,
    pub rate: f32,
    pub pitch: f32,
    pub is_source: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub source_language: LanguageCode,
    pub languages: Vec<LanguageResponse>,
    pub sample_announcements: Vec<String>,
}

/// GET /api/languages - Supported languages and sample announcements
pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages = LanguageCode::ALL
        .into_iter()
        .map(|code| {
            let parameters = code.speech_parameters();
            LanguageResponse {
                code,
                name: code.display_name().to_string(),
                flag: code.flag().to_string(),
                rate: parameters.rate,
                pitch: parameters.pitch,
                is_source: code.is_source(),
            }
        })
        .collect();

    Json(LanguagesResponse {
        source_language: SOURCE_LANGUAGE,
        languages,
        sample_announcements: SAMPLE_ANNOUNCEMENTS.iter().map(|s| s.to_string()).collect(),
    })
}
