use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::{
        announcement::AnnouncementRequest,
        shared::language::LanguageCode,
        translation::{TranslationOrigin, TranslationServiceApi},
    },
    error::AppResult,
};

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub text: String,
    pub target_language: LanguageCode,
    pub origin: TranslationOrigin,
}

pub struct TranslationController {
    translation_service: Arc<dyn TranslationServiceApi>,
}

impl TranslationController {
    pub fn new(translation_service: Arc<dyn TranslationServiceApi>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate an announcement without speaking it
    pub async fn translate(
        State(controller): State<Arc<TranslationController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let announcement =
            AnnouncementRequest::new(&request.text, request.target_language.as_deref())?;

        let char_count = announcement.source_text.chars().count();

        tracing::info!(
            target_language = %announcement.target_language,
            char_count,
            "Translation request"
        );

        let translation = controller
            .translation_service
            .translate(&announcement.source_text, announcement.target_language)
            .await?;

        Ok(Json(TranslateResponse {
            text: translation.text,
            target_language: announcement.target_language,
            origin: translation.origin,
        }))
    }
}
