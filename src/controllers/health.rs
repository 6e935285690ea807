use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::translation::TranslationService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(service): State<Arc<TranslationService>>) -> impl IntoResponse {
    let translation = service.remote_provider().unwrap_or("phrasebook");

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "translation": translation,
        })),
    )
}
