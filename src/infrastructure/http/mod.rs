pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    announcement::AnnouncementController, health, language, translation::TranslationController,
};
use crate::domain::translation::TranslationService;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(
    translation_service: Arc<TranslationService>,
    translation_controller: Arc<TranslationController>,
    announcement_controller: Arc<AnnouncementController>,
) -> Router {
    // Translation routes
    let translation_routes = Router::new()
        .route("/api/translate", post(TranslationController::translate))
        .with_state(translation_controller);

    // Announcement session (WebSocket)
    let announcement_routes = Router::new()
        .route("/api/announcements/ws", get(AnnouncementController::connect))
        .with_state(announcement_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(translation_service)
        .route("/api/languages", get(language::list_languages))
        .merge(translation_routes)
        .merge(announcement_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
