use airport_linguist::controllers::{
    announcement::AnnouncementController, translation::TranslationController,
};
use airport_linguist::domain::translation::{TranslationService, TranslationServiceApi};
use airport_linguist::infrastructure::config::{Config, LogFormat, TranslationProvider};
use airport_linguist::infrastructure::http::{build_router, start_http_server};
use airport_linguist::infrastructure::repositories::{
    CompletionRepository, GeminiCompletionRepository, HardcodedPhrasebookRepository,
    OpenAiCompletionRepository,
};
use async_openai::config::OpenAIConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Airport Linguist on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let completion_repo = create_completion_repository(&config)?;
    let phrasebook_repo = Arc::new(HardcodedPhrasebookRepository::new()?);

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(
        completion_repo,
        phrasebook_repo,
        config.translation_cache_enabled,
    ));
    let translator: Arc<dyn TranslationServiceApi> = translation_service.clone();

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let translation_controller = Arc::new(TranslationController::new(translator.clone()));
    let announcement_controller = Arc::new(AnnouncementController::new(
        translator,
        config.default_volume,
    ));

    let config = Arc::new(config);
    let app = build_router(
        translation_service,
        translation_controller,
        announcement_controller,
    );

    start_http_server(config, app).await?;

    Ok(())
}

/// Pick the remote translation backend. Without a credential the service runs
/// on the phrasebook alone and never attempts a remote call.
fn create_completion_repository(
    config: &Config,
) -> Result<Option<Arc<dyn CompletionRepository>>, Box<dyn std::error::Error>> {
    let Some((provider, api_key)) = config.remote_translation() else {
        tracing::warn!(
            provider = ?config.translation_provider,
            "No translation credentials configured, using phrasebook translation only"
        );
        return Ok(None);
    };

    let timeout = Duration::from_secs(config.translation_timeout_secs);

    let repo: Arc<dyn CompletionRepository> = match provider {
        TranslationProvider::Gemini => {
            let http_client = reqwest::Client::builder().timeout(timeout).build()?;
            Arc::new(GeminiCompletionRepository::new(
                http_client,
                api_key.to_string(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            ))
        }
        TranslationProvider::OpenAi => {
            let client =
                async_openai::Client::with_config(OpenAIConfig::new().with_api_key(api_key));
            Arc::new(OpenAiCompletionRepository::new(
                Arc::new(client),
                config.openai_model.clone(),
                timeout,
            ))
        }
        TranslationProvider::None => return Ok(None),
    };

    tracing::info!(
        provider = repo.provider(),
        timeout_secs = config.translation_timeout_secs,
        "Remote translation enabled"
    );

    Ok(Some(repo))
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "airport_linguist=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
