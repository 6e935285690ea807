use anyhow::Result;
use airport_linguist::infrastructure::config::{Config, Environment, LogFormat, TranslationProvider};
use airport_linguist::infrastructure::repositories::{
    CompletionRepository, GeminiCompletionRepository, DEFAULT_GEMINI_BASE_URL,
};
use axum::{extract::State, http::HeaderMap, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod ws_client;

use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
    pub base_url: String,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::start(None)
                .await
                .expect("Failed to start test server")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // The server task ends with the test runtime
        }
    }
}

impl TestContext {
    /// Boot the full application on an ephemeral port
    pub async fn start(completion_repo: Option<Arc<dyn CompletionRepository>>) -> Result<Self> {
        let config = test_config();
        let app = create_app(&config, completion_repo)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(Self {
            client: TestClient::new(&base_url),
            base_url,
            config,
        })
    }

    #[allow(dead_code)]
    pub fn ws_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.replacen("http://", "ws://", 1), path)
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        translation_provider: TranslationProvider::None,
        gemini_api_key: None,
        gemini_model: "gemini-2.0-flash".to_string(),
        gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        openai_api_key: None,
        openai_model: "gpt-4o-mini".to_string(),
        translation_timeout_secs: 5,
        translation_cache_enabled: false, // Disable cache in tests to avoid test pollution
        default_volume: 0.8,
    }
}

fn create_app(
    config: &Config,
    completion_repo: Option<Arc<dyn CompletionRepository>>,
) -> Result<Router> {
    use airport_linguist::{
        controllers::{announcement::AnnouncementController, translation::TranslationController},
        domain::translation::{TranslationService, TranslationServiceApi},
        infrastructure::{http::build_router, repositories::HardcodedPhrasebookRepository},
    };

    let phrasebook_repo = Arc::new(HardcodedPhrasebookRepository::new()?);
    let translation_service = Arc::new(TranslationService::new(
        completion_repo,
        phrasebook_repo,
        config.translation_cache_enabled,
    ));
    let translator: Arc<dyn TranslationServiceApi> = translation_service.clone();

    let translation_controller = Arc::new(TranslationController::new(translator.clone()));
    let announcement_controller =
        Arc::new(AnnouncementController::new(translator, config.default_volume));

    Ok(build_router(
        translation_service,
        translation_controller,
        announcement_controller,
    ))
}

/// Requests received by a stub Gemini server: (x-goog-api-key, JSON body)
pub type RecordedRequests = Arc<Mutex<Vec<(Option<String>, Value)>>>;

#[derive(Clone)]
struct StubState {
    reply: Option<String>,
    requests: RecordedRequests,
}

/// Start a stub of the Gemini generateContent API.
///
/// With `reply` set, every call returns that text as the only candidate.
/// Without it, every call fails with a 500.
#[allow(dead_code)]
pub async fn start_gemini_stub(reply: Option<&str>) -> Result<(String, RecordedRequests)> {
    async fn generate(
        State(state): State<StubState>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (axum::http::StatusCode, Json<Value>) {
        let key = headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        state.requests.lock().unwrap().push((key, body));

        match &state.reply {
            Some(text) => (
                axum::http::StatusCode::OK,
                Json(json!({
                    "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
                })),
            ),
            None => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"code": 500, "message": "stub failure"}})),
            ),
        }
    }

    let requests: RecordedRequests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        reply: reply.map(str::to_string),
        requests: requests.clone(),
    };
    let app = Router::new().fallback(generate).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((format!("http://{}/v1beta", addr), requests))
}

/// A Gemini repository pointed at a stub server
#[allow(dead_code)]
pub fn gemini_repository(base_url: &str) -> Arc<dyn CompletionRepository> {
    Arc::new(GeminiCompletionRepository::new(
        reqwest::Client::new(),
        "test-gemini-key".to_string(),
        "gemini-2.0-flash".to_string(),
        base_url.to_string(),
    ))
}
