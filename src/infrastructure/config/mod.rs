use serde::Deserialize;
use std::env;

use crate::domain::announcement::DEFAULT_VOLUME;
use crate::infrastructure::repositories::DEFAULT_GEMINI_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Remote translation
    pub translation_provider: TranslationProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub translation_timeout_secs: u64,
    // Translation cache
    pub translation_cache_enabled: bool,
    // Speech
    pub default_volume: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    Gemini,
    OpenAi,
    /// Phrasebook only
    None,
}

const API_KEY_PLACEHOLDERS: &[&str] = &["YOUR_GEMINI_API_KEY_HERE", "YOUR_OPENAI_API_KEY_HERE"];

/// Read an API key, treating unset, blank and placeholder values as absent
fn api_key(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !API_KEY_PLACEHOLDERS.contains(&v.as_str()))
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let default_volume: f32 = env::var("DEFAULT_VOLUME")
            .unwrap_or_else(|_| DEFAULT_VOLUME.to_string())
            .parse()?;

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            translation_provider: match env::var("TRANSLATION_PROVIDER")
                .unwrap_or_else(|_| "gemini".to_string())
                .to_lowercase()
                .as_str()
            {
                "openai" => TranslationProvider::OpenAi,
                "none" => TranslationProvider::None,
                _ => TranslationProvider::Gemini,
            },
            gemini_api_key: api_key("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            openai_api_key: api_key("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            translation_timeout_secs: env::var("TRANSLATION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            translation_cache_enabled: env::var("TRANSLATION_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            default_volume: default_volume.clamp(0.0, 1.0),
        };

        Ok(config)
    }

    /// The provider to call, if its credential is present
    pub fn remote_translation(&self) -> Option<(TranslationProvider, &str)> {
        let key = match self.translation_provider {
            TranslationProvider::Gemini => self.gemini_api_key.as_deref(),
            TranslationProvider::OpenAi => self.openai_api_key.as_deref(),
            TranslationProvider::None => None,
        }?;
        Some((self.translation_provider, key))
    }
}
