use super::error::TranslationServiceError;
use super::prompt::{build_prompt, clean_completion};
use super::{PhrasebookRepository, Translation, TranslationOrigin};
use crate::domain::shared::language::LanguageCode;
use crate::infrastructure::repositories::CompletionRepository;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

pub struct TranslationService {
    completion_repo: Option<Arc<dyn CompletionRepository>>,
    phrasebook_repo: Arc<dyn PhrasebookRepository>,
    cache: Option<Cache<(LanguageCode, String), Translation>>,
}

impl TranslationService {
    pub fn new(
        completion_repo: Option<Arc<dyn CompletionRepository>>,
        phrasebook_repo: Arc<dyn PhrasebookRepository>,
        cache_enabled: bool,
    ) -> Self {
        // Only remote translations are cached; the phrasebook is already cheap
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(500)
                    .time_to_idle(Duration::from_secs(30 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            completion_repo,
            phrasebook_repo,
            cache,
        }
    }

    /// Name of the remote provider in use, or None when running on the phrasebook only
    pub fn remote_provider(&self) -> Option<&'static str> {
        self.completion_repo.as_ref().map(|repo| repo.provider())
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate English `text` into `target`
    ///
    /// Implementations may fail; callers that must always produce speech fall
    /// back to the untranslated text.
    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<Translation, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<Translation, TranslationServiceError> {
        if target.is_source() {
            tracing::debug!(target_language = %target, "Target is the source language, skipping translation");
            return Ok(Translation {
                text: text.to_string(),
                origin: TranslationOrigin::Passthrough,
            });
        }

        let Some(repo) = &self.completion_repo else {
            tracing::debug!(
                target_language = %target,
                "No translation service configured, using phrasebook"
            );
            return Ok(self.translate_with_phrasebook(text, target));
        };

        match self.translate_remote(repo.as_ref(), text, target).await {
            Ok(translation) => Ok(translation),
            Err(reason) => {
                tracing::warn!(
                    provider = repo.provider(),
                    target_language = %target,
                    error = %reason,
                    "Remote translation failed, falling back to phrasebook"
                );
                Ok(self.translate_with_phrasebook(text, target))
            }
        }
    }
}

impl TranslationService {
    async fn translate_remote(
        &self,
        repo: &dyn CompletionRepository,
        text: &str,
        target: LanguageCode,
    ) -> Result<Translation, String> {
        let cache_key = (target, text.to_string());

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&cache_key).await {
                tracing::info!(target_language = %target, "Translation cache hit");
                return Ok(cached);
            }
        }

        let prompt = build_prompt(text, target)
            .ok_or_else(|| format!("no prompt available for {}", target))?;

        let start_time = std::time::Instant::now();
        let completion = repo.generate(&prompt).await?;
        let translated = clean_completion(&completion);

        if translated.is_empty() {
            return Err("completion service returned an empty translation".to_string());
        }

        tracing::info!(
            provider = repo.provider(),
            target_language = %target,
            latency_ms = start_time.elapsed().as_millis(),
            source_length = text.len(),
            translated_length = translated.len(),
            "Remote translation completed"
        );

        let translation = Translation {
            text: translated,
            origin: TranslationOrigin::Remote {
                provider: repo.provider().to_string(),
            },
        };

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, translation.clone()).await;
        }

        Ok(translation)
    }

    fn translate_with_phrasebook(&self, text: &str, target: LanguageCode) -> Translation {
        let translated = match self.phrasebook_repo.phrasebook(target) {
            Some(phrasebook) => phrasebook.apply(text),
            None => {
                tracing::warn!(target_language = %target, "No phrasebook for language, keeping original text");
                text.to_string()
            }
        };

        Translation {
            text: translated,
            origin: TranslationOrigin::Phrasebook,
        }
    }
}
