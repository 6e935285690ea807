use super::error::WorkflowError;
use super::speech::{SpeechEvent, SpeechOutput, SpeechRequest, UtteranceId};
use super::voice::select_voice;
use super::{AnnouncementRequest, SpeechState};
use crate::domain::shared::language::LanguageCode;
use crate::domain::translation::{Translation, TranslationServiceApi, TranslationServiceError};

/// A submission waiting for its translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTranslation {
    pub utterance: UtteranceId,
    pub request: AnnouncementRequest,
}

/// Translate-then-speak state machine for one session.
///
/// Every submission gets a fresh utterance id. Translation results and speech
/// lifecycle events are matched against the current id, so completions from a
/// replaced or stopped submission cannot touch the newer one. At most one
/// utterance is ever live on the speech output: the previous one is cancelled
/// before the next submission begins.
pub struct AnnouncementWorkflow<S: SpeechOutput> {
    speech: S,
    state: SpeechState,
    volume: f32,
    last_utterance: UtteranceId,
    current: Option<UtteranceId>,
    pending: Option<AnnouncementRequest>,
}

impl<S: SpeechOutput> AnnouncementWorkflow<S> {
    pub fn new(speech: S, volume: f32) -> Self {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            super::DEFAULT_VOLUME
        };

        Self {
            speech,
            state: SpeechState::Idle,
            volume,
            last_utterance: 0,
            current: None,
            pending: None,
        }
    }

    pub fn state(&self) -> SpeechState {
        self.state
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn current_utterance(&self) -> Option<UtteranceId> {
        self.current
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn speech_mut(&mut self) -> &mut S {
        &mut self.speech
    }

    /// Validate and start a submission, leaving the workflow in `Translating`.
    ///
    /// Invalid input returns a validation error without touching any state.
    /// Otherwise any live utterance is cancelled first.
    pub fn prepare_submission(
        &mut self,
        text: &str,
        language: Option<&str>,
    ) -> Result<PendingTranslation, WorkflowError> {
        let request = AnnouncementRequest::new(text, language)?;

        self.cancel_current();

        self.last_utterance += 1;
        let utterance = self.last_utterance;
        self.current = Some(utterance);
        self.pending = Some(request.clone());
        self.state = SpeechState::Translating;

        tracing::info!(
            utterance,
            target_language = %request.target_language,
            text_length = request.source_text.len(),
            "Announcement submitted"
        );

        Ok(PendingTranslation { utterance, request })
    }

    /// Speak the result of a translation started by `prepare_submission`.
    ///
    /// A failed translation is not fatal: the original text is spoken instead.
    pub fn finish_translation(
        &mut self,
        utterance: UtteranceId,
        outcome: Result<Translation, TranslationServiceError>,
    ) -> Result<SpeechRequest, WorkflowError> {
        if self.current != Some(utterance) || self.state != SpeechState::Translating {
            tracing::debug!(utterance, current = ?self.current, "Discarding stale translation");
            return Err(WorkflowError::StaleRequest(utterance));
        }

        let Some(request) = self.pending.take() else {
            return Err(WorkflowError::StaleRequest(utterance));
        };

        let text = match outcome {
            Ok(translation) => translation.text,
            Err(e) => {
                tracing::warn!(
                    utterance,
                    error = %e,
                    "Translation failed, speaking original text"
                );
                request.source_text
            }
        };

        let speech_request = self.build_speech_request(text, request.target_language);

        if let Err(reason) = self.speech.speak(utterance, &speech_request) {
            tracing::error!(utterance, error = %reason, "Speech output rejected utterance");
            self.reset();
            return Err(WorkflowError::SpeechOutput(reason));
        }

        self.state = SpeechState::Speaking;
        tracing::info!(
            utterance,
            lang = %speech_request.lang,
            voice = ?speech_request.voice,
            rate = speech_request.rate,
            pitch = speech_request.pitch,
            volume = speech_request.volume,
            "Speech requested"
        );

        Ok(speech_request)
    }

    /// Validate, translate and speak in one go
    pub async fn submit(
        &mut self,
        translator: &dyn TranslationServiceApi,
        text: &str,
        language: Option<&str>,
    ) -> Result<SpeechRequest, WorkflowError> {
        let pending = self.prepare_submission(text, language)?;
        let outcome = translator
            .translate(&pending.request.source_text, pending.request.target_language)
            .await;
        self.finish_translation(pending.utterance, outcome)
    }

    /// Returns false when there is nothing speaking to pause
    pub fn pause(&mut self) -> bool {
        if self.state != SpeechState::Speaking {
            tracing::debug!(state = ?self.state, "Ignoring pause");
            return false;
        }

        self.speech.pause();
        self.state = SpeechState::Paused;
        true
    }

    /// Returns false when nothing is paused
    pub fn resume(&mut self) -> bool {
        if self.state != SpeechState::Paused {
            tracing::debug!(state = ?self.state, "Ignoring resume");
            return false;
        }

        self.speech.resume();
        self.state = SpeechState::Speaking;
        true
    }

    /// Cancel whatever is in progress and return to `Idle`.
    /// Returns false if the workflow was already idle.
    pub fn stop(&mut self) -> bool {
        if self.state == SpeechState::Idle {
            return false;
        }

        tracing::info!(utterance = ?self.current, state = ?self.state, "Announcement stopped");
        self.cancel_current();
        true
    }

    /// Clamp and store the volume, applying it to the live utterance if any.
    /// Non-finite values are ignored.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        if !volume.is_finite() {
            return self.volume;
        }

        self.volume = volume.clamp(0.0, 1.0);

        if let (Some(utterance), SpeechState::Speaking | SpeechState::Paused) =
            (self.current, self.state)
        {
            self.speech.set_volume(utterance, self.volume);
        }

        self.volume
    }

    /// Apply a lifecycle event from the speech output
    pub fn handle_speech_event(
        &mut self,
        utterance: UtteranceId,
        event: SpeechEvent,
    ) -> Result<(), WorkflowError> {
        let live = matches!(self.state, SpeechState::Speaking | SpeechState::Paused);
        if self.current != Some(utterance) || !live {
            tracing::debug!(utterance, event = ?event, "Discarding stale speech event");
            return Err(WorkflowError::StaleRequest(utterance));
        }

        match event {
            SpeechEvent::Started => {
                tracing::debug!(utterance, "Speech started");
                Ok(())
            }
            SpeechEvent::Ended => {
                tracing::info!(utterance, "Speech ended");
                self.reset();
                Ok(())
            }
            SpeechEvent::Error(reason) => {
                self.reset();
                if reason.is_expected() {
                    tracing::debug!(utterance, reason = %reason, "Speech interrupted");
                    Ok(())
                } else {
                    tracing::error!(utterance, reason = %reason, "Speech error");
                    Err(WorkflowError::speech(reason))
                }
            }
        }
    }

    fn build_speech_request(&self, text: String, language: LanguageCode) -> SpeechRequest {
        let parameters = language.speech_parameters();
        let voice = select_voice(language, self.speech.voices()).map(|v| v.name.clone());

        SpeechRequest {
            text,
            lang: language.as_str().to_string(),
            volume: self.volume,
            rate: parameters.rate,
            pitch: parameters.pitch,
            voice,
        }
    }

    fn cancel_current(&mut self) {
        if matches!(self.state, SpeechState::Speaking | SpeechState::Paused) {
            self.speech.cancel();
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.state = SpeechState::Idle;
        self.current = None;
        self.pending = None;
    }
}
