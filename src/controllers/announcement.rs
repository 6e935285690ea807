use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    domain::{
        announcement::{
            AnnouncementWorkflow, Notice, SpeechErrorReason, SpeechEvent, SpeechState,
            UtteranceId, Voice, WorkflowError,
        },
        shared::language::LanguageCode,
        translation::{Translation, TranslationServiceApi, TranslationServiceError},
    },
    infrastructure::speech::{BrowserSpeechOutput, SpeechCommand},
};

/// Messages sent by the browser client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Submit {
        #[serde(default)]
        text: String,
        #[serde(default)]
        language: Option<String>,
    },
    Pause,
    Resume,
    Stop,
    SetVolume {
        volume: f32,
    },
    Voices {
        voices: Vec<Voice>,
    },
    SpeechStarted {
        utterance_id: UtteranceId,
    },
    SpeechEnded {
        utterance_id: UtteranceId,
    },
    SpeechError {
        utterance_id: UtteranceId,
        reason: SpeechErrorReason,
    },
}

/// Session updates sent to the browser client, alongside speech commands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionMessage {
    State { state: SpeechState, volume: f32 },
    Notice(Notice),
}

/// Result of a translation task, fed back into the session loop
#[derive(Debug)]
pub struct TranslationDone {
    pub utterance: UtteranceId,
    pub outcome: Result<Translation, TranslationServiceError>,
}

/// One connected client: a workflow plus the plumbing around it.
///
/// All methods run on the session's own task, one message at a time.
pub struct AnnouncementSession {
    id: Uuid,
    workflow: AnnouncementWorkflow<BrowserSpeechOutput>,
    translator: Arc<dyn TranslationServiceApi>,
    messages: UnboundedSender<SessionMessage>,
    completions: UnboundedSender<TranslationDone>,
    in_flight: Option<JoinHandle<()>>,
}

impl AnnouncementSession {
    pub fn new(
        translator: Arc<dyn TranslationServiceApi>,
        speech: BrowserSpeechOutput,
        volume: f32,
        messages: UnboundedSender<SessionMessage>,
        completions: UnboundedSender<TranslationDone>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            workflow: AnnouncementWorkflow::new(speech, volume),
            translator,
            messages,
            completions,
            in_flight: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SpeechState {
        self.workflow.state()
    }

    pub fn handle_client_message(&mut self, message: ClientMessage) {
        match message {
            ClientMessage::Submit { text, language } => self.submit(&text, language.as_deref()),
            ClientMessage::Pause => {
                self.workflow.pause();
            }
            ClientMessage::Resume => {
                self.workflow.resume();
            }
            ClientMessage::Stop => {
                self.abort_in_flight();
                self.workflow.stop();
            }
            ClientMessage::SetVolume { volume } => {
                self.workflow.set_volume(volume);
            }
            ClientMessage::Voices { voices } => {
                self.workflow.speech_mut().update_voices(voices);
            }
            ClientMessage::SpeechStarted { utterance_id } => {
                self.speech_event(utterance_id, SpeechEvent::Started)
            }
            ClientMessage::SpeechEnded { utterance_id } => {
                self.speech_event(utterance_id, SpeechEvent::Ended)
            }
            ClientMessage::SpeechError {
                utterance_id,
                reason,
            } => self.speech_event(utterance_id, SpeechEvent::Error(reason)),
        }

        self.publish_state();
    }

    pub fn handle_translation_done(&mut self, done: TranslationDone) {
        match self.workflow.finish_translation(done.utterance, done.outcome) {
            Ok(request) => {
                self.in_flight = None;
                if let Ok(language) = request.lang.parse::<LanguageCode>() {
                    self.send(SessionMessage::Notice(Notice::speech_started(language)));
                }
            }
            Err(e) => self.report(&e),
        }

        self.publish_state();
    }

    /// Tell the client its message could not be understood
    pub fn reject_message(&self, error: &serde_json::Error) {
        tracing::warn!(session_id = %self.id, error = %error, "Invalid client message");
        self.send(SessionMessage::Notice(Notice::error(
            "Invalid message",
            error.to_string(),
        )));
    }

    pub fn publish_state(&self) {
        self.send(SessionMessage::State {
            state: self.workflow.state(),
            volume: self.workflow.volume(),
        });
    }

    /// Stop everything when the client goes away
    pub fn close(&mut self) {
        self.abort_in_flight();
        self.workflow.stop();
    }

    fn submit(&mut self, text: &str, language: Option<&str>) {
        let pending = match self.workflow.prepare_submission(text, language) {
            Ok(pending) => pending,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        self.abort_in_flight();

        let translator = self.translator.clone();
        let completions = self.completions.clone();
        let session_id = self.id;
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = translator
                .translate(&pending.request.source_text, pending.request.target_language)
                .await;
            let done = TranslationDone {
                utterance: pending.utterance,
                outcome,
            };
            if completions.send(done).is_err() {
                tracing::debug!(session_id = %session_id, "Session closed before translation finished");
            }
        }));
    }

    fn speech_event(&mut self, utterance: UtteranceId, event: SpeechEvent) {
        if let Err(e) = self.workflow.handle_speech_event(utterance, event) {
            self.report(&e);
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    fn report(&self, error: &WorkflowError) {
        if error.is_silent() {
            tracing::debug!(session_id = %self.id, error = %error, "Ignoring stale completion");
            return;
        }

        if let Some(notice) = Notice::for_error(error) {
            self.send(SessionMessage::Notice(notice));
        }
    }

    fn send(&self, message: SessionMessage) {
        if self.messages.send(message).is_err() {
            tracing::debug!(session_id = %self.id, "Session message dropped, client gone");
        }
    }
}

pub struct AnnouncementController {
    translation_service: Arc<dyn TranslationServiceApi>,
    default_volume: f32,
}

impl AnnouncementController {
    pub fn new(translation_service: Arc<dyn TranslationServiceApi>, default_volume: f32) -> Self {
        Self {
            translation_service,
            default_volume,
        }
    }

    /// GET /api/announcements/ws - Announcement session over WebSocket
    pub async fn connect(
        State(controller): State<Arc<AnnouncementController>>,
        ws: WebSocketUpgrade,
    ) -> Response {
        ws.on_upgrade(move |socket| run_session(controller, socket))
    }
}

async fn run_session(controller: Arc<AnnouncementController>, socket: WebSocket) {
    let (mut sink, mut stream) = socket.split();
    let (speech_tx, mut speech_rx) = mpsc::unbounded_channel::<SpeechCommand>();
    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<SessionMessage>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<TranslationDone>();

    let mut session = AnnouncementSession::new(
        controller.translation_service.clone(),
        BrowserSpeechOutput::new(speech_tx),
        controller.default_volume,
        message_tx,
        completion_tx,
    );
    let session_id = session.id();
    tracing::info!(session_id = %session_id, "Announcement session opened");

    // Speech commands go first so a client never sees a state it cannot act on yet
    let writer = tokio::spawn(async move {
        loop {
            let payload = tokio::select! {
                biased;
                Some(command) = speech_rx.recv() => serde_json::to_string(&command),
                Some(message) = message_rx.recv() => serde_json::to_string(&message),
                else => break,
            };

            match payload {
                Ok(text) => {
                    if sink.send(Message::Text(text)).await.is_err() {
                        break;
                    }
                }
                Err(e) => tracing::error!(error = %e, "Failed to serialize session message"),
            }
        }
    });

    session.publish_state();

    loop {
        tokio::select! {
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(message) => session.handle_client_message(message),
                    Err(e) => session.reject_message(&e),
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(session_id = %session_id, error = %e, "WebSocket error");
                    break;
                }
            },
            Some(done) = completion_rx.recv() => session.handle_translation_done(done),
        }
    }

    session.close();
    drop(session);

    if let Err(e) = writer.await {
        tracing::debug!(session_id = %session_id, error = %e, "Session writer ended abnormally");
    }
    tracing::info!(session_id = %session_id, "Announcement session closed");
}
