use crate::domain::announcement::{SpeechOutput, SpeechRequest, UtteranceId, Voice};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

/// Commands the browser client executes against `window.speechSynthesis`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpeechCommand {
    Speak {
        utterance_id: UtteranceId,
        request: SpeechRequest,
    },
    Pause,
    Resume,
    Cancel,
    SetVolume {
        utterance_id: UtteranceId,
        volume: f32,
    },
}

/// Speech output backed by the speech engine of a connected browser.
///
/// Commands are queued on a channel that the session's socket writer drains.
/// The browser reports its voice list and lifecycle events back through the
/// session.
pub struct BrowserSpeechOutput {
    commands: UnboundedSender<SpeechCommand>,
    voices: Vec<Voice>,
}

impl BrowserSpeechOutput {
    pub fn new(commands: UnboundedSender<SpeechCommand>) -> Self {
        Self {
            commands,
            voices: Vec::new(),
        }
    }

    /// Browsers load voices lazily and may report them more than once
    pub fn update_voices(&mut self, voices: Vec<Voice>) {
        tracing::debug!(voice_count = voices.len(), "Browser voices updated");
        self.voices = voices;
    }

    fn send(&self, command: SpeechCommand) -> Result<(), String> {
        self.commands
            .send(command)
            .map_err(|_| "speech client disconnected".to_string())
    }
}

impl SpeechOutput for BrowserSpeechOutput {
    fn speak(&mut self, utterance: UtteranceId, request: &SpeechRequest) -> Result<(), String> {
        self.send(SpeechCommand::Speak {
            utterance_id: utterance,
            request: request.clone(),
        })
    }

    fn cancel(&mut self) {
        if let Err(e) = self.send(SpeechCommand::Cancel) {
            tracing::debug!(error = %e, "Cancel not delivered");
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.send(SpeechCommand::Pause) {
            tracing::debug!(error = %e, "Pause not delivered");
        }
    }

    fn resume(&mut self) {
        if let Err(e) = self.send(SpeechCommand::Resume) {
            tracing::debug!(error = %e, "Resume not delivered");
        }
    }

    fn set_volume(&mut self, utterance: UtteranceId, volume: f32) {
        if let Err(e) = self.send(SpeechCommand::SetVolume {
            utterance_id: utterance,
            volume,
        }) {
            tracing::debug!(error = %e, "Volume change not delivered");
        }
    }

    fn voices(&self) -> &[Voice] {
        &self.voices
    }
}
