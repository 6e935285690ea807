use serde::{Deserialize, Serialize};

/// Identifies one submission; completions carrying an older id are stale
pub type UtteranceId = u64;

/// A voice as reported by the platform speech engine.
///
/// Engines send more metadata (`default`, `localService`, `voiceURI`) than
/// voice ranking uses; the extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// Everything the speech engine needs to speak one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
    pub volume: f32,
    pub rate: f32,
    pub pitch: f32,
    /// Voice name, or None for the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

/// Error codes reported by the Web Speech API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeechErrorReason {
    Interrupted,
    Canceled,
    AudioBusy,
    AudioHardware,
    Network,
    SynthesisUnavailable,
    SynthesisFailed,
    LanguageUnavailable,
    VoiceUnavailable,
    TextTooLong,
    InvalidArgument,
    NotAllowed,
    #[serde(other)]
    Other,
}

impl SpeechErrorReason {
    /// Interruption happens whenever we cancel an utterance ourselves
    pub fn is_expected(&self) -> bool {
        matches!(self, SpeechErrorReason::Interrupted)
    }
}

impl std::fmt::Display for SpeechErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            SpeechErrorReason::Interrupted => "interrupted",
            SpeechErrorReason::Canceled => "canceled",
            SpeechErrorReason::AudioBusy => "audio-busy",
            SpeechErrorReason::AudioHardware => "audio-hardware",
            SpeechErrorReason::Network => "network",
            SpeechErrorReason::SynthesisUnavailable => "synthesis-unavailable",
            SpeechErrorReason::SynthesisFailed => "synthesis-failed",
            SpeechErrorReason::LanguageUnavailable => "language-unavailable",
            SpeechErrorReason::VoiceUnavailable => "voice-unavailable",
            SpeechErrorReason::TextTooLong => "text-too-long",
            SpeechErrorReason::InvalidArgument => "invalid-argument",
            SpeechErrorReason::NotAllowed => "not-allowed",
            SpeechErrorReason::Other => "other",
        };
        write!(f, "{}", reason)
    }
}

/// Lifecycle events emitted by the speech engine for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Ended,
    Error(SpeechErrorReason),
}

/// The platform speech engine.
///
/// The workflow is the only caller. Lifecycle events flow back through
/// `AnnouncementWorkflow::handle_speech_event`.
pub trait SpeechOutput: Send {
    /// Start speaking a new utterance
    fn speak(&mut self, utterance: UtteranceId, request: &SpeechRequest) -> Result<(), String>;

    /// Stop and discard the current utterance, paused or not
    fn cancel(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    fn set_volume(&mut self, utterance: UtteranceId, volume: f32);

    fn voices(&self) -> &[Voice];
}
