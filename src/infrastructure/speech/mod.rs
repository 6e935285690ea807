pub mod browser_speech_output;

pub use browser_speech_output::{BrowserSpeechOutput, SpeechCommand};
