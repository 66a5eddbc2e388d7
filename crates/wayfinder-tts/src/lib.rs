//! Text-to-speech collaborator boundary for Wayfinder
//!
//! Speech output is fire-and-forget: the pipeline hands a phrase to the
//! synthesizer and moves on. The real voice lives in an external service;
//! this crate defines the trait plus console/no-op/recording providers.

use async_trait::async_trait;

pub mod error;
pub mod providers;

pub use error::{TtsError, TtsResult};
pub use providers::{ConsoleSynthesizer, NoOpSynthesizer, RecordingSynthesizer};

/// Text-to-speech synthesis interface
#[async_trait]
pub trait SpeechSynthesizer: Send {
    /// Speak the given phrase. Fire and forget; no audio handle is returned.
    async fn speak(&mut self, text: &str) -> TtsResult<()>;
}
