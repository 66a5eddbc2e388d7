//! Synthesizer providers

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::error::TtsResult;
use crate::SpeechSynthesizer;

/// Prints spoken phrases to stdout; stands in for a real voice in the demo
/// binary.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSynthesizer;

impl ConsoleSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechSynthesizer for ConsoleSynthesizer {
    async fn speak(&mut self, text: &str) -> TtsResult<()> {
        info!(target: "tts", "Speaking: {}", text);
        println!("[voice] {text}");
        Ok(())
    }
}

/// Swallows all phrases.
#[derive(Debug, Clone, Default)]
pub struct NoOpSynthesizer;

impl NoOpSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechSynthesizer for NoOpSynthesizer {
    async fn speak(&mut self, _text: &str) -> TtsResult<()> {
        Ok(())
    }
}

/// Records spoken phrases so tests can assert on them.
///
/// Clones share the same transcript, so a test can keep one clone and hand
/// the other to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct RecordingSynthesizer {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.spoken.lock().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn speak(&mut self, text: &str) -> TtsResult<()> {
        self.spoken.lock().push(text.to_string());
        Ok(())
    }
}
