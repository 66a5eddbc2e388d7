//! No-operation recognizer for testing and fallback

use async_trait::async_trait;

use crate::error::RecognitionError;
use crate::types::RecognitionEvent;
use crate::SpeechRecognizer;

/// A recognizer that never hears anything.
/// Useful for running the pipeline without any speech dependencies.
#[derive(Debug, Clone, Default)]
pub struct NoOpRecognizer;

impl NoOpRecognizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechRecognizer for NoOpRecognizer {
    async fn next_utterance(&mut self) -> Result<Option<RecognitionEvent>, RecognitionError> {
        Ok(None)
    }
}
