//! Core types for speech recognition

use std::time::Duration;

/// Recognition event types
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// A finalized utterance for one recognition cycle
    Utterance {
        cycle_id: u64,
        text: String,
    },
    /// Recognition error reported by the provider
    Error { code: String, message: String },
}

/// Recognition configuration
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Enable/disable recognition
    pub enabled: bool,
    /// Recognition language tag
    pub language: String,
    /// Pause between recognition cycles before the recognizer restarts
    pub restart_delay: Duration,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "en-US".to_string(),
            // The provider needs a beat between cycles; restarting
            // immediately makes it miss the start of the next phrase.
            restart_delay: Duration::from_millis(1200),
        }
    }
}
