//! Scripted recognizer for testing and demos

use std::collections::VecDeque;

use async_trait::async_trait;
use tracing::debug;

use crate::error::RecognitionError;
use crate::types::RecognitionEvent;
use crate::{next_cycle_id, SpeechRecognizer};

/// A recognizer that replays a fixed list of utterances, one per cycle,
/// then reports end of input.
///
/// `None` entries model recognition cycles where the user said nothing
/// actionable (the common case on real hardware).
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    utterances: VecDeque<Option<String>>,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script where every cycle hears something.
    pub fn with_utterances<I, S>(utterances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            utterances: utterances.into_iter().map(|u| Some(u.into())).collect(),
        }
    }

    /// Script with explicit silent cycles.
    pub fn with_cycles(cycles: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            utterances: cycles.into_iter().collect(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn next_utterance(&mut self) -> Result<Option<RecognitionEvent>, RecognitionError> {
        match self.utterances.pop_front() {
            Some(Some(text)) => {
                let cycle_id = next_cycle_id();
                debug!(target: "stt", "Scripted utterance (cycle {}): {:?}", cycle_id, text);
                Ok(Some(RecognitionEvent::Utterance { cycle_id, text }))
            }
            // A silent cycle still consumes a cycle id, like a real
            // recognizer restarting after hearing nothing.
            Some(None) => {
                let cycle_id = next_cycle_id();
                Ok(Some(RecognitionEvent::Utterance {
                    cycle_id,
                    text: String::new(),
                }))
            }
            None => Ok(None),
        }
    }
}
