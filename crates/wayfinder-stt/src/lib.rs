//! Speech-to-text collaborator boundary for Wayfinder
//!
//! The actual recognizer is an external service (a browser speech API, a
//! local engine, a test script); this crate defines the events it delivers,
//! its configuration, and the trait the pipeline drives it through. One
//! recognition cycle yields at most one finalized utterance.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod error;
pub mod providers;
pub mod types;

pub use error::RecognitionError;
pub use providers::{NoOpRecognizer, ScriptedRecognizer};
pub use types::{RecognitionConfig, RecognitionEvent};

/// Generates unique recognition cycle IDs
static CYCLE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique recognition cycle ID
pub fn next_cycle_id() -> u64 {
    CYCLE_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Speech recognition interface
///
/// Implementations deliver one event per completed recognition cycle.
/// `Ok(None)` means the recognizer has nothing more to deliver and the
/// caller should stop polling.
#[async_trait]
pub trait SpeechRecognizer: Send {
    async fn next_utterance(&mut self) -> Result<Option<RecognitionEvent>, RecognitionError>;
}
