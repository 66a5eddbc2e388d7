//! Error types for speech recognition

use thiserror::Error;

/// Speech recognition error types
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// Provider is not available on this system
    #[error("Recognizer not available: {0}")]
    NotAvailable(String),

    /// Provider failed mid-cycle
    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error (audio device, provider transport, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
