//! Error types for the vision boundary

use thiserror::Error;

/// Vision collaborator error types
#[derive(Error, Debug)]
pub enum VisionError {
    /// The provider failed to run inference
    #[error("Vision provider error: {0}")]
    Provider(String),

    /// No frame was available to run inference on
    #[error("No camera frame available")]
    NoFrame,

    /// Provider is not initialized or its model is not loaded
    #[error("Vision provider not ready: {0}")]
    NotReady(String),

    /// IO error (frame transfer, model files, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
