//! Vision collaborator boundary for Wayfinder
//!
//! The actual models (an image classifier and an object detector) are
//! external services; this crate defines the types they deliver, the traits
//! the pipeline drives them through, and the selection logic applied to
//! their output. Scripted providers are included for tests and demos.

use async_trait::async_trait;

pub mod classify;
pub mod error;
pub mod providers;
pub mod types;

pub use classify::{confident_label, top_classification, MIN_CLASSIFICATION_PROBABILITY};
pub use error::VisionError;
pub use providers::{ScriptedClassifier, ScriptedDetector};
pub use types::{Classification, Detection};

/// Minimum detection score the detector collaborator is configured with.
pub const DETECTOR_SCORE_THRESHOLD: f32 = 0.5;

/// Object-detection interface: one capture per call, detections for the
/// whole frame.
#[async_trait]
pub trait ObjectDetector: Send {
    async fn detect(&mut self) -> Result<Vec<Detection>, VisionError>;
}

/// Image-classification interface: one capture per call, per-class
/// probabilities for the whole frame.
#[async_trait]
pub trait ImageClassifier: Send {
    async fn classify(&mut self) -> Result<Vec<Classification>, VisionError>;
}
