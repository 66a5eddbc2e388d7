//! Scripted vision providers for tests and demos
//!
//! Each call pops the next scripted frame result; once the script runs out
//! the provider keeps returning empty results, like a camera pointed at
//! nothing interesting.

use std::collections::VecDeque;

use async_trait::async_trait;
use tracing::debug;

use crate::error::VisionError;
use crate::types::{Classification, Detection};
use crate::{ImageClassifier, ObjectDetector};

/// Object detector replaying a fixed script of frame results.
#[derive(Debug, Default)]
pub struct ScriptedDetector {
    frames: VecDeque<Vec<Detection>>,
}

impl ScriptedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(frames: impl IntoIterator<Item = Vec<Detection>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push_frame(&mut self, detections: Vec<Detection>) {
        self.frames.push_back(detections);
    }
}

#[async_trait]
impl ObjectDetector for ScriptedDetector {
    async fn detect(&mut self) -> Result<Vec<Detection>, VisionError> {
        let detections = self.frames.pop_front().unwrap_or_default();
        debug!(target: "vision", "Scripted detector frame: {} detections", detections.len());
        Ok(detections)
    }
}

/// Image classifier replaying a fixed script of frame results.
#[derive(Debug, Default)]
pub struct ScriptedClassifier {
    frames: VecDeque<Vec<Classification>>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(frames: impl IntoIterator<Item = Vec<Classification>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push_frame(&mut self, classifications: Vec<Classification>) {
        self.frames.push_back(classifications);
    }
}

#[async_trait]
impl ImageClassifier for ScriptedClassifier {
    async fn classify(&mut self) -> Result<Vec<Classification>, VisionError> {
        let classifications = self.frames.pop_front().unwrap_or_default();
        debug!(
            target: "vision",
            "Scripted classifier frame: {} classes", classifications.len()
        );
        Ok(classifications)
    }
}
