//! Types delivered by the vision collaborators

use serde::{Deserialize, Serialize};
use wayfinder_locate::BoundingBox;

/// One detected object with its location in the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    /// Detector confidence, 0.0-1.0.
    pub score: f32,
    pub bounding_box: BoundingBox,
}

impl Detection {
    pub fn new(label: impl Into<String>, score: f32, bounding_box: BoundingBox) -> Self {
        Self {
            label: label.into(),
            score,
            bounding_box,
        }
    }
}

/// One class probability from the image classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Class probability, 0.0-1.0.
    pub probability: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, probability: f32) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}
