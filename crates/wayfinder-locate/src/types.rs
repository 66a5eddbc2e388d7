//! Geometry and region types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding box in frame pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Geometric center of the box. A zero-size box centers on its origin.
    pub fn center(&self) -> (f32, f32) {
        (
            self.origin_x + self.width / 2.0,
            self.origin_y + self.height / 2.0,
        )
    }
}

/// Dimensions of the camera frame the boxes live in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl FrameSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        // Standard VGA capture resolution used by the camera collaborator.
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Vertical third of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalBand {
    Top,
    Middle,
    Lower,
}

impl VerticalBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalBand::Top => "top",
            VerticalBand::Middle => "middle",
            VerticalBand::Lower => "lower",
        }
    }
}

/// Horizontal third of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalBand {
    Left,
    Center,
    Right,
}

impl HorizontalBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalBand::Left => "left",
            HorizontalBand::Center => "center",
            HorizontalBand::Right => "right",
        }
    }
}

/// One of the nine coarse regions, e.g. "top left" or "middle center".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionLabel {
    pub vertical: VerticalBand,
    pub horizontal: HorizontalBand,
}

impl RegionLabel {
    pub fn new(vertical: VerticalBand, horizontal: HorizontalBand) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertical.as_str(), self.horizontal.as_str())
    }
}
