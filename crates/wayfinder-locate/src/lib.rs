//! Spatial position reporting for Wayfinder
//!
//! Maps a detection's bounding box onto one of nine coarse on-screen regions
//! ({top, middle, lower} x {left, center, right}) so the position can be
//! spoken to the user. Pure geometry, no failure modes: any finite box in
//! any frame yields a valid region.

pub mod locator;
pub mod types;

pub use locator::locate;
pub use types::{BoundingBox, FrameSize, HorizontalBand, RegionLabel, VerticalBand};
