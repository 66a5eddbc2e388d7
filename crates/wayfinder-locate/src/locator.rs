//! Box-center to region mapping

use crate::types::{BoundingBox, FrameSize, HorizontalBand, RegionLabel, VerticalBand};

/// Map a bounding box to the coarse region its center falls in.
///
/// The 25% and 75% thresholds are inclusive: a center sitting exactly on the
/// quarter line is reported as the outer band.
pub fn locate(bounding_box: BoundingBox, frame: FrameSize) -> RegionLabel {
    let (center_x, center_y) = bounding_box.center();

    let vertical = if center_y <= frame.height * 0.25 {
        VerticalBand::Top
    } else if center_y >= frame.height * 0.75 {
        VerticalBand::Lower
    } else {
        VerticalBand::Middle
    };

    let horizontal = if center_x <= frame.width * 0.25 {
        HorizontalBand::Left
    } else if center_x >= frame.width * 0.75 {
        HorizontalBand::Right
    } else {
        HorizontalBand::Center
    };

    RegionLabel::new(vertical, horizontal)
}
