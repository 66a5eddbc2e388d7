//! Region mapping tests
//!
//! Boundary behavior matters here: the 25%/75% thresholds are inclusive, so
//! centers landing exactly on a quarter line belong to the outer band.

use wayfinder_locate::{locate, BoundingBox, FrameSize, HorizontalBand, VerticalBand};

const FRAME: FrameSize = FrameSize {
    width: 640.0,
    height: 480.0,
};

fn region(origin_x: f32, origin_y: f32, width: f32, height: f32) -> String {
    locate(BoundingBox::new(origin_x, origin_y, width, height), FRAME).to_string()
}

#[test]
fn small_box_at_origin_is_top_left() {
    assert_eq!(region(0.0, 0.0, 10.0, 10.0), "top left");
}

#[test]
fn exact_frame_midpoint_is_middle_center() {
    // Center at (320, 240).
    assert_eq!(region(280.0, 200.0, 80.0, 80.0), "middle center");
}

#[test]
fn all_nine_regions_reachable() {
    // Zero-size boxes placed directly at representative centers.
    let cases = [
        (50.0, 50.0, "top left"),
        (320.0, 50.0, "top center"),
        (600.0, 50.0, "top right"),
        (50.0, 240.0, "middle left"),
        (320.0, 240.0, "middle center"),
        (600.0, 240.0, "middle right"),
        (50.0, 450.0, "lower left"),
        (320.0, 450.0, "lower center"),
        (600.0, 450.0, "lower right"),
    ];
    for (x, y, expected) in cases {
        assert_eq!(region(x, y, 0.0, 0.0), expected, "center ({x}, {y})");
    }
}

#[test]
fn vertical_thresholds_are_inclusive() {
    // 25% of 480 = 120, 75% of 480 = 360.
    let top = locate(BoundingBox::new(320.0, 120.0, 0.0, 0.0), FRAME);
    assert_eq!(top.vertical, VerticalBand::Top);

    let just_below = locate(BoundingBox::new(320.0, 120.1, 0.0, 0.0), FRAME);
    assert_eq!(just_below.vertical, VerticalBand::Middle);

    let lower = locate(BoundingBox::new(320.0, 360.0, 0.0, 0.0), FRAME);
    assert_eq!(lower.vertical, VerticalBand::Lower);

    let just_above = locate(BoundingBox::new(320.0, 359.9, 0.0, 0.0), FRAME);
    assert_eq!(just_above.vertical, VerticalBand::Middle);
}

#[test]
fn horizontal_thresholds_are_inclusive() {
    // 25% of 640 = 160, 75% of 640 = 480.
    let left = locate(BoundingBox::new(160.0, 240.0, 0.0, 0.0), FRAME);
    assert_eq!(left.horizontal, HorizontalBand::Left);

    let just_right = locate(BoundingBox::new(160.1, 240.0, 0.0, 0.0), FRAME);
    assert_eq!(just_right.horizontal, HorizontalBand::Center);

    let right = locate(BoundingBox::new(480.0, 240.0, 0.0, 0.0), FRAME);
    assert_eq!(right.horizontal, HorizontalBand::Right);

    let just_left = locate(BoundingBox::new(479.9, 240.0, 0.0, 0.0), FRAME);
    assert_eq!(just_left.horizontal, HorizontalBand::Center);
}

#[test]
fn degenerate_box_still_maps() {
    assert_eq!(region(0.0, 0.0, 0.0, 0.0), "top left");
}

#[test]
fn box_larger_than_frame_uses_center() {
    // Oversized box centered on the frame midpoint.
    assert_eq!(region(-320.0, -240.0, 1280.0, 960.0), "middle center");
}

#[test]
fn non_default_frame_dimensions() {
    let frame = FrameSize::new(1280.0, 720.0);
    let label = locate(BoundingBox::new(0.0, 0.0, 100.0, 100.0), frame);
    assert_eq!(label.to_string(), "top left");
    let label = locate(BoundingBox::new(1200.0, 650.0, 60.0, 60.0), frame);
    assert_eq!(label.to_string(), "lower right");
}
