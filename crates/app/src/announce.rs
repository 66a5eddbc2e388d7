//! Spoken phrases, kept in one place
//!
//! Object identifiers are spoken in their display form ("room key", not
//! "room-key").

use wayfinder_intent::ObjectId;
use wayfinder_locate::RegionLabel;

pub const READY: &str = "Vision is now ready!";
pub const SELECT_FEATURE: &str = "Select the feature to apply.";

/// Acknowledgement spoken when a search starts.
pub fn searching(object: &ObjectId) -> String {
    format!(
        "Searching for {}, keep roaming around",
        object.display_name()
    )
}

/// Spoken when the classifier confirms the sought object is in view.
pub fn found(object: &ObjectId) -> String {
    format!("Found {}", object.display_name())
}

/// Spoken per matching detection, with its coarse on-screen region.
pub fn located(object: &ObjectId, region: RegionLabel) -> String {
    format!("a {} in {}", object.display_name(), region)
}
