//! Selection logic over classifier output

use crate::types::Classification;

/// A top class must beat this probability before it counts as a sighting.
pub const MIN_CLASSIFICATION_PROBABILITY: f32 = 0.80;

/// Highest-probability class, or `None` for an empty result set.
///
/// Ties keep the earlier entry, matching the classifier's own ordering.
pub fn top_classification(classifications: &[Classification]) -> Option<&Classification> {
    let mut best = classifications.first()?;
    for candidate in &classifications[1..] {
        if candidate.probability > best.probability {
            best = candidate;
        }
    }
    Some(best)
}

/// Label of the top class, but only when its probability strictly exceeds
/// `min_probability`. Low-confidence frames report nothing.
pub fn confident_label(
    classifications: &[Classification],
    min_probability: f32,
) -> Option<&str> {
    let top = top_classification(classifications)?;
    (top.probability > min_probability).then(|| top.label.as_str())
}
