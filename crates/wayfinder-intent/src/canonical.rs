//! Canonicalization of spoken object phrases
//!
//! Speech recognition mangles short words ("key" often arrives as "ki"), so
//! a small alias table maps the known variants onto canonical identifiers.
//! Anything else must name one of the detector's vocabulary labels to count.

use crate::types::ObjectId;

/// Alias -> canonical id, covering the recognizer's usual mis-hearings.
const OBJECT_ALIASES: &[(&str, &str)] = &[
    ("home key", "room-key"),
    ("room key", "room-key"),
    ("home ki", "room-key"),
    ("room ki", "room-key"),
    ("bike key", "bike-key"),
    ("bike ki", "bike-key"),
];

/// Labels the object-detection model can actually report.
const DETECTOR_VOCABULARY: &[&str] = &["person", "bottle", "cell phone", "laptop", "mouse"];

/// Leading filler words stripped before lookup.
const ARTICLES: &[&str] = &["the ", "a ", "my "];

/// Map a captured object phrase to its canonical identifier.
///
/// Returns `None` for phrases naming nothing the system can search for;
/// the interpreter treats that as no intent.
pub fn canonicalize(phrase: &str) -> Option<ObjectId> {
    let mut phrase = phrase.trim().to_lowercase();
    for article in ARTICLES {
        if let Some(rest) = phrase.strip_prefix(article) {
            phrase = rest.trim_start().to_string();
            break;
        }
    }

    for (alias, id) in OBJECT_ALIASES {
        if phrase == *alias {
            return Some(ObjectId::from(*id));
        }
    }

    for label in DETECTOR_VOCABULARY {
        if phrase.contains(label) {
            return Some(ObjectId::from(*label));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_canonical_ids() {
        assert_eq!(canonicalize("room key"), Some(ObjectId::from("room-key")));
        assert_eq!(canonicalize("home ki"), Some(ObjectId::from("room-key")));
        assert_eq!(canonicalize("bike ki"), Some(ObjectId::from("bike-key")));
    }

    #[test]
    fn leading_article_is_stripped() {
        assert_eq!(
            canonicalize("the room key"),
            Some(ObjectId::from("room-key"))
        );
        assert_eq!(canonicalize("my bike key"), Some(ObjectId::from("bike-key")));
    }

    #[test]
    fn detector_vocabulary_passes_through() {
        assert_eq!(canonicalize("a bottle"), Some(ObjectId::from("bottle")));
        assert_eq!(
            canonicalize("the cell phone over there"),
            Some(ObjectId::from("cell phone"))
        );
    }

    #[test]
    fn case_is_normalized() {
        assert_eq!(canonicalize("Room Key"), Some(ObjectId::from("room-key")));
        assert_eq!(canonicalize("LAPTOP"), Some(ObjectId::from("laptop")));
    }

    #[test]
    fn unknown_phrases_yield_none() {
        assert_eq!(canonicalize("my wallet"), None);
        assert_eq!(canonicalize(""), None);
        assert_eq!(canonicalize("   "), None);
    }
}
