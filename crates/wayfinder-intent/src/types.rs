//! Core types for voice-command interpretation

use std::fmt;

/// Identifier of a navigable feature page.
///
/// Two features exist today: 1 (image classifier) and 2 (object detector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId(pub u8);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature-{}", self.0)
    }
}

/// Canonical identifier for a findable object (e.g. `room-key`, `bottle`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Speech-friendly form of the identifier ("room-key" -> "room key").
    pub fn display_name(&self) -> String {
        self.0.replace('-', " ")
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized action derived from one utterance.
///
/// The absent case is represented as `None` at the `interpret` API surface;
/// no variant exists for it here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Switch to the named feature page.
    NavigateTo(FeatureId),
    /// Start searching the camera feed for the named object.
    FindObject(ObjectId),
}
