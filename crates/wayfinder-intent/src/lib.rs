//! Voice-command interpretation for Wayfinder
//!
//! This crate turns a raw transcribed utterance into a normalized intent:
//! navigate to a feature, find an object, or nothing actionable. Matching is
//! driven by an ordered table of regex patterns so the command vocabulary
//! stays data, not logic. Absence of a match is the normal outcome on most
//! recognition cycles and is never an error.

pub mod canonical;
pub mod interpreter;
pub mod patterns;
pub mod types;

pub use canonical::canonicalize;
pub use interpreter::Interpreter;
pub use patterns::{default_patterns, CommandPattern, PatternAction};
pub use types::{FeatureId, Intent, ObjectId};
