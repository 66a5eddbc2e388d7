//! Ordered command-pattern table
//!
//! The interpreter evaluates these in listed order, first match wins. The
//! navigate patterns deliberately include speech-recognition homophones
//! ("future" for "feature", "to"/"two"/"2"), which is why they are kept as
//! separate entries rather than collapsed into one alternation: order is the
//! precedence rule.

use crate::types::FeatureId;

/// What a matched pattern produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternAction {
    /// Matching this pattern navigates to the given feature.
    Navigate(FeatureId),
    /// Matching this pattern starts an object search; capture group 1 holds
    /// the spoken object phrase, which still has to canonicalize.
    Find,
}

/// One entry of the command table: a regex source plus its action.
#[derive(Debug, Clone)]
pub struct CommandPattern {
    pub pattern: String,
    pub action: PatternAction,
}

impl CommandPattern {
    pub fn new(pattern: impl Into<String>, action: PatternAction) -> Self {
        Self {
            pattern: pattern.into(),
            action,
        }
    }
}

/// The built-in command vocabulary.
///
/// Navigate entries come before find entries so that routing commands are
/// never swallowed by a loose find template.
pub fn default_patterns() -> Vec<CommandPattern> {
    let nav1 = PatternAction::Navigate(FeatureId(1));
    let nav2 = PatternAction::Navigate(FeatureId(2));
    vec![
        CommandPattern::new(r".*feature (one).*", nav1),
        CommandPattern::new(r".*future (one).*", nav1),
        CommandPattern::new(r".*feature (1).*", nav1),
        CommandPattern::new(r".*future (1).*", nav1),
        CommandPattern::new(r".*feature (two).*", nav2),
        CommandPattern::new(r".*future (two).*", nav2),
        CommandPattern::new(r".*feature (to).*", nav2),
        CommandPattern::new(r".*future (to).*", nav2),
        CommandPattern::new(r".*feature (2).*", nav2),
        CommandPattern::new(r".*future (2).*", nav2),
        CommandPattern::new(r".*can you find (.*)", PatternAction::Find),
        CommandPattern::new(r".*can you locate (.*)", PatternAction::Find),
        CommandPattern::new(r".*can you identify (.*)", PatternAction::Find),
        CommandPattern::new(r".*find (.*)", PatternAction::Find),
        CommandPattern::new(r".*search for (.*)", PatternAction::Find),
        CommandPattern::new(r".*look for (.*)", PatternAction::Find),
    ]
}
