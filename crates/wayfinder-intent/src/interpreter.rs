//! Utterance-to-intent interpreter

use regex::RegexBuilder;
use tracing::{debug, warn};

use crate::canonical::canonicalize;
use crate::patterns::{default_patterns, CommandPattern, PatternAction};
use crate::types::Intent;

struct CompiledPattern {
    regex: regex::Regex,
    action: PatternAction,
}

/// Interprets finalized utterances against an ordered command table.
///
/// Stateless across calls; one interpreter can serve every recognition
/// cycle of a session.
pub struct Interpreter {
    patterns: Vec<CompiledPattern>,
}

impl Interpreter {
    /// Interpreter over the built-in command vocabulary.
    pub fn new() -> Self {
        Self::with_patterns(default_patterns())
    }

    /// Interpreter over a caller-supplied command table.
    ///
    /// Entries that fail to compile are skipped with a warning rather than
    /// failing construction, matching how the rest of the pipeline treats
    /// bad input as a non-event.
    pub fn with_patterns(patterns: Vec<CommandPattern>) -> Self {
        let patterns = patterns
            .into_iter()
            .filter_map(|entry| {
                match RegexBuilder::new(&entry.pattern)
                    .case_insensitive(true)
                    .build()
                {
                    Ok(regex) => Some(CompiledPattern {
                        regex,
                        action: entry.action,
                    }),
                    Err(e) => {
                        warn!(
                            target: "intent",
                            "Invalid command pattern '{}': {}, skipping",
                            entry.pattern, e
                        );
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Interpret one utterance.
    ///
    /// Returns `None` for absent/empty utterances, for utterances matching
    /// no pattern, and for find commands naming an unknown object. The first
    /// pattern whose capture matches decides the outcome; later patterns are
    /// not consulted.
    pub fn interpret(&self, utterance: Option<&str>) -> Option<Intent> {
        let text = utterance?.trim();
        if text.is_empty() {
            return None;
        }

        for pattern in &self.patterns {
            let Some(captures) = pattern.regex.captures(text) else {
                continue;
            };
            match pattern.action {
                PatternAction::Navigate(feature) => {
                    debug!(target: "intent", "Navigate command matched: {}", feature);
                    return Some(Intent::NavigateTo(feature));
                }
                PatternAction::Find => {
                    let phrase = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
                    let intent = canonicalize(phrase).map(Intent::FindObject);
                    if intent.is_none() {
                        debug!(
                            target: "intent",
                            "Find command matched but object phrase '{}' is unknown", phrase
                        );
                    }
                    return intent;
                }
            }
        }

        None
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
