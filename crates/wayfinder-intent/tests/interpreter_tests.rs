//! Command interpreter tests
//!
//! Covers:
//! - Find commands with canonicalization
//! - Navigate commands including recognizer homophones
//! - First-match-wins precedence over the pattern table
//! - Absent/empty/unmatched utterances producing no intent

use wayfinder_intent::{
    CommandPattern, FeatureId, Intent, Interpreter, ObjectId, PatternAction,
};

fn interpret(text: &str) -> Option<Intent> {
    Interpreter::new().interpret(Some(text))
}

#[test]
fn find_room_key_canonicalizes() {
    assert_eq!(
        interpret("can you find the room key"),
        Some(Intent::FindObject(ObjectId::from("room-key")))
    );
}

#[test]
fn find_variants_all_work() {
    for utterance in [
        "find the bike key",
        "search for the bike key",
        "look for bike ki",
        "can you locate my bike key",
    ] {
        assert_eq!(
            interpret(utterance),
            Some(Intent::FindObject(ObjectId::from("bike-key"))),
            "utterance: {utterance}"
        );
    }
}

#[test]
fn find_detector_vocabulary() {
    assert_eq!(
        interpret("can you identify the bottle"),
        Some(Intent::FindObject(ObjectId::from("bottle")))
    );
    assert_eq!(
        interpret("find the cell phone"),
        Some(Intent::FindObject(ObjectId::from("cell phone")))
    );
}

#[test]
fn navigate_feature_two() {
    assert_eq!(
        interpret("feature two please"),
        Some(Intent::NavigateTo(FeatureId(2)))
    );
}

#[test]
fn navigate_feature_one_digit() {
    assert_eq!(
        interpret("go to feature 1"),
        Some(Intent::NavigateTo(FeatureId(1)))
    );
}

#[test]
fn navigate_homophones() {
    for utterance in ["future two", "feature to", "future to", "feature 2"] {
        assert_eq!(
            interpret(utterance),
            Some(Intent::NavigateTo(FeatureId(2))),
            "utterance: {utterance}"
        );
    }
    for utterance in ["future one", "feature one now", "future 1"] {
        assert_eq!(
            interpret(utterance),
            Some(Intent::NavigateTo(FeatureId(1))),
            "utterance: {utterance}"
        );
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(
        interpret("FIND THE BOTTLE"),
        Some(Intent::FindObject(ObjectId::from("bottle")))
    );
    assert_eq!(
        interpret("Feature Two"),
        Some(Intent::NavigateTo(FeatureId(2)))
    );
}

#[test]
fn absent_or_empty_utterance_is_no_intent() {
    let interpreter = Interpreter::new();
    assert_eq!(interpreter.interpret(None), None);
    assert_eq!(interpreter.interpret(Some("")), None);
    assert_eq!(interpreter.interpret(Some("   ")), None);
}

#[test]
fn unmatched_utterances_are_no_intent() {
    for utterance in [
        "hello there",
        "what time is it",
        "featureless plain",
        "I bought a new phone case yesterday",
    ] {
        assert_eq!(interpret(utterance), None, "utterance: {utterance}");
    }
}

#[test]
fn unknown_find_object_is_no_intent() {
    assert_eq!(interpret("find my wallet"), None);
    assert_eq!(interpret("search for the television"), None);
}

#[test]
fn first_listed_pattern_wins() {
    // Both patterns match "find the bottle"; the navigate entry is listed
    // first so it must decide the outcome.
    let interpreter = Interpreter::with_patterns(vec![
        CommandPattern::new(r".*find.*", PatternAction::Navigate(FeatureId(1))),
        CommandPattern::new(r".*find (.*)", PatternAction::Find),
    ]);
    assert_eq!(
        interpreter.interpret(Some("find the bottle")),
        Some(Intent::NavigateTo(FeatureId(1)))
    );

    // Reversed order, reversed outcome.
    let interpreter = Interpreter::with_patterns(vec![
        CommandPattern::new(r".*find (.*)", PatternAction::Find),
        CommandPattern::new(r".*find.*", PatternAction::Navigate(FeatureId(1))),
    ]);
    assert_eq!(
        interpreter.interpret(Some("find the bottle")),
        Some(Intent::FindObject(ObjectId::from("bottle")))
    );
}

#[test]
fn invalid_patterns_are_skipped() {
    let interpreter = Interpreter::with_patterns(vec![
        CommandPattern::new(r".*(unclosed", PatternAction::Find),
        CommandPattern::new(r".*find (.*)", PatternAction::Find),
    ]);
    assert_eq!(
        interpreter.interpret(Some("find the bottle")),
        Some(Intent::FindObject(ObjectId::from("bottle")))
    );
}
