//! Foundation integration tests

use wayfinder_foundation::{AppError, SearchSession};
use wayfinder_intent::ObjectId;

#[test]
fn error_messages_are_descriptive() {
    let err = AppError::Config("missing feature table".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing feature table");

    let err = AppError::Vision("model not loaded".to_string());
    assert_eq!(err.to_string(), "Vision provider error: model not loaded");
}

#[test]
fn search_handoff_between_writer_and_reader() {
    // Recognizer-side writer, detection-side reader.
    let writer = SearchSession::new();
    let reader = writer.clone();

    writer.start_search(ObjectId::from("bottle"));
    assert_eq!(reader.sought(), Some(ObjectId::from("bottle")));

    // Detection handler completes the search; writer observes the clear.
    assert!(reader.complete_if_found("bottle"));
    assert!(!writer.is_searching());
}

#[test]
fn cancel_is_idempotent() {
    let session = SearchSession::new();
    session.cancel();
    session.start_search(ObjectId::from("laptop"));
    session.cancel();
    session.cancel();
    assert!(!session.is_searching());
}
