//! Recognizer providers

pub mod noop;
pub mod scripted;

pub use noop::NoOpRecognizer;
pub use scripted::ScriptedRecognizer;
