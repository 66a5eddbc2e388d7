//! Wayfinder application pipeline
//!
//! Wires the collaborator boundaries (speech recognition, speech synthesis,
//! vision) to the command interpreter and spatial locator: transcribed text
//! comes in, intents are extracted, captures are triggered while a search is
//! active, and results are spoken back.

pub mod announce;
pub mod config;
pub mod pipeline;
pub mod runtime;

pub use config::AppConfig;
pub use pipeline::{FeatureMode, Pipeline, PipelineOptions};
