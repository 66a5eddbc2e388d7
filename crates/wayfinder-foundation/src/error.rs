use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech recognition error: {0}")]
    Stt(String),

    #[error("Speech synthesis error: {0}")]
    Tts(String),

    #[error("Vision provider error: {0}")]
    Vision(String),

    #[error("Shutdown requested")]
    ShutdownRequested,

    #[error("Fatal error, cannot recover: {0}")]
    Fatal(String),
}
