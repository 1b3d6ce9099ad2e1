//! Error types for lernapp

use std::io;
use thiserror::Error;

/// Main error type for lernapp
#[derive(Error, Debug)]
pub enum LernappError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("No speech engine is available on this system")]
    SpeechUnavailable,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for lernapp operations
pub type Result<T> = std::result::Result<T, LernappError>;

impl From<serde_json::Error> for LernappError {
    fn from(e: serde_json::Error) -> Self {
        LernappError::Settings(format!("JSON error: {}", e))
    }
}
