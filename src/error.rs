//! Error types for TTSC

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for TTSC
///
/// Every user-visible failure maps to a variant here; the UI shell prints
/// the Display text as the notification and carries on.
#[derive(Error, Debug)]
pub enum TtscError {
    #[error("Please enter some text to speak.")]
    NothingToSpeak,

    #[error("Please enter some text to save.")]
    NothingToSave,

    #[error("MP3 export support is not compiled into this build.\nRebuild with: cargo build --features cloud")]
    CloudMissing,

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Failed to save audio: {0}")]
    Export(String),

    #[error("No saved audio file found. Please save audio first.")]
    NoSavedAudio,

    #[error("Saved audio file no longer exists: {}", .0.display())]
    AudioFileMissing(PathBuf),

    #[error("Failed to open audio file: {0}")]
    Launch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for TTSC operations
pub type Result<T> = std::result::Result<T, TtscError>;

impl From<String> for TtscError {
    fn from(s: String) -> Self {
        TtscError::Other(s)
    }
}

impl From<&str> for TtscError {
    fn from(s: &str) -> Self {
        TtscError::Other(s.to_string())
    }
}
