//! Session state
//!
//! Everything here is transient: it lives for the window's lifetime and is
//! gone when the process exits. The last-saved path in particular is never
//! persisted anywhere.

use std::path::PathBuf;

/// Slowest accepted speech rate, words per minute
pub const MIN_RATE: u16 = 50;
/// Fastest accepted speech rate, words per minute
pub const MAX_RATE: u16 = 300;
/// Default speech rate, words per minute
pub const DEFAULT_RATE: u16 = 150;

/// Clamp a requested rate into the accepted range
pub fn clamp_rate(requested: i64) -> u16 {
    requested.clamp(i64::from(MIN_RATE), i64::from(MAX_RATE)) as u16
}

/// In-memory session state owned by the UI shell
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current text buffer
    pub text: String,

    /// Selected voice display name
    pub voice_name: String,

    /// Selected speech rate, always within [MIN_RATE, MAX_RATE]
    pub rate: u16,

    /// Path of the most recent successful MP3 export
    ///
    /// Unset until a save succeeds; overwritten by each later success and
    /// untouched by failures.
    pub last_saved: Option<PathBuf>,
}
