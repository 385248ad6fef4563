//! TTSC - console text to speech converter
//!
//! A terminal front end over two synthesis backends: the platform speech
//! engine for live playback, and a network-backed service for MP3 export.

pub mod clipboard;
pub mod error;
pub mod input;
pub mod launcher;
pub mod platform;
pub mod speech;
pub mod state;
pub mod term;
pub mod ui;

pub use error::{Result, TtscError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "ttsc";
