//! Offline speech engine abstraction
//!
//! Live playback goes through a locally installed synthesizer. The engine
//! sits behind a trait so the coordinator can be exercised in tests with a
//! recording mock instead of real audio output.

use crate::{Result, TtscError};
use log::info;

/// A voice installed with the offline engine
///
/// Enumerated once at startup; `name` is what the user picks from, `id` is
/// the opaque token the engine wants back when selecting that voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    pub name: String,
    pub id: String,
}

/// Offline speech engine capability set
///
/// The coordinator drives playback exclusively through this trait.
pub trait Engine: Send {
    /// Enumerate the installed voices
    fn voices(&self) -> Result<Vec<VoiceDescriptor>>;

    /// Select the active voice by engine id
    fn set_voice(&mut self, voice_id: &str) -> Result<()>;

    /// Set the speech rate in words per minute (50-300)
    fn set_rate(&mut self, rate_wpm: u16) -> Result<()>;

    /// Speak text and block until the utterance completes
    fn speak_to_end(&mut self, text: &str) -> Result<()>;
}

/// Create the platform speech engine
///
/// The handle lives for the whole process; it is acquired here at startup
/// and released when the coordinator is dropped on shutdown.
pub fn create_engine() -> Result<Box<dyn Engine>> {
    let platform = std::env::consts::OS;
    info!("Initializing offline speech engine for platform: {}", platform);

    use super::backends::native::NativeEngine;

    match NativeEngine::new() {
        Ok(engine) => {
            info!("✓ Offline speech engine ready");
            Ok(Box::new(engine))
        }
        Err(e) => Err(TtscError::Synthesis(format!(
            "No offline speech engine available on '{}': {}\n\
             On Linux, install Speech Dispatcher: sudo apt install speech-dispatcher",
            platform, e
        ))),
    }
}
