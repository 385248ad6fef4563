//! Synthesis coordinator
//!
//! Bridges session state to the offline engine: resolves the selected voice
//! name against the voices enumerated at startup, clamps the rate, and runs
//! blocking playback. The empty-input check happens here, before the engine
//! is touched at all.

use crate::speech::synth::{create_engine, Engine, VoiceDescriptor};
use crate::state::session::clamp_rate;
use crate::{Result, TtscError};
use log::{debug, info};

/// Owns the offline engine handle for the life of the process
pub struct Coordinator {
    engine: Box<dyn Engine>,

    /// Voices enumerated once at startup
    voices: Vec<VoiceDescriptor>,
}

impl Coordinator {
    /// Create a coordinator around the platform speech engine
    pub fn new() -> Result<Self> {
        Self::with_engine(create_engine()?)
    }

    /// Create a coordinator around a caller-supplied engine
    ///
    /// Tests use this to substitute a recording mock for real audio output.
    pub fn with_engine(engine: Box<dyn Engine>) -> Result<Self> {
        let voices = engine.voices()?;
        info!("Enumerated {} voices", voices.len());
        for voice in &voices {
            debug!("  voice '{}' (id {})", voice.name, voice.id);
        }

        Ok(Self { engine, voices })
    }

    /// Voices enumerated at startup
    pub fn voices(&self) -> &[VoiceDescriptor] {
        &self.voices
    }

    /// Resolve a display name to a voice descriptor
    ///
    /// A name with no match falls back to the first enumerated voice; this
    /// mirrors how the selector behaves when a configured voice has been
    /// uninstalled since the preference was saved. Returns None only when
    /// the engine reported no voices at all.
    pub fn resolve_voice(&self, name: &str) -> Option<&VoiceDescriptor> {
        self.voices
            .iter()
            .find(|v| v.name == name)
            .or_else(|| self.voices.first())
    }

    /// Speak `text` with the given voice and rate, blocking until playback
    /// completes
    ///
    /// Empty or whitespace-only text aborts before any engine call.
    pub fn speak(&mut self, text: &str, voice_name: &str, rate_wpm: u16) -> Result<()> {
        if text.trim().is_empty() {
            return Err(TtscError::NothingToSpeak);
        }

        let voice_id = self.resolve_voice(voice_name).map(|v| v.id.clone());
        if let Some(id) = voice_id {
            self.engine.set_voice(&id)?;
        }

        self.engine.set_rate(clamp_rate(i64::from(rate_wpm)))?;

        debug!("Speaking {} chars at {} wpm", text.chars().count(), rate_wpm);
        self.engine.speak_to_end(text)
    }
}
