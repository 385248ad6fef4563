//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to Speech Dispatcher on
//! Linux, AVFoundation on macOS, and SAPI on Windows, so one backend covers
//! every platform the application runs on.

use crate::speech::synth::{Engine, VoiceDescriptor};
use crate::state::session::{clamp_rate, MAX_RATE, MIN_RATE};
use crate::{Result, TtscError};
use log::{debug, warn};
use std::time::Duration;
use tts::Tts as TtsCrate;

/// Poll interval while waiting for an utterance to finish
const SPEAK_POLL: Duration = Duration::from_millis(50);

/// Offline engine backed by the tts crate
pub struct NativeEngine {
    tts: TtsCrate,
}

impl NativeEngine {
    /// Create a new native engine
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS engine");

        let tts = TtsCrate::default()
            .map_err(|e| TtscError::Synthesis(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS engine created successfully");

        Ok(Self { tts })
    }

    /// Convert a words-per-minute rate to the engine's native rate scale
    fn convert_rate(&self, rate_wpm: u16) -> f32 {
        map_rate(rate_wpm, self.tts.min_rate(), self.tts.max_rate())
    }
}

/// Map a 50-300 words-per-minute rate linearly onto `[min, max]`
///
/// The tts crate exposes a platform-specific rate range; 50 wpm lands on
/// the platform minimum and 300 wpm on the platform maximum.
fn map_rate(rate_wpm: u16, min: f32, max: f32) -> f32 {
    let wpm = clamp_rate(i64::from(rate_wpm));
    let span = f32::from(MAX_RATE - MIN_RATE);
    min + f32::from(wpm - MIN_RATE) * (max - min) / span
}

impl Engine for NativeEngine {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| TtscError::Synthesis(format!("Failed to enumerate voices: {}", e)))?;

        Ok(voices
            .iter()
            .map(|v| VoiceDescriptor {
                name: v.name(),
                id: v.id(),
            })
            .collect())
    }

    fn set_voice(&mut self, voice_id: &str) -> Result<()> {
        debug!("Setting voice to id {}", voice_id);

        let features = self.tts.supported_features();
        if !features.voice {
            warn!("Voice selection not supported on this platform");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| TtscError::Synthesis(format!("Failed to enumerate voices: {}", e)))?;

        match voices.iter().find(|v| v.id() == voice_id) {
            Some(voice) => {
                self.tts
                    .set_voice(voice)
                    .map_err(|e| TtscError::Synthesis(format!("Failed to set voice: {}", e)))?;
            }
            None => {
                warn!("Voice id {} not found among installed voices", voice_id);
            }
        }

        Ok(())
    }

    fn set_rate(&mut self, rate_wpm: u16) -> Result<()> {
        debug!("Setting rate to {} wpm", rate_wpm);

        let features = self.tts.supported_features();
        if !features.rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = self.convert_rate(rate_wpm);
        self.tts
            .set_rate(converted)
            .map_err(|e| TtscError::Synthesis(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn speak_to_end(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking {} chars", text.chars().count());
        self.tts
            .speak(text, true)
            .map_err(|e| TtscError::Synthesis(format!("Speak failed: {}", e)))?;

        // Playback is synchronous by contract; poll until the engine goes
        // quiet on platforms that can report it
        if self.tts.supported_features().is_speaking {
            loop {
                let speaking = self.tts.is_speaking().map_err(|e| {
                    TtscError::Synthesis(format!("Failed to query speech state: {}", e))
                })?;
                if !speaking {
                    break;
                }
                std::thread::sleep(SPEAK_POLL);
            }
        }

        Ok(())
    }
}
