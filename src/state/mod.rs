//! Application state management
//!
//! The State struct is the central data structure of the application,
//! holding configuration, the session buffer, the synthesis coordinator,
//! and the modal input handler stack.

pub mod config;
pub mod session;

use crate::input::HandlerStack;
use crate::launcher;
use crate::speech::{remote, Coordinator};
use crate::{Result, TtscError};
use config::Config;
use log::{debug, info};
use session::{clamp_rate, Session};
use std::path::PathBuf;

/// Main application state
pub struct State {
    /// Configuration loaded from ~/.ttsc.cfg
    pub config: Config,

    /// Transient session state: text buffer, voice, rate, last saved path
    pub session: Session,

    /// Synthesis coordinator owning the offline engine handle
    pub coordinator: Coordinator,

    /// Key handler stack for modal input
    /// Line entry and menus intercept keys by pushing themselves here
    pub handlers: HandlerStack,

    /// Set when the user asks to exit; the event loop checks it each pass
    pub quit: bool,
}

impl State {
    /// Create the application state
    ///
    /// Loads configuration, initializes the offline engine, and seeds the
    /// session with the configured preferences.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        info!("Configuration loaded from {:?}", config.path());

        let coordinator = Coordinator::new()?;

        Ok(Self::assemble(config, coordinator))
    }

    /// Build state from preconstructed parts
    ///
    /// Tests use this with a mock-backed coordinator and a temp config.
    pub fn assemble(config: Config, coordinator: Coordinator) -> Self {
        let configured_voice = config.voice();
        let voice_name = if configured_voice.is_empty() {
            coordinator
                .voices()
                .first()
                .map(|v| v.name.clone())
                .unwrap_or_default()
        } else {
            configured_voice
        };

        let session = Session {
            voice_name,
            rate: config.rate(),
            ..Session::default()
        };

        Self {
            config,
            session,
            coordinator,
            handlers: HandlerStack::new(),
            quit: false,
        }
    }

    /// Speak the session text with the selected voice and rate
    ///
    /// Blocks until the offline engine finishes vocalizing.
    pub fn speak_current(&mut self) -> Result<()> {
        self.coordinator
            .speak(&self.session.text, &self.session.voice_name, self.session.rate)
    }

    /// Export the session text as an MP3 at `path`
    ///
    /// The last-saved path is updated only when the export fully succeeds;
    /// every failure leaves it exactly as it was.
    pub fn save_current(&mut self, path: PathBuf) -> Result<()> {
        if self.session.text.trim().is_empty() {
            return Err(TtscError::NothingToSave);
        }
        if !remote::is_available() {
            return Err(TtscError::CloudMissing);
        }

        remote::export_mp3(&self.session.text, &self.config.language(), &path)?;

        debug!("Recorded last saved path: {}", path.display());
        self.session.last_saved = Some(path);
        Ok(())
    }

    /// Open the last saved audio file with the OS default application
    pub fn play_last(&self) -> Result<()> {
        launcher::play(self.session.last_saved.as_deref())
    }

    /// Set the speech rate, clamped to the valid range, and persist it
    pub fn set_rate(&mut self, requested: i64) -> Result<()> {
        self.session.rate = clamp_rate(requested);
        self.config
            .set("speech", "rate", &self.session.rate.to_string());
        self.config.save()
    }

    /// Set the selected voice and persist the preference
    pub fn set_voice(&mut self, name: &str) -> Result<()> {
        self.session.voice_name = name.to_string();
        self.config.set("speech", "voice", name);
        self.config.save()
    }
}
