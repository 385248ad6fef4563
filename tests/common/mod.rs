//! Shared test fixtures
//!
//! A recording mock of the offline engine, plus helpers to assemble
//! application state around it without touching real audio or the home
//! directory.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use ttsc::speech::{Coordinator, Engine, VoiceDescriptor};
use ttsc::state::config::Config;
use ttsc::state::State;
use ttsc::Result;

/// One recorded call into the mock engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    SetVoice(String),
    SetRate(u16),
    Speak(String),
}

/// Offline engine stand-in that records every call
pub struct MockEngine {
    voices: Vec<VoiceDescriptor>,
    calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl MockEngine {
    /// Build a mock with the given voice names; ids are "voice-<index>"
    pub fn new(names: &[&str]) -> (Self, Arc<Mutex<Vec<EngineCall>>>) {
        let voices = names
            .iter()
            .enumerate()
            .map(|(i, name)| VoiceDescriptor {
                name: name.to_string(),
                id: format!("voice-{}", i),
            })
            .collect();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorder = calls.clone();
        (Self { voices, calls }, recorder)
    }
}

impl Engine for MockEngine {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>> {
        Ok(self.voices.clone())
    }

    fn set_voice(&mut self, voice_id: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::SetVoice(voice_id.to_string()));
        Ok(())
    }

    fn set_rate(&mut self, rate_wpm: u16) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::SetRate(rate_wpm));
        Ok(())
    }

    fn speak_to_end(&mut self, text: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::Speak(text.to_string()));
        Ok(())
    }
}

/// Coordinator over a fresh mock engine
pub fn mock_coordinator(names: &[&str]) -> (Coordinator, Arc<Mutex<Vec<EngineCall>>>) {
    let (engine, calls) = MockEngine::new(names);
    let coordinator = Coordinator::with_engine(Box::new(engine)).expect("mock coordinator");
    (coordinator, calls)
}

/// Application state over a mock engine and a config in `dir`
pub fn mock_state(dir: &Path, names: &[&str]) -> (State, Arc<Mutex<Vec<EngineCall>>>) {
    let config = Config::load_from(dir.join(".ttsc.cfg")).expect("temp config");
    let (coordinator, calls) = mock_coordinator(names);
    (State::assemble(config, coordinator), calls)
}
