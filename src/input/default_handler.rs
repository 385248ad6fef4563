//! Default key handler
//!
//! Dispatches single-key commands when no modal handler is active. Every
//! operation reports its own failures as notifications; nothing here is
//! fatal to the process.

use super::{BufferHandler, HandlerAction, KeyAction};
use crate::state::State;
use crate::{clipboard, speech, ui, Result, TtscError};
use log::{debug, trace};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default key handler mapping bound keys to application actions
pub struct DefaultKeyHandler {
    /// Key bindings map
    keymap: HashMap<Vec<u8>, KeyAction>,
}

impl DefaultKeyHandler {
    /// Create a new default key handler
    pub fn new(keymap: HashMap<Vec<u8>, KeyAction>) -> Self {
        debug!(
            "Creating default key handler with {} bindings",
            keymap.len()
        );
        Self { keymap }
    }

    /// Process a key against the default bindings
    pub fn process_key(&mut self, key: &[u8], state: &mut State) -> Result<HandlerAction> {
        let Some(action) = self.keymap.get(key).copied() else {
            trace!("Unbound key: {:?}", key);
            return Ok(HandlerAction::Ignored);
        };

        debug!("Key action: {:?}", action);
        self.execute_action(action, state)
    }

    /// Execute a bound action
    fn execute_action(&mut self, action: KeyAction, state: &mut State) -> Result<HandlerAction> {
        use KeyAction::*;

        match action {
            EditText => {
                ui::prompt("Text");
                state.handlers.push(Box::new(BufferHandler::new(Box::new(
                    |input: String, state: &mut State| {
                        state.session.text = input;
                        Ok(())
                    },
                ))));
            }

            AppendText => {
                ui::prompt("Append");
                state.handlers.push(Box::new(BufferHandler::new(Box::new(
                    |input: String, state: &mut State| {
                        if input.is_empty() {
                            return Ok(());
                        }
                        if !state.session.text.is_empty() {
                            state.session.text.push('\n');
                        }
                        state.session.text.push_str(&input);
                        Ok(())
                    },
                ))));
            }

            ClearText => {
                state.session.text.clear();
                ui::notify_info("Text cleared.");
            }

            PasteText => match clipboard::read_clipboard() {
                Ok(text) if text.trim().is_empty() => {
                    ui::notify_error("Clipboard has no text.");
                }
                Ok(text) => {
                    state.session.text = text;
                    ui::notify_info("Pasted clipboard text.");
                }
                Err(e) => ui::notify_error(&e.to_string()),
            },

            ChooseVoice => {
                if state.coordinator.voices().is_empty() {
                    ui::notify_error("No voices available.");
                } else {
                    ui::print_voice_menu(state.coordinator.voices(), &state.session.voice_name);
                    ui::prompt("Voice number");
                    state
                        .handlers
                        .push(Box::new(BufferHandler::new(Box::new(Self::select_voice))));
                }
            }

            SetRate => {
                ui::prompt("Rate (50-300 wpm)");
                state
                    .handlers
                    .push(Box::new(BufferHandler::new(Box::new(Self::apply_rate))));
            }

            Speak => {
                // Blocks until playback completes; success shows nothing
                if let Err(e) = state.speak_current() {
                    ui::notify_error(&e.to_string());
                }
            }

            SaveAudio => {
                if state.session.text.trim().is_empty() {
                    ui::notify_error(&TtscError::NothingToSave.to_string());
                } else if !speech::remote::is_available() {
                    ui::notify_error(&TtscError::CloudMissing.to_string());
                } else {
                    ui::prompt("Save as [.mp3]");
                    state
                        .handlers
                        .push(Box::new(BufferHandler::new(Box::new(Self::save_to_path))));
                }
            }

            PlayLast => {
                if let Err(e) = state.play_last() {
                    ui::notify_error(&e.to_string());
                }
            }

            Redraw => {
                // The event loop redraws after every handled key
            }

            Help => ui::print_help(),

            Quit => {
                debug!("Quit requested");
                state.quit = true;
            }
        }

        Ok(HandlerAction::Handled)
    }

    /// Apply a voice selection from menu input
    fn select_voice(input: String, state: &mut State) -> Result<()> {
        let count = state.coordinator.voices().len();
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                let name = state.coordinator.voices()[n - 1].name.clone();
                state.set_voice(&name)?;
                ui::notify_info(&format!("Voice set to {}.", name));
            }
            _ => ui::notify_error("Invalid voice number."),
        }
        Ok(())
    }

    /// Apply a rate value from line input
    fn apply_rate(input: String, state: &mut State) -> Result<()> {
        match input.trim().parse::<i64>() {
            Ok(value) => {
                state.set_rate(value)?;
                ui::notify_info(&format!("Rate set to {} wpm.", state.session.rate));
            }
            Err(_) => ui::notify_error("Invalid rate value."),
        }
        Ok(())
    }

    /// Export the session text to the path the user entered
    fn save_to_path(input: String, state: &mut State) -> Result<()> {
        let input = input.trim();
        if input.is_empty() {
            // Empty path means the user backed out of the save
            return Ok(());
        }

        let mut path = PathBuf::from(input);
        if path.extension().is_none() {
            path.set_extension("mp3");
        }

        match state.save_current(path.clone()) {
            Ok(()) => ui::notify_info(&format!("Audio saved successfully at {}", path.display())),
            Err(e) => ui::notify_error(&e.to_string()),
        }
        Ok(())
    }
}
