//! Buffer handler for collecting line input
//!
//! Used whenever the application needs a line of text from the user:
//! the text buffer itself, a rate value, a voice number, a save path.

use super::{HandlerAction, KeyHandler};
use crate::state::State;
use crate::ui;
use crate::Result;
use log::debug;

/// Callback function type for when input is complete
type OnAcceptFn = Box<dyn FnOnce(String, &mut State) -> Result<()> + Send>;

/// Handler that collects text input until Enter is pressed
///
/// Typed characters are echoed, backspace edits, Escape cancels without
/// invoking the callback. Errors raised by the callback are reported as
/// notifications here rather than propagated; modal input never takes the
/// application down.
pub struct BufferHandler {
    /// Accumulated input buffer
    buffer: String,

    /// Callback to execute when Enter is pressed
    on_accept: Option<OnAcceptFn>,
}

impl BufferHandler {
    /// Create a new buffer handler
    ///
    /// The callback is invoked with the collected text when the user
    /// presses Enter.
    pub fn new(on_accept: OnAcceptFn) -> Self {
        Self {
            buffer: String::new(),
            on_accept: Some(on_accept),
        }
    }

    /// Process input with state access
    pub fn process_input(&mut self, key: &[u8], state: &mut State) -> Result<HandlerAction> {
        match key {
            // Enter - accept input and invoke callback
            b"\r" | b"\n" => {
                debug!("BufferHandler: accepting input '{}'", self.buffer);
                ui::end_prompt();

                if let Some(callback) = self.on_accept.take() {
                    if let Err(e) = callback(self.buffer.clone(), state) {
                        ui::notify_error(&e.to_string());
                    }
                }

                Ok(HandlerAction::Remove)
            }

            // Escape - cancel without invoking the callback
            b"\x1b" => {
                debug!("BufferHandler: cancelled");
                ui::end_prompt();
                ui::notify_info("Cancelled.");
                Ok(HandlerAction::Remove)
            }

            // Backspace - remove last character
            b"\x08" | b"\x7f" => {
                if self.buffer.pop().is_some() {
                    ui::echo_backspace();
                }
                Ok(HandlerAction::Handled)
            }

            // Regular characters - append and echo
            _ => {
                // Multi-byte reads starting with ESC are unrecognized
                // escape sequences (arrows, function keys); drop them whole
                if key.first() == Some(&0x1b) {
                    return Ok(HandlerAction::Handled);
                }

                if let Ok(s) = std::str::from_utf8(key) {
                    let printable: String = s.chars().filter(|c| !c.is_control()).collect();
                    if !printable.is_empty() {
                        self.buffer.push_str(&printable);
                        ui::echo(&printable);
                    }
                }
                Ok(HandlerAction::Handled)
            }
        }
    }
}

impl KeyHandler for BufferHandler {
    fn process(&mut self, _key: &[u8]) -> Result<HandlerAction> {
        // This shouldn't be called directly - use process_with_state instead
        Ok(HandlerAction::Handled)
    }

    fn process_with_state(&mut self, key: &[u8], state: &mut State) -> Result<HandlerAction> {
        self.process_input(key, state)
    }
}
