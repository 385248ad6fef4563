//! Clipboard integration

use crate::{Result, TtscError};
use arboard::Clipboard;
use log::debug;

/// Read text from the system clipboard
///
/// Used by the paste action to fill the text buffer without retyping.
pub fn read_clipboard() -> Result<String> {
    debug!("Reading text from clipboard");

    let mut clipboard = Clipboard::new()
        .map_err(|e| TtscError::Other(format!("Failed to open clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| TtscError::Other(format!("Failed to read clipboard: {}", e)))
}
