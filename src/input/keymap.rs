//! Default key bindings

use std::collections::HashMap;

/// Key sequence type
pub type KeySequence = Vec<u8>;

/// Action identifier for key bindings
///
/// Each variant represents a user command triggered by a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Text buffer
    EditText,
    AppendText,
    ClearText,
    PasteText,

    // Speech settings
    ChooseVoice,
    SetRate,

    // Actions
    Speak,
    SaveAudio,
    PlayLast,

    // Misc
    Redraw,
    Help,
    Quit,
}

/// Create the default keymap
pub fn create_default_keymap() -> HashMap<KeySequence, KeyAction> {
    let mut map = HashMap::new();

    // Text buffer
    map.insert(b"t".to_vec(), KeyAction::EditText);
    map.insert(b"a".to_vec(), KeyAction::AppendText);
    map.insert(b"c".to_vec(), KeyAction::ClearText);
    map.insert(b"y".to_vec(), KeyAction::PasteText);

    // Speech settings
    map.insert(b"v".to_vec(), KeyAction::ChooseVoice);
    map.insert(b"r".to_vec(), KeyAction::SetRate);

    // Actions
    map.insert(b"s".to_vec(), KeyAction::Speak);
    map.insert(b"w".to_vec(), KeyAction::SaveAudio);
    map.insert(b"p".to_vec(), KeyAction::PlayLast);

    // Misc (ctrl+l redraws, ctrl+c quits like q)
    map.insert(b"\x0c".to_vec(), KeyAction::Redraw);
    map.insert(b"h".to_vec(), KeyAction::Help);
    map.insert(b"?".to_vec(), KeyAction::Help);
    map.insert(b"q".to_vec(), KeyAction::Quit);
    map.insert(b"\x03".to_vec(), KeyAction::Quit);

    map
}
