//! Input system tests
//!
//! Tests key handler stack, key bindings, and modal line input.

mod common;

use common::mock_state;
use ttsc::input::{
    create_default_keymap, BufferHandler, HandlerAction, HandlerStack, KeyAction, KeyHandler,
};
use ttsc::Result;

struct TestHandler;

impl KeyHandler for TestHandler {
    fn process(&mut self, key: &[u8]) -> Result<HandlerAction> {
        if key == b"x" {
            Ok(HandlerAction::Remove)
        } else {
            Ok(HandlerAction::Ignored)
        }
    }
}

#[test]
fn test_handler_stack() {
    let mut stack = HandlerStack::new();
    assert_eq!(stack.len(), 0);

    stack.push(Box::new(TestHandler));
    assert_eq!(stack.len(), 1);

    // Key the handler doesn't recognize
    let action = stack.process(b"a").unwrap();
    assert_eq!(action, HandlerAction::Ignored);
    assert_eq!(stack.len(), 1);

    // Key that makes the handler remove itself
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(stack.len(), 0);

    // Empty stack ignores everything
    let action = stack.process(b"x").unwrap();
    assert_eq!(action, HandlerAction::Ignored);
}

#[test]
fn test_keymap_bindings() {
    let keymap = create_default_keymap();

    // Text buffer keys
    assert_eq!(keymap.get(&b"t".to_vec()), Some(&KeyAction::EditText));
    assert_eq!(keymap.get(&b"a".to_vec()), Some(&KeyAction::AppendText));
    assert_eq!(keymap.get(&b"c".to_vec()), Some(&KeyAction::ClearText));
    assert_eq!(keymap.get(&b"y".to_vec()), Some(&KeyAction::PasteText));

    // Speech setting keys
    assert_eq!(keymap.get(&b"v".to_vec()), Some(&KeyAction::ChooseVoice));
    assert_eq!(keymap.get(&b"r".to_vec()), Some(&KeyAction::SetRate));

    // Action keys
    assert_eq!(keymap.get(&b"s".to_vec()), Some(&KeyAction::Speak));
    assert_eq!(keymap.get(&b"w".to_vec()), Some(&KeyAction::SaveAudio));
    assert_eq!(keymap.get(&b"p".to_vec()), Some(&KeyAction::PlayLast));

    // Quit via q and ctrl+c
    assert_eq!(keymap.get(&b"q".to_vec()), Some(&KeyAction::Quit));
    assert_eq!(keymap.get(&b"\x03".to_vec()), Some(&KeyAction::Quit));

    // Unbound keys stay unbound
    assert_eq!(keymap.get(&b"z".to_vec()), None);
}

#[test]
fn test_buffer_handler_collects_line() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _calls) = mock_state(dir.path(), &["Alpha"]);

    let mut handler = BufferHandler::new(Box::new(|input, state| {
        state.session.text = input;
        Ok(())
    }));

    assert_eq!(
        handler.process_with_state(b"h", &mut state).unwrap(),
        HandlerAction::Handled
    );
    assert_eq!(
        handler.process_with_state(b"i", &mut state).unwrap(),
        HandlerAction::Handled
    );
    assert_eq!(
        handler.process_with_state(b"\r", &mut state).unwrap(),
        HandlerAction::Remove
    );

    assert_eq!(state.session.text, "hi");
}

#[test]
fn test_buffer_handler_backspace() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _calls) = mock_state(dir.path(), &["Alpha"]);

    let mut handler = BufferHandler::new(Box::new(|input, state| {
        state.session.text = input;
        Ok(())
    }));

    handler.process_with_state(b"a", &mut state).unwrap();
    handler.process_with_state(b"b", &mut state).unwrap();
    handler.process_with_state(b"\x7f", &mut state).unwrap();
    handler.process_with_state(b"c", &mut state).unwrap();
    handler.process_with_state(b"\r", &mut state).unwrap();

    assert_eq!(state.session.text, "ac");
}

#[test]
fn test_buffer_handler_escape_cancels() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _calls) = mock_state(dir.path(), &["Alpha"]);
    state.session.text = "untouched".to_string();

    let mut handler = BufferHandler::new(Box::new(|input, state| {
        state.session.text = input;
        Ok(())
    }));

    handler.process_with_state(b"n", &mut state).unwrap();
    let action = handler.process_with_state(b"\x1b", &mut state).unwrap();

    assert_eq!(action, HandlerAction::Remove);
    assert_eq!(state.session.text, "untouched");
}

#[test]
fn test_buffer_handler_filters_escape_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _calls) = mock_state(dir.path(), &["Alpha"]);

    let mut handler = BufferHandler::new(Box::new(|input, state| {
        state.session.text = input;
        Ok(())
    }));

    handler.process_with_state(b"a", &mut state).unwrap();
    // An arrow key arrives as a multi-byte escape sequence
    handler.process_with_state(b"\x1b[A", &mut state).unwrap();
    handler.process_with_state(b"\r", &mut state).unwrap();

    assert_eq!(state.session.text, "a");
}
