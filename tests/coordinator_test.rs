//! Synthesis coordinator tests
//!
//! Exercises the coordinator against a recording mock engine: the
//! empty-input guard, voice name resolution, rate clamping, and the
//! configure-then-speak call order.

mod common;

use common::{mock_coordinator, EngineCall};
use ttsc::TtscError;

#[test]
fn test_speak_configures_engine_then_speaks() {
    let (mut coordinator, calls) = mock_coordinator(&["American English", "British English"]);

    coordinator
        .speak("Hello world", "British English", 150)
        .unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            EngineCall::SetVoice("voice-1".to_string()),
            EngineCall::SetRate(150),
            EngineCall::Speak("Hello world".to_string()),
        ]
    );
}

#[test]
fn test_empty_text_aborts_before_engine() {
    let (mut coordinator, calls) = mock_coordinator(&["Default"]);

    let err = coordinator.speak("", "Default", 150).unwrap_err();
    assert!(matches!(err, TtscError::NothingToSpeak));

    let err = coordinator.speak("   \n\t ", "Default", 150).unwrap_err();
    assert!(matches!(err, TtscError::NothingToSpeak));

    // The engine must never have been touched
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_unknown_voice_falls_back_to_first() {
    let (mut coordinator, calls) = mock_coordinator(&["Alpha", "Beta"]);

    coordinator.speak("hi", "No Such Voice", 150).unwrap();

    assert_eq!(
        calls.lock().unwrap()[0],
        EngineCall::SetVoice("voice-0".to_string())
    );
}

#[test]
fn test_rate_clamped_before_engine() {
    let (mut coordinator, calls) = mock_coordinator(&["Alpha"]);

    coordinator.speak("hi", "Alpha", 1000).unwrap();
    coordinator.speak("hi", "Alpha", 10).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls[1], EngineCall::SetRate(300));
    assert_eq!(calls[4], EngineCall::SetRate(50));
}

#[test]
fn test_no_voices_skips_selection() {
    let (mut coordinator, calls) = mock_coordinator(&[]);

    coordinator.speak("hi", "anything", 150).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            EngineCall::SetRate(150),
            EngineCall::Speak("hi".to_string()),
        ]
    );
}

#[test]
fn test_resolve_voice() {
    let (coordinator, _calls) = mock_coordinator(&["Alpha", "Beta"]);

    assert_eq!(coordinator.resolve_voice("Beta").unwrap().id, "voice-1");
    assert_eq!(coordinator.resolve_voice("missing").unwrap().id, "voice-0");

    let (empty, _calls) = mock_coordinator(&[]);
    assert!(empty.resolve_voice("anything").is_none());
}
