//! Configuration loading tests
//!
//! Tests that configuration loads, defaults sensibly, and round-trips
//! through save/reload.

use ttsc::state::config::Config;

#[test]
fn test_first_load_creates_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".ttsc.cfg");

    let config = Config::load_from(path.clone()).expect("Failed to load config");

    assert!(path.is_file());
    assert_eq!(config.rate(), 150);
    assert_eq!(config.voice(), "");
    assert_eq!(config.language(), "en");
    assert!(config.path().to_str().unwrap().contains(".ttsc.cfg"));
}

#[test]
fn test_set_save_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".ttsc.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("speech", "rate", "220");
    config.set("speech", "voice", "Daniel");
    config.set("cloud", "language", "de");
    config.save().unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.rate(), 220);
    assert_eq!(reloaded.voice(), "Daniel");
    assert_eq!(reloaded.language(), "de");
}

#[test]
fn test_out_of_range_rate_clamped_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".ttsc.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("speech", "rate", "9000");
    config.save().unwrap();
    assert_eq!(Config::load_from(path.clone()).unwrap().rate(), 300);

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("speech", "rate", "3");
    config.save().unwrap();
    assert_eq!(Config::load_from(path).unwrap().rate(), 50);
}

#[test]
fn test_garbage_rate_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".ttsc.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("speech", "rate", "fast");
    config.save().unwrap();

    assert_eq!(Config::load_from(path).unwrap().rate(), 150);
}
