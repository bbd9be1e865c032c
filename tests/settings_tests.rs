// Integration tests for the settings file.

mod common;

use std::fs;

use linguaconnect::config::{Settings, DEFAULT_TIME_FORMAT};
use linguaconnect::{ConfigError, Route};

#[test]
fn test_settings_round_trip() {
    common::setup_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = Settings {
        display_name: "Lena".to_string(),
        time_format: "%H:%M".to_string(),
        start_screen: Route::Dashboard,
        log_level: "debug".to_string(),
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load_or_init(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_yields_defaults() {
    common::setup_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linguaconnect").join("settings.json");

    let settings = Settings::load_or_init(&path).unwrap();
    assert_eq!(settings.display_name, "You");
    assert_eq!(settings.time_format, DEFAULT_TIME_FORMAT);
    assert_eq!(settings.start_screen, Route::Home);
    assert_eq!(settings.log_level, "info");

    // The defaults were written for the next run
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"display_name\""));
}

#[test]
fn test_unknown_start_screen_is_error() {
    common::setup_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "start_screen": "profile" }"#).unwrap();

    match Settings::load_or_init(&path) {
        Err(ConfigError::Parse { .. }) => (),
        other => panic!("Expected parse error, got {:?}", other),
    }
}
