//! Unit tests for config loading.

use dragsquare::{ConfigError, TrackerConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    fs::write(&path, r#"{"squareMargin": 2.5, "maxAncestorCheckDepth": 12}"#).unwrap();

    let config = TrackerConfig::load(&path).unwrap();
    assert_eq!(config.square_margin, 2.5);
    assert_eq!(config.max_ancestor_check_depth, 12);
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(TrackerConfig::load(&path).unwrap(), TrackerConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = TrackerConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    fs::write(&path, r#"{"maxAncestorCheckDepth": 0}"#).unwrap();

    let err = TrackerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDepth(0)));
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn test_round_trip_keeps_camel_case_keys() {
    let json = serde_json::to_string(&TrackerConfig::default()).unwrap();
    assert!(json.contains("\"squareMargin\":4.0"));
    assert!(json.contains("\"maxAncestorCheckDepth\":30"));
}
