use littlefinger::{LittleFingerConfig, SETTINGS_NAMESPACE};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn config_default() {
    let cfg = LittleFingerConfig::default();
    assert_eq!(cfg.namespace, SETTINGS_NAMESPACE);
    assert_eq!(cfg.settings_dir, None);
    assert_eq!(cfg.request_timeout(), None);
    assert!(cfg.notifications_enabled);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_load_partial_takes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"request_timeout_secs": 10}"#).unwrap();

    let cfg = LittleFingerConfig::load(&path).unwrap();
    assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(10)));
    assert_eq!(cfg.namespace, SETTINGS_NAMESPACE);
    assert!(cfg.notifications_enabled);
}

#[test]
fn config_load_full() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "settings_dir": "/tmp/lf",
            "namespace": "other",
            "request_timeout_secs": null,
            "notifications_enabled": false
        }"#,
    )
    .unwrap();

    let cfg = LittleFingerConfig::load(&path).unwrap();
    assert_eq!(cfg.settings_dir, Some(PathBuf::from("/tmp/lf")));
    assert_eq!(cfg.namespace, "other");
    assert!(!cfg.notifications_enabled);
    assert_eq!(cfg.resolved_settings_dir().unwrap(), PathBuf::from("/tmp/lf"));
}

#[test]
fn config_load_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(LittleFingerConfig::load(dir.path().join("nope.json")).is_err());
}

#[test]
fn config_load_rejects_empty_namespace() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"namespace": "  "}"#).unwrap();
    let err = LittleFingerConfig::load(&path).unwrap_err();
    assert!(format!("{err}").contains("namespace"));
}

#[test]
fn config_rejects_zero_timeout() {
    let cfg = LittleFingerConfig {
        request_timeout_secs: Some(0),
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_serde_roundtrip() {
    let cfg = LittleFingerConfig {
        settings_dir: Some(PathBuf::from("/var/lib/app")),
        request_timeout_secs: Some(30),
        ..Default::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let parsed: LittleFingerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cfg);
}
