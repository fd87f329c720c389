// crates/mh_config/tests/config_file.rs
//! SgsConfig 文件读写测试

use mh_config::{ConfigError, SgsConfig, SgsModelKind};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mh_config_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_path("roundtrip");
    let config = SgsConfig {
        model: SgsModelKind::Smagorinsky,
        smagorinsky_constant: 0.25,
        filter_width_multiplier: 1.5,
    };

    config.save_to_file(&path).unwrap();
    let loaded = SgsConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_lowercase_json() {
    let path = temp_path("lowercase");
    SgsConfig::with_model(SgsModelKind::Wale).save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(content.contains("\"wale\""));
    assert!(content.contains("filter_width_multiplier"));
}

#[test]
fn test_missing_file() {
    let result = SgsConfig::from_file(temp_path("does_not_exist"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_file_rejected() {
    let path = temp_path("invalid");
    std::fs::write(&path, r#"{ "model": "smagorinsky", "filter_width_multiplier": -2.0 }"#).unwrap();
    let result = SgsConfig::from_file(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "filter_width_multiplier"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}
