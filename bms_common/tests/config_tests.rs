//! Config file loading tests.

use bms_common::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("contactors.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn missing_file() {
    let result = BmsConfig::load(Path::new("/nonexistent/bms/contactors.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[shared\nservice_name = 1");
    assert!(matches!(
        BmsConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn full_file_for_this_build() {
    let dir = TempDir::new().unwrap();
    let body = format!(
        r#"
[shared]
service_name = "pack-a-contactors"
log_level = "debug"

[contactors]
expected_profile = "{}"
"#,
        WiringProfile::ACTIVE.name()
    );
    let path = write_config(dir.path(), &body);

    let config = BmsConfig::load(&path).unwrap();
    assert_eq!(config.shared.service_name, "pack-a-contactors");
    assert_eq!(config.shared.log_level, LogLevel::Debug);
    assert_eq!(config.contactors.expected_profile, Some(WiringProfile::ACTIVE));
    config.validate().unwrap();
}

#[test]
fn file_for_other_wiring_fails_validation() {
    let other = WiringProfile::ALL
        .into_iter()
        .find(|p| *p != WiringProfile::ACTIVE)
        .unwrap();
    let dir = TempDir::new().unwrap();
    let body = format!(
        "[shared]\nservice_name = \"pack-b\"\n\n[contactors]\nexpected_profile = \"{other}\"\n"
    );
    let path = write_config(dir.path(), &body);

    let config = BmsConfig::load(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn shared_section_is_required() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[contactors]\n");
    assert!(matches!(
        BmsConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}
