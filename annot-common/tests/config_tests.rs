//! Unit tests for configuration resolution and graceful degradation
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate SMTP_* variables are marked with #[serial] to
//! ensure they run sequentially, not in parallel.

use annot_common::config::{Overrides, Settings, TomlConfig};
use serial_test::serial;
use std::env;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

fn clear_smtp_env() {
    for key in [
        "SMTP_SERVER",
        "SMTP_PORT",
        "SMTP_USER",
        "SMTP_PASSWORD",
        "VOCABULARY_PROPOSAL_RECIPIENT",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_with_no_sources() {
    clear_smtp_env();
    let settings = Settings::resolve(&Overrides::default(), None);

    assert_eq!(settings.host, "0.0.0.0");
    assert_eq!(settings.port, 8000);
    assert_eq!(settings.annotation_api_url, "http://localhost:5000/api/annotate");
    assert_eq!(settings.annotation_timeout_secs, 60);
    assert!(settings.use_mock_recommendations);
    assert_eq!(settings.smtp.server, "smtp.gmail.com");
    assert_eq!(settings.smtp.port, 587);
    assert!(settings.smtp.user.is_none());
    assert!(settings.smtp.proposal_recipient.is_none());
}

#[test]
#[serial]
fn test_toml_file_overrides_defaults() {
    clear_smtp_env();
    let file = write_config(
        r#"
port = 9100
annotation_api_url = "http://annotator.internal/api/annotate"
use_mock_recommendations = false

[smtp]
server = "mail.example.org"
proposal_recipient = "curator@example.org"
"#,
    );

    let settings = Settings::resolve(&Overrides::default(), Some(file.path()));

    assert_eq!(settings.port, 9100);
    assert_eq!(settings.annotation_api_url, "http://annotator.internal/api/annotate");
    assert!(!settings.use_mock_recommendations);
    assert_eq!(settings.smtp.server, "mail.example.org");
    assert_eq!(
        settings.smtp.proposal_recipient.as_deref(),
        Some("curator@example.org")
    );
}

#[test]
#[serial]
fn test_overrides_beat_toml_file() {
    clear_smtp_env();
    let file = write_config("port = 9100\nuse_mock_recommendations = true\n");

    let overrides = Overrides {
        port: Some(9200),
        use_mock_recommendations: Some(false),
        ..Overrides::default()
    };
    let settings = Settings::resolve(&overrides, Some(file.path()));

    assert_eq!(settings.port, 9200);
    assert!(!settings.use_mock_recommendations);
}

#[test]
#[serial]
fn test_smtp_env_beats_toml_file() {
    clear_smtp_env();
    let file = write_config(
        r#"
[smtp]
server = "mail.example.org"
user = "file-user"
"#,
    );
    env::set_var("SMTP_SERVER", "smtp.env.example.org");
    env::set_var("SMTP_USER", "env-user");
    env::set_var("VOCABULARY_PROPOSAL_RECIPIENT", "reviewer@example.org");

    let settings = Settings::resolve(&Overrides::default(), Some(file.path()));
    clear_smtp_env();

    assert_eq!(settings.smtp.server, "smtp.env.example.org");
    assert_eq!(settings.smtp.user.as_deref(), Some("env-user"));
    assert_eq!(
        settings.smtp.proposal_recipient.as_deref(),
        Some("reviewer@example.org")
    );
}

#[test]
#[serial]
fn test_invalid_smtp_port_env_is_ignored() {
    clear_smtp_env();
    env::set_var("SMTP_PORT", "not-a-port");

    let settings = Settings::resolve(&Overrides::default(), None);
    clear_smtp_env();

    assert_eq!(settings.smtp.port, 587);
}

#[test]
#[serial]
fn test_missing_config_file_falls_back_to_defaults() {
    clear_smtp_env();
    let settings = Settings::resolve(
        &Overrides::default(),
        Some(std::path::Path::new("/nonexistent/annot.toml")),
    );

    assert_eq!(settings.port, 8000);
    assert!(settings.use_mock_recommendations);
}

#[test]
fn test_toml_config_rejects_malformed_file() {
    let file = write_config("port = \"not a number");
    assert!(TomlConfig::load(file.path()).is_err());
}
