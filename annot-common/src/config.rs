//! Configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The binary collects tiers 1 and 2 through clap (which handles the
//! CLI-over-env precedence) and passes them in as [`Overrides`]. SMTP
//! credentials are never accepted on the command line; they come from the
//! environment or the TOML file only.

use crate::Result;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Default listen address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;
/// Default annotation-service endpoint
pub const DEFAULT_ANNOTATION_API_URL: &str = "http://localhost:5000/api/annotate";
/// Default annotation-service request timeout
pub const DEFAULT_ANNOTATION_TIMEOUT_SECS: u64 = 60;
/// Default SMTP relay host
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
/// Default SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Endpoint the attribute recommender posts element groups to
    pub annotation_api_url: String,
    pub annotation_timeout_secs: u64,
    /// Serve recommendations from the static mock tables instead of the
    /// external annotation service
    pub use_mock_recommendations: bool,
    pub smtp: SmtpSettings,
}

/// SMTP relay configuration for proposal notifications.
///
/// A missing recipient or missing credentials degrades email dispatch to a
/// logged no-op; it is never a startup error.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub proposal_recipient: Option<String>,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SMTP_SERVER.to_string(),
            port: DEFAULT_SMTP_PORT,
            user: None,
            password: None,
            proposal_recipient: None,
        }
    }
}

/// Values from the CLI/environment tiers, collected by the binary
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub annotation_api_url: Option<String>,
    pub use_mock_recommendations: Option<bool>,
}

/// TOML config file schema; every field optional
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub annotation_api_url: Option<String>,
    pub annotation_timeout_secs: Option<u64>,
    pub use_mock_recommendations: Option<bool>,
    pub smtp: Option<TomlSmtpConfig>,
}

/// `[smtp]` section of the TOML config file
#[derive(Debug, Default, Deserialize)]
pub struct TomlSmtpConfig {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub proposal_recipient: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

impl Settings {
    /// Resolve settings from all four tiers.
    ///
    /// A missing or unreadable config file logs a warning and falls back to
    /// defaults; startup must not fail on configuration absence.
    pub fn resolve(overrides: &Overrides, config_path: Option<&Path>) -> Settings {
        let file = match config_path {
            Some(path) => match TomlConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Could not load config file: {} (using defaults)", e);
                    TomlConfig::default()
                }
            },
            None => TomlConfig::default(),
        };

        let smtp = resolve_smtp(file.smtp.unwrap_or_default());

        Settings {
            host: overrides
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            annotation_api_url: overrides
                .annotation_api_url
                .clone()
                .or(file.annotation_api_url)
                .unwrap_or_else(|| DEFAULT_ANNOTATION_API_URL.to_string()),
            annotation_timeout_secs: file
                .annotation_timeout_secs
                .unwrap_or(DEFAULT_ANNOTATION_TIMEOUT_SECS),
            use_mock_recommendations: overrides
                .use_mock_recommendations
                .or(file.use_mock_recommendations)
                .unwrap_or(true),
            smtp,
        }
    }
}

/// Merge the SMTP environment tier over the TOML tier.
///
/// Environment names match the deployment surface this service replaced:
/// `SMTP_SERVER`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASSWORD`,
/// `VOCABULARY_PROPOSAL_RECIPIENT`.
fn resolve_smtp(file: TomlSmtpConfig) -> SmtpSettings {
    let env_port = match std::env::var("SMTP_PORT") {
        Ok(raw) => match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                warn!("SMTP_PORT is not a valid port number: {:?} (ignoring)", raw);
                None
            }
        },
        Err(_) => None,
    };

    SmtpSettings {
        server: std::env::var("SMTP_SERVER")
            .ok()
            .or(file.server)
            .unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
        port: env_port.or(file.port).unwrap_or(DEFAULT_SMTP_PORT),
        user: std::env::var("SMTP_USER").ok().or(file.user),
        password: std::env::var("SMTP_PASSWORD").ok().or(file.password),
        proposal_recipient: std::env::var("VOCABULARY_PROPOSAL_RECIPIENT")
            .ok()
            .or(file.proposal_recipient),
    }
}
