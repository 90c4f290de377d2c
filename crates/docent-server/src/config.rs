//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Room-provider signing credentials.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Token issuance settings.
    #[serde(default)]
    pub token: TokenConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Room-provider API credentials used to sign tokens.
///
/// There are deliberately no defaults: the service must refuse to start
/// rather than sign tokens with a placeholder secret.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// API key; becomes the `iss` claim of every issued token.
    #[serde(default)]
    pub api_key: String,

    /// API secret the tokens are signed with. Never logged.
    #[serde(default)]
    pub api_secret: String,
}

/// Token issuance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Lifetime of issued tokens in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: i64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "docent_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    5001
}

fn default_ttl_secs() -> i64 {
    docent_token::DEFAULT_TTL_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Signing credentials are missing or blank.
    #[error("signing credentials are not configured: set credentials.api_key and credentials.api_secret (or LIVEKIT_API_KEY / LIVEKIT_API_SECRET)")]
    MissingCredentials,
}

impl Config {
    /// Checks that signing credentials are present.
    ///
    /// Called once at startup; a failure here is fatal by design, since
    /// issuing unsigned or placeholder-signed tokens is worse than refusing
    /// to start.
    pub fn validate_credentials(&self) -> Result<(), ConfigError> {
        if self.credentials.api_key.trim().is_empty()
            || self.credentials.api_secret.trim().is_empty()
        {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(())
    }
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `DOCENT_HOST` overrides `server.host`
/// - `DOCENT_PORT` overrides `server.port`
/// - `LIVEKIT_API_KEY` overrides `credentials.api_key`
/// - `LIVEKIT_API_SECRET` overrides `credentials.api_secret`
/// - `DOCENT_TOKEN_TTL_SECS` overrides `token.ttl_secs`
/// - `DOCENT_LOG_LEVEL` overrides `logging.level`
/// - `DOCENT_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("DOCENT_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("DOCENT_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(api_key) = std::env::var("LIVEKIT_API_KEY") {
        config.credentials.api_key = api_key;
    }
    if let Ok(api_secret) = std::env::var("LIVEKIT_API_SECRET") {
        config.credentials.api_secret = api_secret;
    }
    if let Ok(ttl) = std::env::var("DOCENT_TOKEN_TTL_SECS") {
        if let Ok(parsed) = ttl.parse() {
            config.token.ttl_secs = parsed;
        }
    }
    if let Ok(level) = std::env::var("DOCENT_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("DOCENT_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}

/// Returns a masked preview of an API key for startup diagnostics.
///
/// Only the first 8 characters are shown; the full key (and the secret,
/// always) must never appear in logs.
pub fn masked_key_preview(key: &str) -> String {
    let visible: String = key.chars().take(8).collect();
    format!("{visible}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_applied_for_missing_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.token.ttl_secs, docent_token::DEFAULT_TTL_SECS);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.credentials.api_key.is_empty());
    }

    #[test]
    fn file_values_are_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
port = 8080

[credentials]
api_key = "APIabcdef123456"
api_secret = "supersecret"

[token]
ttl_secs = 600
"#
        )
        .unwrap();

        let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.credentials.api_key, "APIabcdef123456");
        assert_eq!(config.token.ttl_secs, 600);
        assert!(config.validate_credentials().is_ok());
    }

    #[test]
    fn blank_credentials_fail_validation() {
        let config = Config::default();
        assert!(matches!(
            config.validate_credentials(),
            Err(ConfigError::MissingCredentials)
        ));

        let mut config = Config::default();
        config.credentials.api_key = "APIabcdef123456".into();
        config.credentials.api_secret = "   ".into();
        assert!(config.validate_credentials().is_err());
    }

    #[test]
    fn key_preview_is_masked() {
        assert_eq!(masked_key_preview("APIabcdef123456"), "APIabcde...");
        assert_eq!(masked_key_preview("short"), "short...");
    }
}
