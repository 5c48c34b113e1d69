//! Server configuration: TOML file, then environment overrides.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [api]
//! latency_ms = 300
//! mock_size = 200
//! scopes = ["roles:read"]
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```
//!
//! Every section and key is optional.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogFormat;

pub const MAX_MOCK_SIZE: usize = 100_000;

const KNOWN_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {var} value: {value}")]
    Env { var: &'static str, value: String },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Simulated latency before each roles response.
    pub latency_ms: u64,
    /// Number of mock roles generated at startup.
    pub mock_size: usize,
    /// Scopes reported by `/api/auth/info`.
    pub scopes: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            mock_size: crate::mock::MOCK_ROLE_COUNT,
            scopes: vec![
                "roles:read".to_string(),
                "roles:write".to_string(),
                "candidates:read".to_string(),
                "jobs:read".to_string(),
            ],
        }
    }
}

impl ApiSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl ServerConfig {
    /// Parse the file, then apply env overrides and validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `HRDESK_*` environment variables on top of the file values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| env::var(var).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("HRDESK_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HRDESK_SERVER_PORT") {
            self.server.port = parse_env("HRDESK_SERVER_PORT", port)?;
        }
        if let Some(latency) = lookup("HRDESK_LATENCY_MS") {
            self.api.latency_ms = parse_env("HRDESK_LATENCY_MS", latency)?;
        }
        if let Some(size) = lookup("HRDESK_MOCK_SIZE") {
            self.api.mock_size = parse_env("HRDESK_MOCK_SIZE", size)?;
        }
        if let Some(level) = lookup("HRDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HRDESK_LOG_FORMAT") {
            self.logging.format = parse_env("HRDESK_LOG_FORMAT", format)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        if self.api.mock_size > MAX_MOCK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "api.mock_size must be at most {}, got {}",
                MAX_MOCK_SIZE, self.api.mock_size
            )));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !KNOWN_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of {:?}, got {:?}",
                KNOWN_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }

    /// `"host:port"` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.api.latency(), Duration::from_millis(300));
        assert_eq!(config.api.mock_size, 200);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ServerConfig::from_toml_str(
            r#"
            [server]
            port = 8080

            [api]
            latency_ms = 0
            scopes = ["roles:read"]

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.latency_ms, 0);
        assert_eq!(config.api.mock_size, 200);
        assert_eq!(config.api.scopes, vec!["roles:read"]);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = ServerConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HRDESK_SERVER_HOST", "0.0.0.0"),
            ("HRDESK_SERVER_PORT", "9000"),
            ("HRDESK_LATENCY_MS", "25"),
            ("HRDESK_MOCK_SIZE", "50"),
            ("HRDESK_LOG_LEVEL", "debug"),
            ("HRDESK_LOG_FORMAT", "jsonl"),
        ]);
        let mut config = ServerConfig::default();
        config
            .apply_overrides(|var| vars.get(var).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.api.latency_ms, 25);
        assert_eq!(config.api.mock_size, 50);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn bad_env_value_names_the_variable() {
        let mut config = ServerConfig::default();
        let err = config
            .apply_overrides(|var| (var == "HRDESK_SERVER_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid HRDESK_SERVER_PORT value: http");
    }

    #[test]
    fn validation() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.logging.level = "loud".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.logging.level = "WARN".into();
        config.api.mock_size = MAX_MOCK_SIZE + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.api.mock_size = 10;
        config.server.host = " ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
