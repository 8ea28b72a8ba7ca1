//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `leaserelay.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use leaserelay_adapter_mikrotik_reqwest::MikrotikConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Router connection and credentials.
    pub mikrotik: MikrotikConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `leaserelay.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("leaserelay.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("LEASERELAY_BIND_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("PORT") {
            self.server.port = parse_number("PORT", &val)?;
        }
        if let Some(val) = var("MIKROTIK_HOST") {
            self.mikrotik.host = val;
        }
        if let Some(val) = var("MIKROTIK_USER") {
            self.mikrotik.username = val;
        }
        if let Some(val) = var("MIKROTIK_PASSWORD") {
            self.mikrotik.password = val;
        }
        if let Some(val) = var("MIKROTIK_TIMEOUT_SECS") {
            self.mikrotik.timeout_secs = parse_number("MIKROTIK_TIMEOUT_SECS", &val)?;
        }
        if let Some(val) = var("LEASERELAY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.mikrotik.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "mikrotik timeout must be non-zero".to_string(),
            ));
        }
        let host = &self.mikrotik.host;
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "mikrotik host must start with http:// or https://, got {host:?}"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, val: &str) -> Result<T, ConfigError> {
    val.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{key} must be a number, got {val:?}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "leaserelayd=info,leaserelay=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.mikrotik.host, "http://192.168.88.1");
        assert_eq!(config.mikrotik.username, "admin");
        assert_eq!(config.mikrotik.password, "1234567890");
        assert_eq!(config.mikrotik.timeout_secs, 10);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [mikrotik]
            host = 'https://10.0.0.1'
            username = 'api'
            password = 'secret'
            timeout_secs = 5
            accept_invalid_certs = true

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.mikrotik.host, "https://10.0.0.1");
        assert_eq!(config.mikrotik.username, "api");
        assert_eq!(config.mikrotik.password, "secret");
        assert_eq!(config.mikrotik.timeout_secs, 5);
        assert!(config.mikrotik.accept_invalid_certs);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("PORT", "8080"),
                ("MIKROTIK_HOST", "http://10.1.1.1"),
                ("MIKROTIK_USER", "relay"),
                ("MIKROTIK_PASSWORD", "pw"),
                ("MIKROTIK_TIMEOUT_SECS", "3"),
            ]))
            .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.mikrotik.host, "http://10.1.1.1");
        assert_eq!(config.mikrotik.username, "relay");
        assert_eq!(config.mikrotik.password, "pw");
        assert_eq!(config.mikrotik.timeout_secs, 3);
    }

    #[test]
    fn should_leave_values_untouched_without_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[])).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.mikrotik.username, "admin");
    }

    #[test]
    fn should_prefer_rust_log_over_leaserelay_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("LEASERELAY_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_reject_non_numeric_port() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.mikrotik.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_host_without_scheme() {
        let mut config = Config::default();
        config.mikrotik.host = "192.168.88.1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
