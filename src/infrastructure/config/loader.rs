use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::{Config, ConnectivityMode};

/// Project-local configuration directory
pub const CONFIG_DIR: &str = ".monkeyhub";

/// Prefix for environment overrides (`MONKEYHUB_SERVER__PORT=8080`)
pub const ENV_PREFIX: &str = "MONKEYHUB_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Source URL cannot be empty")]
    EmptySourceUrl,

    #[error("Invalid source URL: {0}. Must start with http:// or https://")]
    InvalidSourceUrl(String),

    #[error("Invalid timeout_secs: 0. Omit it to use the client default")]
    InvalidTimeout,

    #[error("Server host cannot be empty")]
    EmptyServerHost,

    #[error("Invalid server port: 0")]
    InvalidServerPort,

    #[error("Probe host cannot be empty when connectivity mode is probe")]
    EmptyProbeHost,

    #[error("Invalid probe_timeout_ms: {0}. Must be positive")]
    InvalidProbeTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .monkeyhub/config.yaml (project config, created by init)
    /// 3. .monkeyhub/local.yaml (project local overrides, optional)
    /// 4. Environment variables (MONKEYHUB_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(format!("{CONFIG_DIR}/config.yaml")))
            .merge(Yaml::file(format!("{CONFIG_DIR}/local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let url = config.source.url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptySourceUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidSourceUrl(config.source.url.clone()));
        }
        if config.source.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }

        if config.server.host.is_empty() {
            return Err(ConfigError::EmptyServerHost);
        }
        if config.server.port == 0 {
            return Err(ConfigError::InvalidServerPort);
        }

        if config.connectivity.mode == ConnectivityMode::Probe {
            if config.connectivity.probe_host.is_empty() {
                return Err(ConfigError::EmptyProbeHost);
            }
            if config.connectivity.probe_timeout_ms == 0 {
                return Err(ConfigError::InvalidProbeTimeout(0));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.url, "https://www.montemagno.com/monkeys.json");
        assert!(config.source.timeout_secs.is_none());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.connectivity.mode, ConnectivityMode::Always);
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
source:
  url: http://localhost:5000/api/monkeys
  timeout_secs: 10
server:
  port: 8080
connectivity:
  mode: probe
  probe_host: localhost
  probe_port: 5000
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.source.url, "http://localhost:5000/api/monkeys");
        assert_eq!(config.source.timeout_secs, Some(10));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.connectivity.mode, ConnectivityMode::Probe);
        assert_eq!(config.connectivity.probe_port, 5000);
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_empty_url() {
        let mut config = Config::default();
        config.source.url = String::new();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptySourceUrl)
        ));
    }

    #[test]
    fn test_validate_non_http_url() {
        let mut config = Config::default();
        config.source.url = "ftp://example.com/monkeys.json".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidSourceUrl(url)) => {
                assert_eq!(url, "ftp://example.com/monkeys.json");
            }
            other => panic!("Expected InvalidSourceUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = Some(0);

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidServerPort)
        ));
    }

    #[test]
    fn test_validate_probe_settings_only_checked_in_probe_mode() {
        let mut config = Config::default();
        config.connectivity.probe_host = String::new();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.connectivity.mode = ConnectivityMode::Probe;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyProbeHost)
        ));

        config.connectivity.probe_host = "localhost".to_string();
        config.connectivity.probe_timeout_ms = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidProbeTimeout(0))
        ));
    }

    #[test]
    fn test_validate_invalid_logging() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));

        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogRotation(_))
        ));
    }

    #[test]
    fn test_load_from_file_with_env_override() {
        let file = write_yaml("server:\n  port: 6000\nlogging:\n  level: warn\n");

        let config = temp_env::with_vars(
            [
                ("MONKEYHUB_SERVER__PORT", Some("7000")),
                ("MONKEYHUB_SOURCE__URL", Some("http://localhost:7000/api/monkeys")),
            ],
            || ConfigLoader::load_from_file(file.path()),
        )
        .unwrap();

        assert_eq!(config.server.port, 7000, "Env should win over file");
        assert_eq!(config.source.url, "http://localhost:7000/api/monkeys");
        assert_eq!(config.logging.level, "warn", "File value should persist");
    }

    #[test]
    fn test_load_from_file_rejects_invalid() {
        let file = write_yaml("source:\n  url: not-a-url\n");

        let result = temp_env::with_vars_unset(
            ["MONKEYHUB_SOURCE__URL", "MONKEYHUB_SERVER__PORT"],
            || ConfigLoader::load_from_file(file.path()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_hierarchical_merging() {
        let base_file = write_yaml("server:\n  port: 5001\nlogging:\n  level: info\n  format: json\n");
        let override_file = write_yaml("server:\n  port: 5002\nlogging:\n  level: debug\n");

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.server.port, 5002, "Override should win");
        assert_eq!(
            config.logging.level, "debug",
            "Override should win for nested fields"
        );
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
    }
}
