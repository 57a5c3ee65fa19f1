//! Monkeyhub setup and initialization infrastructure
//!
//! Creates the project-local `.monkeyhub/` directory and its default
//! configuration file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::config::loader::CONFIG_DIR;

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Monkeyhub Configuration
# Override settings by editing this file, adding .monkeyhub/local.yaml,
# or setting environment variables with the MONKEYHUB_ prefix
#
# Example environment variables:
#   export MONKEYHUB_SOURCE__URL=http://127.0.0.1:5000/api/monkeys
#   export MONKEYHUB_SERVER__PORT=8080
#   export MONKEYHUB_LOGGING__LEVEL=debug

# Remote monkey feed
source:
  # URL returning a JSON array of monkeys. Point a client shell at another
  # instance's /api/monkeys to share one cached copy.
  url: "https://www.montemagno.com/monkeys.json"

  # Request timeout in seconds (omit to keep the HTTP client default)
  # timeout_secs: 30

# Local HTTP API (monkeyhub serve)
server:
  host: "127.0.0.1"
  port: 5000

# Network availability check used by the CLI before fetching
connectivity:
  # always: assume connected. probe: open a TCP connection to probe_host
  mode: "always"
  probe_host: "www.montemagno.com"
  probe_port: 443
  probe_timeout_ms: 2000

# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: "info"

  # Log format: json, pretty
  format: "pretty"

  # Directory for rolling JSON log files (stderr only when unset)
  # log_dir: ".monkeyhub/logs"

  # File rotation: daily, hourly, never
  rotation: "daily"
"#;

/// Paths used by setup
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl SetupPaths {
    /// Get setup paths rooted at `root`
    pub fn under(root: impl AsRef<Path>) -> Self {
        let config_dir = root.as_ref().join(CONFIG_DIR);
        Self {
            config_file: config_dir.join("config.yaml"),
            config_dir,
        }
    }

    /// Check if Monkeyhub is already initialized
    pub fn is_initialized(&self) -> bool {
        self.config_file.exists()
    }
}

/// Create the configuration directory
pub fn create_config_dir(paths: &SetupPaths) -> Result<()> {
    fs::create_dir_all(&paths.config_dir).context("Failed to create config directory")?;
    Ok(())
}

/// Create the default configuration file
///
/// Returns whether the file was written.
pub fn create_config_file(paths: &SetupPaths, force: bool) -> Result<bool> {
    if paths.config_file.exists() && !force {
        return Ok(false);
    }

    fs::write(&paths.config_file, DEFAULT_CONFIG_TEMPLATE)
        .context("Failed to write config file")?;

    Ok(true)
}
