use serde::{Deserialize, Serialize};

/// Main configuration structure for Monkeyhub
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote monkey feed configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Local HTTP API configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Connectivity check configuration
    #[serde(default)]
    pub connectivity: ConnectivityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourceConfig {
    /// URL returning a JSON array of monkeys
    #[serde(default = "default_source_url")]
    pub url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (None leaves the client default in place)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_source_url() -> String {
    "https://www.montemagno.com/monkeys.json".to_string()
}

fn default_user_agent() -> String {
    format!("monkeyhub/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Local HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which connectivity implementation to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityMode {
    /// Always report connected (server deployments)
    #[default]
    Always,
    /// Probe a TCP endpoint (client deployments)
    Probe,
}

/// Connectivity check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConnectivityConfig {
    #[serde(default)]
    pub mode: ConnectivityMode,

    /// Host used by the TCP probe
    #[serde(default = "default_probe_host")]
    pub probe_host: String,

    /// Port used by the TCP probe
    #[serde(default = "default_probe_port")]
    pub probe_port: u16,

    /// Probe connect timeout in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_probe_host() -> String {
    "www.montemagno.com".to_string()
}

const fn default_probe_port() -> u16 {
    443
}

const fn default_probe_timeout_ms() -> u64 {
    2000
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            mode: ConnectivityMode::default(),
            probe_host: default_probe_host(),
            probe_port: default_probe_port(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
