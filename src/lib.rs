//! Monkeyhub - shared monkey data service
//!
//! Fetches a list of monkeys from a remote JSON feed once, caches it in
//! memory for the life of the process, and serves it to two front ends: a
//! local HTTP API and a command-line client shell.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Monkey model, configuration model, port traits
//! - **Application Layer** (`application`): Wiring of adapters and services
//! - **Service Layer** (`services`): The fetch/cache/lookup service
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, HTTP API, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use monkeyhub::{build_http_client, HttpMonkeySource, MonkeyDataService, MonkeyService, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SourceConfig::default();
//!     let source = HttpMonkeySource::new(build_http_client(&config)?, config.url.clone());
//!     let service = MonkeyDataService::new(Arc::new(source));
//!     let monkeys = service.get_monkeys().await;
//!     println!("{} monkeys", monkeys.len());
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::AppContext;
pub use domain::errors::{FetchError, FetchResult};
pub use domain::models::{
    Config, ConnectivityConfig, ConnectivityMode, LoggingConfig, Monkey, ServerConfig,
    SourceConfig,
};
pub use domain::ports::{ConnectivityService, MonkeyService, MonkeySource};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::connectivity::{AlwaysConnected, TcpProbeConnectivity};
pub use infrastructure::http::{build_http_client, HttpMonkeySource};
pub use services::MonkeyDataService;
