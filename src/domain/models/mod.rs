pub mod config;
pub mod monkey;

pub use config::{
    Config, ConnectivityConfig, ConnectivityMode, LoggingConfig, ServerConfig, SourceConfig,
};
pub use monkey::Monkey;
