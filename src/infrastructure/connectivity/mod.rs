//! Connectivity adapters
//!
//! One port, two implementations, chosen from configuration at startup:
//! - `AlwaysConnected` for server deployments
//! - `TcpProbeConnectivity` for client shells that should check the network

pub mod probe;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::{ConnectivityConfig, ConnectivityMode};
use crate::domain::ports::ConnectivityService;

pub use probe::TcpProbeConnectivity;

/// Reports the network as always reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConnected;

#[async_trait]
impl ConnectivityService for AlwaysConnected {
    async fn is_connected(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "always"
    }
}

/// Select the connectivity implementation named by the configuration
pub fn connectivity_from_config(config: &ConnectivityConfig) -> Arc<dyn ConnectivityService> {
    match config.mode {
        ConnectivityMode::Always => Arc::new(AlwaysConnected),
        ConnectivityMode::Probe => Arc::new(TcpProbeConnectivity::new(
            config.probe_host.clone(),
            config.probe_port,
            Duration::from_millis(config.probe_timeout_ms),
        )),
    }
}
