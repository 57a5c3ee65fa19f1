use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

use crate::domain::ports::ConnectivityService;

/// Considers the network reachable when a TCP connection to a known host
/// can be opened within the timeout
#[derive(Debug, Clone)]
pub struct TcpProbeConnectivity {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbeConnectivity {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// `host:port`, with IPv6 literals bracketed
    pub fn target(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[async_trait]
impl ConnectivityService for TcpProbeConnectivity {
    async fn is_connected(&self) -> bool {
        let target = self.target();
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(addr = %target, error = %e, "connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(addr = %target, timeout = ?self.timeout, "connectivity probe timed out");
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "probe"
    }
}
