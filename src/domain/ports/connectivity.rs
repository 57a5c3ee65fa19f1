use async_trait::async_trait;

/// Network availability check consumed by client front ends
#[async_trait]
pub trait ConnectivityService: Send + Sync {
    /// Whether the network is currently reachable
    async fn is_connected(&self) -> bool;

    /// Short name of the implementation, for status output
    fn name(&self) -> &'static str;
}
