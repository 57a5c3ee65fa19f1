//! Monkey data service: fetch once, cache forever, look up by name.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::models::Monkey;
use crate::domain::ports::{MonkeyService, MonkeySource};

/// In-memory cache in front of a [`MonkeySource`].
///
/// The cache starts empty and is filled by the first fetch that succeeds.
/// After that it is authoritative for the lifetime of the service. Fetches
/// are not deduplicated: callers racing on a cold cache may each hit the
/// source, but only the first non-empty payload is installed.
pub struct MonkeyDataService<S: MonkeySource> {
    source: Arc<S>,
    cache: RwLock<Vec<Monkey>>,
}

impl<S: MonkeySource> MonkeyDataService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Create a service whose cache is already populated.
    pub fn with_cache(source: Arc<S>, monkeys: Vec<Monkey>) -> Self {
        Self {
            source,
            cache: RwLock::new(monkeys),
        }
    }

    /// Number of cached monkeys.
    pub async fn cached_len(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn snapshot(&self) -> Vec<Monkey> {
        self.cache.read().await.clone()
    }
}

#[async_trait]
impl<S: MonkeySource> MonkeyService for MonkeyDataService<S> {
    async fn get_monkeys(&self) -> Vec<Monkey> {
        {
            let cache = self.cache.read().await;
            if !cache.is_empty() {
                debug!(count = cache.len(), "serving monkeys from cache");
                return cache.clone();
            }
        }

        // The read guard is released before the request so lookups are not
        // blocked on the network.
        match self.source.fetch_monkeys().await {
            Ok(payload) => {
                let monkeys = payload.unwrap_or_default();
                info!(count = monkeys.len(), "fetched monkeys");
                let mut cache = self.cache.write().await;
                // A racing caller may have filled the cache while we waited.
                if cache.is_empty() {
                    *cache = monkeys;
                }
                cache.clone()
            }
            Err(e) => {
                warn!(error = %e, "Error fetching data");
                self.snapshot().await
            }
        }
    }

    async fn get_monkey_by_name(&self, name: &str) -> Option<Monkey> {
        self.cache
            .read()
            .await
            .iter()
            .find(|m| m.is_named(name))
            .cloned()
    }
}
