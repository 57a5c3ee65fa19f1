use async_trait::async_trait;

use crate::domain::models::Monkey;

/// Cached access to the monkey collection
///
/// This is the contract shared by every front end (HTTP API, CLI). Fetch
/// failures are never surfaced here: callers cannot tell "no data yet" from
/// "fetch failed" from "upstream is empty".
#[async_trait]
pub trait MonkeyService: Send + Sync {
    /// Return the cached collection, fetching it first if the cache is empty
    async fn get_monkeys(&self) -> Vec<Monkey>;

    /// Find the first cached monkey whose name matches exactly
    ///
    /// Never triggers a fetch; returns `None` when the cache is empty.
    async fn get_monkey_by_name(&self, name: &str) -> Option<Monkey>;
}
