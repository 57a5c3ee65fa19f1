use async_trait::async_trait;

use crate::domain::errors::FetchResult;
use crate::domain::models::Monkey;

/// Source of the full monkey collection
///
/// Implementations perform exactly one upstream request per call and do no
/// caching of their own.
#[async_trait]
pub trait MonkeySource: Send + Sync {
    /// Fetch the whole collection
    ///
    /// # Returns
    /// * `Ok(Some(monkeys))` - decoded payload
    /// * `Ok(None)` - upstream answered with a JSON `null`
    /// * `Err(FetchError)` - network, status or decode failure
    async fn fetch_monkeys(&self) -> FetchResult<Option<Vec<Monkey>>>;
}
