//! Response cache keyed by the serialized request.

use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;

/// Memoizes agent results by request.
///
/// Generator and roadmap caches never evict; the analyzer cache expires
/// entries after a TTL.
#[derive(Clone)]
pub struct ResponseCache<V: Clone + Send + Sync + 'static> {
    inner: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> ResponseCache<V> {
    pub fn unbounded() -> Self {
        Self {
            inner: Cache::builder().build(),
        }
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_live(ttl).build(),
        }
    }

    /// Cache key for a request: its JSON serialization.
    pub fn key_for<P: Serialize>(params: &P) -> Result<String, serde_json::Error> {
        serde_json::to_string(params)
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, value: V) {
        self.inner.insert(key, value).await;
    }

    #[cfg(test)]
    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}
