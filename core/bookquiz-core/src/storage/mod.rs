//! Asynchronous string key-value backends the economy state is persisted in.

use async_trait::async_trait;

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to encode value: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("entries kept changing under a conditional write after {0} attempts")]
    Contended(usize),
}

/// Value a key must still hold for a conditional write to go ahead.
/// `None` means the key must be absent.
pub type Guard<'a> = (&'a str, Option<&'a str>);

/// Durable string dictionary, order-preserving per key.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Backend label used in logs and metrics.
    fn backend(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Applies every write in `writes` as one step, but only if each guard
    /// still matches. Returns `false`, with nothing written, when one moved.
    async fn write_if_unchanged(
        &self,
        guards: &[Guard<'_>],
        writes: &[(&str, &str)],
    ) -> Result<bool, StorageError>;
}
