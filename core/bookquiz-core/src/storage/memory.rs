use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{Guard, KvStore, StorageError};
use crate::metrics::track_storage_operation;

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, handy for seeding legacy or malformed values.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        track_storage_operation(self.backend(), "get", async {
            Ok(self.entries.read().await.get(key).cloned())
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        track_storage_operation(self.backend(), "set", async {
            self.entries
                .write()
                .await
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
        .await
    }

    async fn write_if_unchanged(
        &self,
        guards: &[Guard<'_>],
        writes: &[(&str, &str)],
    ) -> Result<bool, StorageError> {
        track_storage_operation(self.backend(), "write_if_unchanged", async {
            let mut entries = self.entries.write().await;

            let unchanged = guards
                .iter()
                .all(|(key, expected)| entries.get(*key).map(String::as_str) == *expected);
            if !unchanged {
                return Ok(false);
            }

            for (key, value) in writes {
                entries.insert(key.to_string(), value.to_string());
            }
            Ok(true)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn conditional_write_applies_when_guards_hold() {
        let store = MemoryStore::with_entries([("coins", "60")]);

        let written = store
            .write_if_unchanged(
                &[("coins", Some("60")), ("owned", None)],
                &[("coins", "10"), ("owned", "[1]")],
            )
            .await
            .unwrap();

        assert!(written);
        assert_eq!(store.get("coins").await.unwrap().as_deref(), Some("10"));
        assert_eq!(store.get("owned").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn conditional_write_is_skipped_when_a_guard_moved() {
        let store = MemoryStore::with_entries([("coins", "40"), ("owned", "[2]")]);

        let written = store
            .write_if_unchanged(
                &[("coins", Some("40")), ("owned", None)],
                &[("coins", "0"), ("owned", "[1]")],
            )
            .await
            .unwrap();

        assert!(!written);
        assert_eq!(store.get("coins").await.unwrap().as_deref(), Some("40"));
        assert_eq!(store.get("owned").await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = MemoryStore::with_entries([("k", "1")]);
        store.set("k", "2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
    }
}
