use async_trait::async_trait;
use lazy_static::lazy_static;
use redis::aio::ConnectionManager;
use std::time::Duration;

use super::{Guard, KvStore, StorageError};
use crate::metrics::track_storage_operation;

// KEYS: guarded keys, then written keys.
// ARGV[1]: guard count; then one expectation per guard ("-" absent, "=" .. value);
// then one value per written key.
const WRITE_IF_UNCHANGED: &str = r#"
local guards = tonumber(ARGV[1])
for i = 1, guards do
  local current = redis.call('GET', KEYS[i])
  local expected = ARGV[i + 1]
  if current == false then
    if expected ~= '-' then return 0 end
  elseif expected ~= '=' .. current then
    return 0
  end
end
for i = guards + 1, #KEYS do
  redis.call('SET', KEYS[i], ARGV[i + 1])
end
return 1
"#;

lazy_static! {
    static ref WRITE_IF_UNCHANGED_SCRIPT: redis::Script = redis::Script::new(WRITE_IF_UNCHANGED);
}

/// Redis-backed store for hosts that keep the wallet outside the process.
///
/// Conditional writes run as one Lua script, so several processes can share a
/// wallet without losing updates.
#[derive(Clone)]
pub struct RedisStore {
    redis: ConnectionManager,
}

impl RedisStore {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    /// Opens a managed connection and verifies it with PING.
    pub async fn connect(uri: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(uri)?;

        tracing::info!("Attempting to connect to Redis...");

        let redis = tokio::time::timeout(Duration::from_secs(30), ConnectionManager::new(client))
            .await
            .map_err(|_| StorageError::Unavailable("Redis connection timeout after 30s".into()))??;

        let mut conn = redis.clone();
        tokio::time::timeout(
            Duration::from_secs(5),
            redis::cmd("PING").query_async::<String>(&mut conn),
        )
        .await
        .map_err(|_| StorageError::Unavailable("Redis PING timeout after 5s".into()))??;

        tracing::info!("Redis connection established successfully");

        Ok(Self::new(redis))
    }
}

#[async_trait]
impl KvStore for RedisStore {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.redis.clone();
        track_storage_operation(self.backend(), "get", async {
            let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
            Ok::<_, StorageError>(value)
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.redis.clone();
        track_storage_operation(self.backend(), "set", async {
            redis::cmd("SET")
                .arg(key)
                .arg(value)
                .query_async::<()>(&mut conn)
                .await?;
            Ok::<_, StorageError>(())
        })
        .await
    }

    async fn write_if_unchanged(
        &self,
        guards: &[Guard<'_>],
        writes: &[(&str, &str)],
    ) -> Result<bool, StorageError> {
        let mut conn = self.redis.clone();
        track_storage_operation(self.backend(), "write_if_unchanged", async {
            let mut invocation = WRITE_IF_UNCHANGED_SCRIPT.prepare_invoke();
            invocation.arg(guards.len());
            for (key, expected) in guards {
                invocation.key(*key).arg(encode_expectation(*expected));
            }
            for (key, value) in writes {
                invocation.key(*key).arg(*value);
            }

            let applied: i64 = invocation.invoke_async(&mut conn).await?;
            Ok::<_, StorageError>(applied == 1)
        })
        .await
    }
}

fn encode_expectation(expected: Option<&str>) -> String {
    match expected {
        Some(value) => format!("={}", value),
        None => "-".to_string(),
    }
}
