use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::metrics::record_purchase;
use crate::models::economy::{PurchaseError, PurchaseReceipt};
use crate::services::session_service::RewardSink;
use crate::storage::{KvStore, StorageError};
use crate::utils::codec::{decode_coins, decode_owned, encode_coins, encode_owned};

const COINS_KEY: &str = "@bookcoins_total_v1";
const OWNED_KEY: &str = "@bookcoins_owned_novels_v1";

/// Conditional write attempts before giving up on a contended wallet.
const MAX_WRITE_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub coins: String,
    pub owned: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            coins: COINS_KEY.to_string(),
            owned: OWNED_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    /// Namespaced keys, e.g. one wallet per profile on a shared backend.
    pub fn with_prefix(prefix: &str) -> Self {
        if prefix.is_empty() {
            return Self::default();
        }
        Self {
            coins: format!("{}:{}", prefix, COINS_KEY),
            owned: format!("{}:{}", prefix, OWNED_KEY),
        }
    }
}

/// Wallet balance and owned library entries.
///
/// Mutations on one instance queue behind an async mutex. Every read-modify-write
/// is committed with a conditional store write, so an update from another
/// process sharing the backend makes the write retry against fresh values.
pub struct EconomyService {
    store: Arc<dyn KvStore>,
    keys: StorageKeys,
    write_lock: Mutex<()>,
}

impl EconomyService {
    pub fn new(store: Arc<dyn KvStore>, keys: StorageKeys) -> Self {
        Self {
            store,
            keys,
            write_lock: Mutex::new(()),
        }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub async fn get_balance(&self) -> Result<u64, StorageError> {
        let raw = self.store.get(&self.keys.coins).await?;
        Ok(decode_coins(raw.as_deref()))
    }

    /// Adds `delta` (which may be negative) and returns the new balance.
    /// The balance floors at zero.
    pub async fn add_coins(&self, delta: i64) -> Result<u64, StorageError> {
        let _guard = self.write_lock.lock().await;

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let raw = self.store.get(&self.keys.coins).await?;
            let current = decode_coins(raw.as_deref());
            let next = if delta >= 0 {
                current.saturating_add(delta.unsigned_abs())
            } else {
                current.saturating_sub(delta.unsigned_abs())
            };

            let coins_key = self.keys.coins.as_str();
            let encoded = encode_coins(next);
            let written = self
                .store
                .write_if_unchanged(
                    &[(coins_key, raw.as_deref())],
                    &[(coins_key, encoded.as_str())],
                )
                .await?;
            if written {
                tracing::debug!("Balance changed: {} -> {} (delta={})", current, next, delta);
                return Ok(next);
            }
            tracing::debug!("Balance moved while adding {} coins, retrying", delta);
        }

        Err(StorageError::Contended(MAX_WRITE_ATTEMPTS))
    }

    pub async fn set_balance(&self, value: u64) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.write_balance(value).await
    }

    pub async fn get_owned(&self) -> Result<BTreeSet<u32>, StorageError> {
        let raw = self.store.get(&self.keys.owned).await?;
        Ok(decode_owned(raw.as_deref()))
    }

    pub async fn is_owned(&self, item_id: u32) -> Result<bool, StorageError> {
        Ok(self.get_owned().await?.contains(&item_id))
    }

    /// Buys `item_id` for `price` if it is not owned yet and the wallet covers it.
    ///
    /// Ownership is checked before affordability.
    pub async fn purchase(&self, item_id: u32, price: u64) -> Result<PurchaseReceipt, PurchaseError> {
        let result = self.purchase_locked(item_id, price).await;

        match &result {
            Ok(receipt) => {
                record_purchase("success");
                tracing::info!(
                    "Purchase completed: item={}, price={}, balance={}",
                    item_id,
                    price,
                    receipt.balance
                );
            }
            Err(PurchaseError::Unknown(e)) => {
                record_purchase("unknown");
                tracing::error!("Purchase of item {} failed: {}", item_id, e);
            }
            Err(e) => {
                record_purchase(e.reason());
                tracing::info!("Purchase of item {} rejected: {}", item_id, e);
            }
        }

        result
    }

    async fn purchase_locked(&self, item_id: u32, price: u64) -> Result<PurchaseReceipt, PurchaseError> {
        let _guard = self.write_lock.lock().await;

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let (raw_coins, raw_owned) = tokio::try_join!(
                self.store.get(&self.keys.coins),
                self.store.get(&self.keys.owned)
            )?;
            let balance = decode_coins(raw_coins.as_deref());
            let mut owned = decode_owned(raw_owned.as_deref());

            if owned.contains(&item_id) {
                return Err(PurchaseError::AlreadyOwned(item_id));
            }
            if balance < price {
                return Err(PurchaseError::InsufficientFunds { price, balance });
            }

            let next_balance = balance - price;
            owned.insert(item_id);
            let encoded_coins = encode_coins(next_balance);
            let encoded_owned = encode_owned(&owned).map_err(StorageError::from)?;
            let (coins_key, owned_key) = (self.keys.coins.as_str(), self.keys.owned.as_str());

            // Balance and ownership land together or not at all.
            let written = self
                .store
                .write_if_unchanged(
                    &[
                        (coins_key, raw_coins.as_deref()),
                        (owned_key, raw_owned.as_deref()),
                    ],
                    &[(coins_key, encoded_coins.as_str()), (owned_key, encoded_owned.as_str())],
                )
                .await?;
            if written {
                return Ok(PurchaseReceipt {
                    item_id,
                    price,
                    balance: next_balance,
                });
            }
            tracing::debug!("Wallet moved during purchase of item {}, retrying", item_id);
        }

        Err(StorageError::Contended(MAX_WRITE_ATTEMPTS).into())
    }

    async fn write_balance(&self, value: u64) -> Result<(), StorageError> {
        self.store.set(&self.keys.coins, &encode_coins(value)).await
    }
}

#[async_trait]
impl RewardSink for EconomyService {
    async fn grant(&self, amount: u64) -> Result<u64, StorageError> {
        self.add_coins(i64::try_from(amount).unwrap_or(i64::MAX)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn service_with(entries: Vec<(&str, &str)>) -> EconomyService {
        EconomyService::new(
            Arc::new(MemoryStore::with_entries(entries)),
            StorageKeys::default(),
        )
    }

    #[tokio::test]
    async fn add_coins_floors_at_zero() {
        let economy = service_with(vec![(COINS_KEY, "10")]);
        assert_eq!(economy.add_coins(-1000).await.unwrap(), 0);
        assert_eq!(economy.get_balance().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn add_coins_persists_decimal_text() {
        let store = Arc::new(MemoryStore::new());
        let economy = EconomyService::new(store.clone(), StorageKeys::default());

        economy.add_coins(12).await.unwrap();
        economy.add_coins(5).await.unwrap();

        assert_eq!(store.get(COINS_KEY).await.unwrap().as_deref(), Some("17"));
    }

    #[tokio::test]
    async fn owned_set_is_written_sorted() {
        let store = Arc::new(MemoryStore::with_entries([
            (COINS_KEY, "200"),
            (OWNED_KEY, "[7]"),
        ]));
        let economy = EconomyService::new(store.clone(), StorageKeys::default());

        economy.purchase(2, 50).await.unwrap();

        assert_eq!(store.get(OWNED_KEY).await.unwrap().as_deref(), Some("[2,7]"));
        assert!(economy.is_owned(7).await.unwrap());
    }

    #[tokio::test]
    async fn ownership_is_checked_before_funds() {
        let economy = service_with(vec![(COINS_KEY, "3"), (OWNED_KEY, "[4]")]);

        let err = economy.purchase(4, 50).await.unwrap_err();

        assert!(matches!(err, PurchaseError::AlreadyOwned(4)));
        assert_eq!(economy.get_balance().await.unwrap(), 3);
    }

    #[test]
    fn prefixed_keys_keep_default_names() {
        let keys = StorageKeys::with_prefix("profile-1");
        assert_eq!(keys.coins, "profile-1:@bookcoins_total_v1");
        assert_eq!(StorageKeys::with_prefix(""), StorageKeys::default());
    }
}
