use anyhow::Context;
use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::content;
use crate::models::economy::{PurchaseError, PurchaseReceipt};
use crate::models::library::ShelfEntry;
use crate::models::question::{MultipleChoiceItem, QuestionBank, TrueFalseItem};
use crate::storage::{KvStore, MemoryStore, RedisStore};

use economy_service::{EconomyService, StorageKeys};
use pack_builder::RngPermuter;
use session_service::{QuizSession, RewardSink};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn KvStore>,
    pub economy: Arc<EconomyService>,
    pub classic_bank: Arc<QuestionBank<MultipleChoiceItem>>,
    pub true_false_bank: Arc<QuestionBank<TrueFalseItem>>,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn KvStore> = match config.storage_backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Arc::new(MemoryStore::new())
            }
            StorageBackend::Redis => {
                let uri = config
                    .redis_uri
                    .as_deref()
                    .context("redis backend selected without a redis URI")?;
                Arc::new(RedisStore::connect(uri).await?)
            }
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn KvStore>) -> Self {
        let keys = StorageKeys::with_prefix(&config.key_prefix);
        let economy = Arc::new(EconomyService::new(store.clone(), keys));

        Self {
            config,
            store,
            economy,
            classic_bank: content::classic_bank(),
            true_false_bank: content::true_false_bank(),
        }
    }

    pub fn classic_session(&self) -> QuizSession<MultipleChoiceItem> {
        self.session(self.classic_bank.clone())
    }

    pub fn true_false_session(&self) -> QuizSession<TrueFalseItem> {
        self.session(self.true_false_bank.clone())
    }

    fn session<I>(&self, bank: Arc<QuestionBank<I>>) -> QuizSession<I>
    where
        I: crate::models::question::QuizItem,
    {
        let rewards: Arc<dyn RewardSink> = self.economy.clone();
        QuizSession::with_permuter(bank, self.config.rules, RngPermuter::default(), rewards)
    }

    /// Library catalog with the current ownership flags.
    pub async fn shelf(&self) -> anyhow::Result<Vec<ShelfEntry>> {
        let owned = self.economy.get_owned().await?;

        Ok(content::library()
            .iter()
            .map(|item| ShelfEntry {
                id: item.id,
                title: item.title.clone(),
                price: item.price,
                owned: owned.contains(&item.id),
            })
            .collect())
    }

    /// Buys a library entry at its catalog price.
    ///
    /// Rejections come back as a [`PurchaseError`] inside the `anyhow::Error`.
    pub async fn purchase_library_item(&self, id: u32) -> anyhow::Result<PurchaseReceipt> {
        let item = content::find_library_item(id)
            .with_context(|| format!("library item {} does not exist", id))?;

        let receipt: Result<PurchaseReceipt, PurchaseError> =
            self.economy.purchase(item.id, item.price).await;
        Ok(receipt?)
    }
}

pub mod economy_service;
pub mod pack_builder;
pub mod session_service;
