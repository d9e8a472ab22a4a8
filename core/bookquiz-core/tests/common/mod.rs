#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use bookquiz_core::models::question::{QuestionBank, TrueFalseItem};
use bookquiz_core::models::session::SessionRules;
use bookquiz_core::services::economy_service::{EconomyService, StorageKeys};
use bookquiz_core::services::pack_builder::Permuter;
use bookquiz_core::services::session_service::{Advance, QuizSession};
use bookquiz_core::storage::{Guard, KvStore, MemoryStore, StorageError};

pub const COINS_KEY: &str = "@bookcoins_total_v1";
pub const OWNED_KEY: &str = "@bookcoins_owned_novels_v1";

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Keeps bank order so tests know which item comes next.
pub struct Identity;

impl Permuter for Identity {
    fn permute<T>(&mut self, _items: &mut [T]) {}
}

/// Statements 1..=size; the answer is `true` for even ids.
pub fn true_false_bank(size: u32) -> Arc<QuestionBank<TrueFalseItem>> {
    let items = (1..=size)
        .map(|id| TrueFalseItem::new(id, format!("statement {}", id), id % 2 == 0).unwrap())
        .collect();
    Arc::new(QuestionBank::new(items).unwrap())
}

pub fn economy_with(entries: Vec<(&str, &str)>) -> (Arc<MemoryStore>, Arc<EconomyService>) {
    let store = Arc::new(MemoryStore::with_entries(entries));
    let economy = Arc::new(EconomyService::new(store.clone(), StorageKeys::default()));
    (store, economy)
}

pub fn session_over(
    bank: Arc<QuestionBank<TrueFalseItem>>,
    economy: Arc<EconomyService>,
) -> QuizSession<TrueFalseItem, Identity> {
    QuizSession::with_permuter(bank, SessionRules::default(), Identity, economy)
}

/// Answers the current statement right or wrong and moves on.
pub fn answer(
    session: &mut QuizSession<TrueFalseItem, Identity>,
    correct: bool,
) -> Advance {
    let truth = session.current_item().unwrap().answer();
    session.select(if correct { truth } else { !truth });
    session.confirm();
    session.advance()
}

/// In-memory store whose reads or writes can be switched to fail, and which
/// can play a second process writing to the same wallet.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes_to: Mutex<Option<String>>,
    foreign_writes: Mutex<VecDeque<(String, String)>>,
}

impl FailingStore {
    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        Self {
            inner: MemoryStore::with_entries(entries),
            ..Default::default()
        }
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    /// Writes to `key` fail until cleared with `None`.
    pub fn fail_writes_to(&self, key: Option<&str>) {
        *self.fail_writes_to.lock().unwrap() = key.map(str::to_string);
    }

    /// Queues a write that lands just before the next conditional write,
    /// one per conditional write.
    pub fn write_from_elsewhere(&self, key: &str, value: &str) {
        self.foreign_writes
            .lock()
            .unwrap()
            .push_back((key.to_string(), value.to_string()));
    }

    fn is_blocked(&self, key: &str) -> bool {
        self.fail_writes_to.lock().unwrap().as_deref() == Some(key)
    }
}

#[async_trait]
impl KvStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.is_blocked(key) {
            return Err(StorageError::Unavailable(format!("writes to {} disabled", key)));
        }
        self.inner.set(key, value).await
    }

    async fn write_if_unchanged(
        &self,
        guards: &[Guard<'_>],
        writes: &[(&str, &str)],
    ) -> Result<bool, StorageError> {
        if let Some((key, _)) = writes.iter().find(|(key, _)| self.is_blocked(key)) {
            return Err(StorageError::Unavailable(format!("writes to {} disabled", key)));
        }

        let foreign = self.foreign_writes.lock().unwrap().pop_front();
        if let Some((key, value)) = foreign {
            self.inner.set(&key, &value).await?;
        }

        self.inner.write_if_unchanged(guards, writes).await
    }
}
