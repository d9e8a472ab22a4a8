mod common;

use std::sync::Arc;

use bookquiz_core::config::Config;
use bookquiz_core::models::economy::PurchaseError;
use bookquiz_core::models::question::GameMode;
use bookquiz_core::models::session::Phase;
use bookquiz_core::services::session_service::Advance;
use bookquiz_core::storage::{KvStore, MemoryStore};
use bookquiz_core::AppState;

async fn memory_state() -> AppState {
    common::init_test_tracing();
    AppState::new(Config::default())
        .await
        .expect("memory backend needs no connection")
}

#[tokio::test]
async fn sessions_draw_ten_distinct_items_from_built_in_banks() {
    let state = memory_state().await;

    let mut classic = state.classic_session();
    classic.start().unwrap();
    let ids = classic.pack().unwrap().ids();
    assert_eq!(classic.mode(), GameMode::Classic);
    assert_eq!(ids.len(), 10);
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 10);

    let mut true_false = state.true_false_session();
    true_false.start().unwrap();
    assert_eq!(true_false.mode(), GameMode::TrueFalse);
    assert_eq!(true_false.pack().unwrap().len(), 10);
}

#[tokio::test]
async fn winning_a_round_funds_a_library_purchase() {
    let state = memory_state().await;
    let mut session = state.classic_session();
    session.start().unwrap();

    let grant = loop {
        let correct = session.current_item().unwrap().correct_index();
        session.select(correct);
        session.confirm();
        if let Advance::Finished { phase, grant, .. } = session.advance() {
            assert_eq!(phase, Phase::Win);
            break grant;
        }
    };
    grant.unwrap().settled().await;
    assert_eq!(state.economy.get_balance().await.unwrap(), 30);

    // 30 coins are not enough for a 50 coin story.
    let err = state.purchase_library_item(1).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PurchaseError>(),
        Some(PurchaseError::InsufficientFunds { .. })
    ));

    state.economy.add_coins(20).await.unwrap();
    let receipt = state.purchase_library_item(1).await.unwrap();
    assert_eq!(receipt.balance, 0);

    let shelf = state.shelf().await.unwrap();
    assert_eq!(shelf.len(), 10);
    assert!(shelf.iter().find(|entry| entry.id == 1).unwrap().owned);
    assert_eq!(shelf.iter().filter(|entry| entry.owned).count(), 1);
}

#[tokio::test]
async fn unknown_library_item_is_an_error() {
    let state = memory_state().await;
    state.economy.set_balance(500).await.unwrap();

    let err = state.purchase_library_item(999).await.unwrap_err();

    assert!(err.downcast_ref::<PurchaseError>().is_none());
    assert_eq!(state.economy.get_balance().await.unwrap(), 500);
}

#[tokio::test]
async fn key_prefix_namespaces_the_wallet() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let config = Config {
        key_prefix: "player-2".to_string(),
        ..Config::default()
    };
    let state = AppState::with_store(config, store.clone());

    state.economy.add_coins(15).await.unwrap();

    assert_eq!(
        store
            .get("player-2:@bookcoins_total_v1")
            .await
            .unwrap()
            .as_deref(),
        Some("15")
    );
    assert!(store.get(common::COINS_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn configured_rules_reach_new_sessions() {
    let mut config = Config::default();
    config.rules.pack_size = 4;
    config.rules.starting_lives = 1;
    let state = AppState::with_store(config, Arc::new(MemoryStore::new()));

    let mut session = state.true_false_session();
    session.start().unwrap();

    assert_eq!(session.pack().unwrap().len(), 4);
    assert_eq!(session.lives(), 1);
}
