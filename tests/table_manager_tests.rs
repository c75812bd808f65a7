use std::sync::Arc;

use holdem_engine::domain::{Chips, TableConfig, TableState};
use holdem_engine::engine::{EngineError, ManagerError, TableEngine, TableManager};
use holdem_engine::eval::StandardEvaluator;
use holdem_engine::infra::{DeterministicRng, ShuffledDecks};

fn new_table(seed: u64) -> TableEngine {
    TableEngine::new(
        TableConfig::default(),
        ShuffledDecks::new(DeterministicRng::from_seed(seed)),
        StandardEvaluator,
    )
}

/// Сыграть одну раздачу heads-up до шоудауна: raise 3, call, чеки.
fn play_hand(manager: &TableManager, table_id: u64) -> Result<Chips, ManagerError> {
    manager.with_table(table_id, |engine| {
        engine.add_player("alice", "alice")?;
        engine.add_player("bob", "bob")?;
        engine.start()?;
        engine.perform("raise", 3)?;
        engine.perform("call", 0)?;
        while engine.state().is_betting() {
            engine.perform("check", 0)?;
        }
        Ok(engine.pot())
    })
}

#[test]
fn table_ids_are_unique_and_sorted() {
    let manager = TableManager::new();
    let a = manager.add_table(new_table(1));
    let b = manager.add_table(new_table(2));

    assert_ne!(a, b);
    assert_eq!(manager.table_ids(), vec![a, b]);
}

#[test]
fn unknown_table_is_an_error() {
    let manager = TableManager::new();
    let err = manager.with_table(99, |engine| Ok(engine.state())).unwrap_err();
    assert!(matches!(err, ManagerError::TableNotFound(99)));
}

#[test]
fn engine_errors_pass_through() {
    let manager = TableManager::new();
    let id = manager.add_table(new_table(1));

    let err = manager
        .with_table(id, |engine| engine.perform("check", 0))
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Engine(EngineError::HandNotInProgress(TableState::Open))
    ));
}

#[test]
fn removed_table_is_gone() {
    let manager = TableManager::new();
    let id = manager.add_table(new_table(1));

    assert!(manager.remove_table(id).is_some());
    assert!(manager.table(id).is_err());
    assert!(manager.table_ids().is_empty());
}

#[tokio::test]
async fn tables_play_independently_in_parallel() {
    let manager = Arc::new(TableManager::new());
    let ids: Vec<u64> = (0..4).map(|seed| manager.add_table(new_table(seed))).collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let manager = Arc::clone(&manager);
            tokio::task::spawn_blocking(move || play_hand(&manager, id))
        })
        .collect();

    for handle in handles {
        let pot = handle.await.unwrap().unwrap();
        assert_eq!(pot, Chips(6));
    }

    for id in ids {
        let state = manager.with_table(id, |engine| Ok(engine.state())).unwrap();
        assert_eq!(state, TableState::Ended);
    }
}

#[tokio::test]
async fn concurrent_commands_on_one_table_are_serialized() {
    let manager = Arc::new(TableManager::new());
    let id = manager.add_table(new_table(5));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = Arc::clone(&manager);
            tokio::task::spawn_blocking(move || {
                let player = format!("player-{i}");
                manager.with_table(id, |engine| engine.add_player(&player, &player))
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let table = manager.table(id).unwrap();
    let engine = table.lock().unwrap();
    assert_eq!(engine.players().len(), 8);
    assert!(engine.players().iter().all(|p| p.cash() == Chips(100)));
}
