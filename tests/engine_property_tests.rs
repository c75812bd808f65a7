//! Свойства движка на случайных последовательностях действий:
//! - отклонённое действие ничего не меняет;
//! - фишки сохраняются;
//! - банк за раздачу только растёт;
//! - ход всегда у активного игрока;
//! - принятый raise строго выше предыдущей ставки;
//! - после смены улицы ставок нет, банк = сумма собранных улиц;
//! - при всех активных ход идёт строго по кругу.

use proptest::prelude::*;

use holdem_engine::domain::{Chips, TableConfig, TableState};
use holdem_engine::engine::{HandEventKind, PlayerAction, TableEngine};
use holdem_engine::eval::StandardEvaluator;
use holdem_engine::infra::{DeterministicRng, ShuffledDecks};

const NAMES: [&str; 4] = ["alice", "bob", "carol", "dave"];

fn action_from(kind: u8, amount: u64) -> PlayerAction {
    match kind {
        0 => PlayerAction::Check,
        1 => PlayerAction::Call,
        2 => PlayerAction::Raise(Chips(amount)),
        _ => PlayerAction::Fold,
    }
}

fn collected_so_far(engine: &TableEngine) -> Chips {
    engine
        .history()
        .events
        .iter()
        .filter_map(|e| match e.kind {
            HandEventKind::StreetChanged { collected, .. } => Some(collected),
            _ => None,
        })
        .sum()
}

fn fresh_table(seats: usize, seed: u64) -> TableEngine {
    let mut engine = TableEngine::new(
        TableConfig::default(),
        ShuffledDecks::new(DeterministicRng::from_seed(seed)),
        StandardEvaluator,
    );
    for name in &NAMES[..seats] {
        engine.add_player(name, name).unwrap();
    }
    engine
}

fn chips_on_table(engine: &TableEngine) -> u64 {
    let players: u64 = engine
        .players()
        .iter()
        .map(|p| p.cash().0 + p.current_bet().0)
        .sum();
    // После конца раздачи банк уже выплачен, но продолжает отображаться.
    if engine.state() == TableState::Ended {
        players
    } else {
        players + engine.pot().0
    }
}

proptest! {
    #[test]
    fn random_play_keeps_table_invariants(
        seats in 2usize..=4,
        seed in any::<u64>(),
        moves in prop::collection::vec((0u8..4, 0u64..=110), 0..80),
    ) {
        let mut engine = fresh_table(seats, seed);
        let total = chips_on_table(&engine);
        engine.start().unwrap();

        for (kind, amount) in moves {
            if engine.state() == TableState::Ended {
                engine.start().unwrap();
                if engine.state() != TableState::PreFlop {
                    break;
                }
            }

            let action = action_from(kind, amount);
            let before = engine.data().clone();

            match engine.perform_action(action) {
                Err(err) => {
                    prop_assert!(!err.is_invariant_violation(), "{err}");
                    prop_assert_eq!(engine.data(), &before);
                }
                Ok(()) => {
                    if let PlayerAction::Raise(to) = action {
                        prop_assert!(to > before.betting.last_bet);
                    }
                    prop_assert!(engine.pot() >= before.pot.total);

                    if engine.state() != before.state && engine.state().is_betting() {
                        prop_assert!(engine.bets().is_empty());
                        prop_assert_eq!(engine.last_bet(), Chips::ZERO);
                        prop_assert_eq!(engine.pot(), collected_so_far(&engine));
                    }
                    if engine.state().is_betting() {
                        let current = engine.current_player();
                        prop_assert!(current.map_or(false, |p| p.is_active()));
                        prop_assert_eq!(engine.winner().map(|p| p.id()), None);
                    } else {
                        prop_assert!(engine.current_player().is_none());
                        prop_assert!(engine.winner().is_some());
                    }
                }
            }

            prop_assert_eq!(chips_on_table(&engine), total);
        }
    }

    #[test]
    fn checks_rotate_through_every_seat(seats in 2usize..=4, seed in any::<u64>()) {
        let mut engine = fresh_table(seats, seed);
        engine.start().unwrap();

        for street in [TableState::PreFlop, TableState::Flop, TableState::Turn] {
            for i in 0..seats {
                prop_assert_eq!(engine.state(), street);
                prop_assert_eq!(engine.current_player_index(), Some(i));
                engine.perform_action(PlayerAction::Check).unwrap();
            }
            prop_assert_eq!(engine.current_player_index(), Some(0));
        }
    }
}
