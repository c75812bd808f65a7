use std::collections::HashSet;

use holdem_engine::domain::{
    parse_cards, Card, Chips, ConfigError, Deck, Player, Rank, Suit, TableConfig, TableState,
};
use holdem_engine::engine::EngineError;
use holdem_engine::eval::{describe_hand, evaluate_best_hand, HandCategory, HandEvaluator, StandardEvaluator};

//
// domain
//
#[test]
fn card_parse_and_display() {
    let card: Card = "Td".parse().unwrap();
    assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(card.to_string(), "Td");
    assert!("1x".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
}

#[test]
fn standard_deck_has_52_distinct_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.cards.iter().collect::<HashSet<_>>().len(), 52);
}

#[test]
fn scripted_deck_draws_first_card_first() {
    let mut deck = Deck::from_top(parse_cards("Ah 2c").unwrap());
    assert_eq!(deck.draw_one(), Some("Ah".parse().unwrap()));
    assert_eq!(deck.draw_one(), Some("2c".parse().unwrap()));
    assert_eq!(deck.draw_one(), None);
    assert!(deck.is_empty());
}

#[test]
fn player_bet_moves_cash_into_bet() {
    let mut player = Player::new("alice", "Alice", Chips(100));
    player.bet(Chips(30)).unwrap();
    player.bet(Chips(10)).unwrap();

    assert_eq!(player.cash(), Chips(60));
    assert_eq!(player.current_bet(), Chips(40));
    assert_eq!(player.max_total_bet(), Chips(100));
    assert_eq!(player.take_bet(), Chips(40));
    assert_eq!(player.current_bet(), Chips::ZERO);
}

#[test]
fn player_state_is_read_through_accessors() {
    let mut player = Player::new("alice", "Alice", Chips(50));
    let cards = parse_cards("Ah Kd").unwrap();
    player.deal(cards[0], cards[1]);
    player.set_active();
    player.deduct_cash(Chips(20)).unwrap();

    assert_eq!(player.id(), "alice");
    assert_eq!(player.name(), "Alice");
    assert_eq!(player.cash(), Chips(30));
    assert_eq!(player.hole_cards(), cards.as_slice());
    assert!(player.is_active());

    player.clear_hand();
    player.set_inactive();
    assert!(player.hole_cards().is_empty());
    assert!(!player.is_active());
}

#[test]
fn player_cannot_bet_more_than_cash() {
    let mut player = Player::new("alice", "Alice", Chips(10));
    assert_eq!(
        player.bet(Chips(11)),
        Err(EngineError::NotEnoughCash {
            needed: Chips(11),
            available: Chips(10),
        })
    );
    assert_eq!(player.cash(), Chips(10));
    assert_eq!(player.current_bet(), Chips::ZERO);
}

#[test]
fn table_states_advance_in_order() {
    let mut state = TableState::Open;
    let mut seen = vec![state];
    while state != TableState::Ended {
        state = state.next();
        seen.push(state);
    }
    assert_eq!(
        seen,
        vec![
            TableState::Open,
            TableState::PreFlop,
            TableState::Flop,
            TableState::Turn,
            TableState::River,
            TableState::Ended,
        ]
    );
    assert_eq!(TableState::Ended.next(), TableState::Ended);
}

#[test]
fn config_from_partial_json_keeps_defaults() {
    let config = TableConfig::from_json(r#"{"starting_cash": 500}"#).unwrap();
    assert_eq!(config.starting_cash, Chips(500));
    assert_eq!(config.min_players, 2);
    assert_eq!(config.max_players, 10);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        TableConfig::from_json(r#"{"min_players": 1}"#),
        Err(ConfigError::TooFewPlayers(1))
    ));
    assert!(matches!(
        TableConfig::from_json(r#"{"min_players": 4, "max_players": 3}"#),
        Err(ConfigError::MaxBelowMin { min: 4, max: 3 })
    ));
    assert!(matches!(
        TableConfig::from_json(r#"{"max_players": 24}"#),
        Err(ConfigError::DeckTooSmall(24))
    ));
    assert!(matches!(
        TableConfig::from_json("not json"),
        Err(ConfigError::Parse(_))
    ));
}

//
// eval
//
fn category(cards: &str) -> HandCategory {
    evaluate_best_hand(&parse_cards(cards).unwrap())
        .unwrap()
        .rank
        .category()
}

#[test]
fn stronger_categories_rank_higher() {
    let hands = [
        "2c 7d 9h Js Kc 3d 4h",
        "2c 2d 9h Js Kc 3d 4h",
        "2c 2d 9h 9s Kc 3d 4h",
        "2c 2d 2h 9s Kc 3d 4h",
        "5c 6d 7h 8s 9c 2d 2h",
        "2c 7c 9c Jc Kc 3d 4h",
        "2c 2d 2h 9s 9c 3d 4h",
        "2c 2d 2h 2s 9c 3d 4h",
        "5c 6c 7c 8c 9c 2d 2h",
    ];
    let ranks: Vec<_> = hands
        .iter()
        .map(|h| evaluate_best_hand(&parse_cards(h).unwrap()).unwrap().rank)
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn flush_beats_straight_on_same_board() {
    assert_eq!(category("Ah 3h 7h 8h 9c Th 2d"), HandCategory::Flush);
    assert_eq!(category("6c 7d 8h 9s Tc 2d 2h"), HandCategory::Straight);
}

#[test]
fn higher_full_house_wins() {
    let evaluator = StandardEvaluator;
    let kings = evaluator.rank(&parse_cards("Kc Kd Kh 2s 2c").unwrap()).unwrap();
    let queens = evaluator.rank(&parse_cards("Qc Qd Qh As Ac").unwrap()).unwrap();
    assert!(kings.rank > queens.rank);
    assert_eq!(describe_hand(kings.rank), "Full house");
}

#[test]
fn too_few_cards_cannot_be_ranked() {
    assert!(StandardEvaluator
        .rank(&parse_cards("Ah Kd").unwrap())
        .is_none());
}
