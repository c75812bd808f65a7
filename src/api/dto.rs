use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::chips::Chips;
use crate::domain::hand::TableState;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Карта в том виде, в каком её видит клиент: `{"suit":"hearts","kind":"ace"}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub suit: String,
    pub kind: String,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            suit: suit_name(card.suit).to_string(),
            kind: kind_name(card.rank).to_string(),
        }
    }
}

fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "clubs",
        Suit::Diamonds => "diamonds",
        Suit::Hearts => "hearts",
        Suit::Spades => "spades",
    }
}

fn kind_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "jack",
        Rank::Queen => "queen",
        Rank::King => "king",
        Rank::Ace => "ace",
    }
}

pub fn cards_dto(cards: &[Card]) -> Vec<CardDto> {
    cards.iter().map(CardDto::from).collect()
}

/// DTO игрока за столом. Карманные карты сюда не попадают.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: PlayerId,
    pub name: String,
    pub cash: Chips,
    pub bet: Chips,
    pub active: bool,
}

impl From<&Player> for PlayerDto {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            cash: p.cash,
            bet: p.current_bet,
            active: p.is_active(),
        }
    }
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableViewDto {
    pub state: TableState,
    pub players: Vec<PlayerDto>,
    /// Чей ход (если раздача идёт).
    pub current_player: Option<PlayerDto>,
    /// Карманные карты запросившего игрока; пусто для постороннего.
    pub player_cards: Vec<CardDto>,
    pub community_cards: Vec<CardDto>,
    /// Ненулевые ставки текущей улицы по id игрока.
    pub bets: BTreeMap<PlayerId, Chips>,
    pub pot: Chips,
    pub winner: Option<PlayerDto>,
    pub winner_hand: Vec<CardDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Обновлённое состояние стола.
    TableState(TableViewDto),

    /// Раздача закончилась этой командой.
    HandFinished {
        table: TableViewDto,
        winner: PlayerDto,
        pot: Chips,
    },
}

impl CommandResponse {
    pub fn table(&self) -> &TableViewDto {
        match self {
            CommandResponse::TableState(table) => table,
            CommandResponse::HandFinished { table, .. } => table,
        }
    }
}
