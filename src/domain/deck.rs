use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::{DeckProvider, RandomSource};

/// Колода карт. В домене — просто упорядоченный список карт,
/// верх колоды — конец вектора.
/// Перемешивание делает RNG из infra, НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода, из которой карты выходят ровно в переданном порядке
    /// (первая карта списка будет взята первой). Для тестов и реплеев.
    pub fn from_top(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Deck { cards }
    }

    /// Свежая колода, перемешанная переданным RNG.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl DeckProvider for Deck {
    fn draw(&mut self) -> Option<Card> {
        self.draw_one()
    }
}
