use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::{DeckFactory, DeckProvider, RandomSource};

/// Новая перемешанная 52-карточная колода на каждую раздачу.
#[derive(Clone, Debug, Default)]
pub struct ShuffledDecks<R> {
    rng: R,
}

impl<R: RandomSource> ShuffledDecks<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource + Send> DeckFactory for ShuffledDecks<R> {
    fn new_deck(&mut self) -> Box<dyn DeckProvider> {
        Box::new(Deck::shuffled(&mut self.rng))
    }
}

/// Каждая раздача получает одну и ту же колоду в заданном порядке:
/// первая карта списка сдаётся первой. Для тестов и разбора раздач.
#[derive(Clone, Debug)]
pub struct ScriptedDecks {
    cards: Vec<Card>,
}

impl ScriptedDecks {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl DeckFactory for ScriptedDecks {
    fn new_deck(&mut self) -> Box<dyn DeckProvider> {
        Box::new(Deck::from_top(self.cards.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::infra::DeterministicRng;

    fn drain(mut deck: Box<dyn DeckProvider>) -> Vec<Card> {
        std::iter::from_fn(|| deck.draw()).collect()
    }

    #[test]
    fn shuffled_deck_has_52_unique_cards() {
        let mut decks = ShuffledDecks::new(DeterministicRng::from_seed(7));
        let cards = drain(decks.new_deck());
        assert_eq!(cards.len(), 52);
        assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 52);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = ShuffledDecks::new(DeterministicRng::from_seed(42));
        let mut b = ShuffledDecks::new(DeterministicRng::from_seed(42));
        assert_eq!(drain(a.new_deck()), drain(b.new_deck()));
    }

    #[test]
    fn scripted_deck_deals_in_order() {
        let cards = crate::domain::parse_cards("Ah Kd 7c").unwrap();
        let mut decks = ScriptedDecks::new(cards.clone());
        assert_eq!(drain(decks.new_deck()), cards);
        assert_eq!(drain(decks.new_deck()), cards);
    }
}
