//! Оценка силы покерных рук на шоудауне.
//!
//! Движок знает только интерфейс `HandEvaluator`; стандартная реализация
//! для Texas Hold'em — `StandardEvaluator` (лучшие 5 из 7 карт).

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::HandRank;

pub use evaluator::{evaluate_best_hand, StandardEvaluator};
pub use hand_rank::{describe_hand, HandCategory};

/// Результат оценки: сравнимый ранг и лучшая 5-карточная подпоследовательность.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluatedHand {
    pub rank: HandRank,
    pub best_five: Vec<Card>,
}

/// Подключаемая оценка рук (другие варианты правил дают свою реализацию).
pub trait HandEvaluator: Send + Sync {
    /// Оценить руку игрока (карманные + общие). `None`, если карт не хватает.
    fn rank(&self, cards: &[Card]) -> Option<EvaluatedHand>;
}
