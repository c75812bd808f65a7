use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк раздачи. Пополняется только при закрытии улицы или конце раздачи,
/// за раздачу никогда не уменьшается.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            total: Chips::ZERO,
        }
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Собрать ставки улицы в банк.
    pub fn collect<I: IntoIterator<Item = Chips>>(&mut self, bets: I) -> Chips {
        let collected: Chips = bets.into_iter().sum();
        self.add(collected);
        collected
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
    }
}
