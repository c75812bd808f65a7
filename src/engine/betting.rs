use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Состояние раунда ставок (на конкретной улице).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Наибольшая суммарная ставка активного игрока на этой улице.
    pub last_bet: Chips,
    /// Очередь ходящих (по кругу), кто ещё должен сделать действие на этой улице.
    pub to_act: Vec<SeatIndex>,
}

impl BettingState {
    /// Новая улица: ставок нет, ходят все перечисленные места по порядку.
    pub fn new_street(to_act: Vec<SeatIndex>) -> Self {
        Self {
            last_bet: Chips::ZERO,
            to_act,
        }
    }

    /// Удалить seat из очереди to_act, если он там есть.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// После raise: новая ставка, и все остальные должны ответить заново.
    pub fn on_raise(&mut self, new_bet: Chips, new_to_act: Vec<SeatIndex>) {
        self.last_bet = new_bet;
        self.to_act = new_to_act;
    }

    /// Раунд ставок завершён, когда очередь пуста.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
