use core::fmt;

use serde::{Deserialize, Serialize};

/// Состояние стола: жизненный цикл раздачи и улицы.
///
/// `Open -> PreFlop -> Flop -> Turn -> River -> Ended`.
/// `Open` — начальное (никому не сдано), `Ended` — терминальное для раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableState {
    Open,
    PreFlop,
    Flop,
    Turn,
    River,
    Ended,
}

impl TableState {
    /// Следующее состояние после закрытия улицы.
    pub fn next(self) -> TableState {
        match self {
            TableState::Open => TableState::PreFlop,
            TableState::PreFlop => TableState::Flop,
            TableState::Flop => TableState::Turn,
            TableState::Turn => TableState::River,
            TableState::River | TableState::Ended => TableState::Ended,
        }
    }

    /// Сколько общих карт открывается при переходе В это состояние.
    pub fn community_cards_to_deal(self) -> usize {
        match self {
            TableState::Flop => 3,
            TableState::Turn | TableState::River => 1,
            _ => 0,
        }
    }

    /// Идёт ли сейчас улица ставок.
    pub fn is_betting(self) -> bool {
        matches!(
            self,
            TableState::PreFlop | TableState::Flop | TableState::Turn | TableState::River
        )
    }
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableState::Open => "open",
            TableState::PreFlop => "pre-flop",
            TableState::Flop => "flop",
            TableState::Turn => "turn",
            TableState::River => "river",
            TableState::Ended => "ended",
        };
        write!(f, "{s}")
    }
}

/// Ранг руки. Больше — сильнее. Заполняется evaluator'ом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);
