use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;
use crate::engine::errors::EngineError;

/// Действие текущего игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    /// Пропустить ход, когда на улице нет ставки.
    Check,
    /// Поднять ставку улицы ДО указанной суммы (итоговая ставка игрока).
    Raise(Chips),
    /// Уравнять текущую ставку улицы.
    Call,
    Fold,
}

impl PlayerAction {
    /// Разобрать действие в том виде, в каком его шлёт транспорт:
    /// имя + сумма. Сумма значима только для raise, для check обязана быть 0.
    pub fn parse(name: &str, amount: u64) -> Result<Self, EngineError> {
        match name {
            "check" if amount != 0 => Err(EngineError::CheckWithAmount),
            "check" => Ok(PlayerAction::Check),
            "raise" => Ok(PlayerAction::Raise(Chips(amount))),
            "call" => Ok(PlayerAction::Call),
            "fold" => Ok(PlayerAction::Fold),
            other => Err(EngineError::InvalidAction(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Check => write!(f, "check"),
            PlayerAction::Raise(to) => write!(f, "raise to {to}"),
            PlayerAction::Call => write!(f, "call"),
            PlayerAction::Fold => write!(f, "fold"),
        }
    }
}
