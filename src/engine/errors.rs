use thiserror::Error;

use crate::domain::{Chips, TableState};

/// Ошибки движка стола.
///
/// Почти все — ошибки клиента (недопустимое действие или сумма), состояние
/// стола при этом не меняется. `NoActivePlayer` — нарушение инварианта,
/// его нельзя вызвать корректным использованием.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("action is invalid: {0}")]
    InvalidAction(String),

    #[error("during check action, bet amount should be zero")]
    CheckWithAmount,

    #[error("check action invalid, as previous bet amount {0} exists")]
    CannotCheck(Chips),

    #[error("call not possible before raise")]
    CannotCall,

    #[error("raise amount {amount} must be strictly higher than the current bet {current}")]
    RaiseTooSmall { amount: Chips, current: Chips },

    #[error("not enough cash: need {needed}, have {available}")]
    NotEnoughCash { needed: Chips, available: Chips },

    #[error("the raise to {amount} exceeds the remaining cash of {player}, who can bet at most {max}")]
    RaiseExceedsPlayerCash {
        player: String,
        amount: Chips,
        max: Chips,
    },

    #[error("a hand is already in progress, state is {0}")]
    HandInProgress(TableState),

    #[error("no hand in progress, state is {0}")]
    HandNotInProgress(TableState),

    #[error("table is full ({0} players)")]
    TableFull(usize),

    #[error("the deck ran out of cards")]
    DeckExhausted,

    #[error("all players cannot be inactive")]
    NoActivePlayer,

    #[error("hand evaluator could not rank {0} cards")]
    ShowdownFailed(usize),
}

impl EngineError {
    /// Нарушение инварианта движка (баг), а не ошибка клиента.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            EngineError::NoActivePlayer | EngineError::DeckExhausted | EngineError::ShowdownFailed(_)
        )
    }
}
