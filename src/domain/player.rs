use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;

/// Игрок за столом. Принадлежит столу, меняется только через операции движка.
///
/// `active == false` означает: сфолдил или ещё не сдан в раздачу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    /// Оставшийся стек. Никогда не уходит в минус.
    pub(crate) cash: Chips,
    /// Ставка на текущей улице.
    pub(crate) current_bet: Chips,
    /// Карманные карты: 0 или 2.
    pub(crate) hole_cards: Vec<Card>,
    pub(crate) active: bool,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, cash: Chips) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cash,
            current_bet: Chips::ZERO,
            hole_cards: Vec::new(),
            active: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cash(&self) -> Chips {
        self.cash
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self) {
        self.active = true;
    }

    pub fn set_inactive(&mut self) {
        self.active = false;
    }

    /// Списать фишки со стека. Ошибка, если стек уйдёт в минус.
    pub fn deduct_cash(&mut self, amount: Chips) -> Result<(), EngineError> {
        self.cash = self
            .cash
            .checked_sub(amount)
            .ok_or(EngineError::NotEnoughCash {
                needed: amount,
                available: self.cash,
            })?;
        Ok(())
    }

    pub fn add_cash(&mut self, amount: Chips) {
        self.cash += amount;
    }

    /// Поставить `amount` поверх текущей ставки.
    /// Стек и ставка меняются вместе: либо оба, либо ничего.
    pub fn bet(&mut self, amount: Chips) -> Result<(), EngineError> {
        self.deduct_cash(amount)?;
        self.current_bet += amount;
        Ok(())
    }

    /// Сколько максимум игрок может поставить на этой улице в сумме.
    pub fn max_total_bet(&self) -> Chips {
        self.cash + self.current_bet
    }

    /// Ставка улицы уходит в банк: вернуть её размер и обнулить.
    pub fn take_bet(&mut self) -> Chips {
        std::mem::replace(&mut self.current_bet, Chips::ZERO)
    }

    pub fn deal(&mut self, first: Card, second: Card) {
        self.hole_cards = vec![first, second];
    }

    pub fn clear_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = Chips::ZERO;
    }
}
