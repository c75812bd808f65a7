use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Стартовый стек нового игрока.
pub const DEFAULT_STARTING_CASH: Chips = Chips(100);
/// Минимум игроков, чтобы начать раздачу.
pub const DEFAULT_MIN_PLAYERS: usize = 2;
/// Максимум мест за столом.
pub const DEFAULT_MAX_PLAYERS: usize = 10;

/// Карт в колоде и на борде: 5 общих + по 2 каждому должно влезть в 52.
const DECK_SIZE: usize = 52;
const BOARD_SIZE: usize = 5;

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("min_players must be at least 2, got {0}")]
    TooFewPlayers(usize),

    #[error("max_players {max} is below min_players {min}")]
    MaxBelowMin { min: usize, max: usize },

    #[error("a 52-card deck cannot deal {0} players")]
    DeckTooSmall(usize),
}

/// Конфиг стола. Все поля имеют значения по умолчанию,
/// так что из JSON можно передать только то, что меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Стек, с которым садится новый игрок.
    pub starting_cash: Chips,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_cash: DEFAULT_STARTING_CASH,
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

impl TableConfig {
    /// Загрузить и проверить конфиг из JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < DEFAULT_MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.min_players));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::MaxBelowMin {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if BOARD_SIZE + 2 * self.max_players > DECK_SIZE {
            return Err(ConfigError::DeckTooSmall(self.max_players));
        }
        Ok(())
    }
}
