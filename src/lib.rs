//! Движок стола Texas Hold'em.
//!
//! Слои:
//! - `domain` — карты, фишки, игроки, состояние и конфиг стола;
//! - `engine` — машина состояний раздачи, ставки, банк, менеджер столов;
//! - `eval` — оценка рук на шоудауне;
//! - `api` — команды/запросы и JSON-представление стола;
//! - `infra` — RNG, фабрики колод, генерация ID.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use engine::{EngineError, PlayerAction, TableEngine, TableManager};
