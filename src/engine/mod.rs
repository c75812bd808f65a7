//! Движок стола: машина состояний улиц, ставки, ротация хода, банк, шоудаун.
//!
//! Высокоуровневый объект: `TableEngine`
//! Основные операции:
//!   - `add_player` – посадить игрока, пока стол открыт
//!   - `start` – сдать карты и начать раздачу
//!   - `perform_action` – применить действие текущего игрока

pub mod actions;
pub mod betting;
pub mod errors;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod table_engine;
pub mod table_manager;
pub mod validation;

use crate::domain::card::Card;

pub use actions::PlayerAction;
pub use betting::BettingState;
pub use errors::EngineError;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use table_engine::{TableData, TableEngine};
pub use table_manager::{ManagerError, SharedTable, TableManager};

/// RNG интерфейс для перемешивания колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Источник карт на одну раздачу. `None` — колода кончилась.
pub trait DeckProvider: Send {
    fn draw(&mut self) -> Option<Card>;
}

/// Выдаёт свежую колоду на каждую раздачу.
pub trait DeckFactory: Send {
    fn new_deck(&mut self) -> Box<dyn DeckProvider>;
}

impl<F> DeckFactory for F
where
    F: FnMut() -> Box<dyn DeckProvider> + Send,
{
    fn new_deck(&mut self) -> Box<dyn DeckProvider> {
        self()
    }
}
