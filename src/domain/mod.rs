//! Доменная модель: карты, фишки, колода, игроки, состояние и конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Идентификатор игрока приходит снаружи (строка от клиента).
pub type PlayerId = String;
pub type TableId = u64;
/// Индекс места: порядок посадки = порядок хода.
pub type SeatIndex = usize;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
