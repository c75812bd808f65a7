//! Внешний API стола.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (посадить игрока, старт, действие);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — JSON-представление стола для клиента;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
