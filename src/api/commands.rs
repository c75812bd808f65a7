use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, TableId, TableState};
use crate::engine::{TableEngine, TableManager};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда над столом, как её присылает клиент.
///
/// `{"type":"performAction","action":"raise","amount":3}`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Посадить игрока за стол.
    #[serde(rename_all = "camelCase")]
    AddPlayer { player_id: PlayerId, name: String },

    /// Начать раздачу.
    Start,

    /// Действие текущего игрока: `check`, `raise`, `call`, `fold`.
    PerformAction {
        action: String,
        #[serde(default)]
        amount: u64,
    },
}

impl Command {
    /// Разобрать команду из JSON.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Выполнить команду над столом и вернуть его новое состояние.
pub fn execute(engine: &mut TableEngine, command: Command) -> Result<CommandResponse, ApiError> {
    let was_betting = engine.state().is_betting();

    match command {
        Command::AddPlayer { player_id, name } => engine.add_player(&player_id, &name)?,
        Command::Start => engine.start()?,
        Command::PerformAction { action, amount } => engine.perform(&action, amount)?,
    }

    let table = build_table_view(engine, None);
    let finished = was_betting && engine.state() == TableState::Ended;
    Ok(match (finished, table.winner.clone()) {
        (true, Some(winner)) => CommandResponse::HandFinished {
            pot: table.pot,
            winner,
            table,
        },
        _ => CommandResponse::TableState(table),
    })
}

/// Выполнить команду над столом из менеджера.
pub fn execute_on(
    manager: &TableManager,
    table_id: TableId,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let table = manager.table(table_id)?;
    let mut engine = table
        .lock()
        .map_err(|_| ApiError::Internal(format!("table {table_id} lock poisoned")))?;
    execute(&mut *engine, command)
}
