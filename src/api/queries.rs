use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, TableId};
use crate::engine::{TableEngine, TableManager};

use super::dto::{cards_dto, PlayerDto, TableViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Query {
    /// Получить состояние стола глазами игрока `viewer`
    /// (его карманные карты попадут в `playerCards`).
    GetTable { viewer: Option<PlayerId> },

    /// Список столов менеджера.
    ListTables,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Tables(Vec<TableId>),
}

/// Выполнить запрос к одному столу. Список столов знает только менеджер.
pub fn run_query(engine: &TableEngine, query: &Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetTable { viewer } => Ok(QueryResponse::Table(build_table_view(
            engine,
            viewer.as_deref(),
        ))),
        Query::ListTables => Err(ApiError::BadRequest(
            "listTables is answered by the table manager, not a single table".to_string(),
        )),
    }
}

/// Выполнить запрос через менеджер столов.
pub fn run_manager_query(
    manager: &TableManager,
    table_id: TableId,
    query: &Query,
) -> Result<QueryResponse, ApiError> {
    if let Query::ListTables = query {
        return Ok(QueryResponse::Tables(manager.table_ids()));
    }
    let table = manager.table(table_id)?;
    let engine = table
        .lock()
        .map_err(|_| ApiError::Internal(format!("table {table_id} lock poisoned")))?;
    run_query(&engine, query)
}

/// Сформировать DTO стола. Карманные карты видны только `viewer`.
pub fn build_table_view(engine: &TableEngine, viewer: Option<&str>) -> TableViewDto {
    TableViewDto {
        state: engine.state(),
        players: engine.players().iter().map(PlayerDto::from).collect(),
        current_player: engine.current_player().map(PlayerDto::from),
        player_cards: viewer
            .map(|id| cards_dto(engine.player_cards(id)))
            .unwrap_or_default(),
        community_cards: cards_dto(engine.community_cards()),
        bets: engine.bets(),
        pot: engine.pot(),
        winner: engine.winner().map(PlayerDto::from),
        winner_hand: cards_dto(engine.winner_hand()),
    }
}
