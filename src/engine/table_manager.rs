use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;

use crate::domain::TableId;
use crate::engine::{EngineError, TableEngine};
use crate::infra::IdGenerator;

/// Стол под собственной блокировкой: операции над одним столом строго
/// последовательны, разные столы не мешают друг другу.
pub type SharedTable = Arc<Mutex<TableEngine>>;

/// Ошибки уровня менеджера столов.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Стол с таким ID не найден.
    #[error("table {0} not found")]
    TableNotFound(TableId),

    /// Блокировка стола отравлена паникой в другом потоке.
    #[error("table {0} is unavailable after a panic")]
    Poisoned(TableId),

    /// Проброшенная ошибка движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Менеджер столов: хранит независимые столы по TableId.
#[derive(Debug, Default)]
pub struct TableManager {
    tables: RwLock<HashMap<TableId, SharedTable>>,
    ids: IdGenerator,
}

impl TableManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарегистрировать стол и выдать ему новый ID.
    pub fn add_table(&self, engine: TableEngine) -> TableId {
        let id = self.ids.next_table_id();
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.insert(id, Arc::new(Mutex::new(engine)));
        log::info!("table {id} registered");
        id
    }

    /// Получить стол для прямой работы.
    pub fn table(&self, table_id: TableId) -> Result<SharedTable, ManagerError> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        tables
            .get(&table_id)
            .cloned()
            .ok_or(ManagerError::TableNotFound(table_id))
    }

    /// Выполнить операцию над столом под его блокировкой.
    pub fn with_table<T, F>(&self, table_id: TableId, f: F) -> Result<T, ManagerError>
    where
        F: FnOnce(&mut TableEngine) -> Result<T, EngineError>,
    {
        let table = self.table(table_id)?;
        let mut engine = table
            .lock()
            .map_err(|_| ManagerError::Poisoned(table_id))?;
        Ok(f(&mut *engine)?)
    }

    /// ID всех столов по возрастанию.
    pub fn table_ids(&self) -> Vec<TableId> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        let mut ids: Vec<TableId> = tables.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Убрать стол. Возвращает его, если он был.
    pub fn remove_table(&self, table_id: TableId) -> Option<SharedTable> {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.remove(&table_id)
    }
}
