use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TableId;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Недопустимое действие или неправильные входные данные.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Стол не найден.
    #[error("table {0} not found")]
    TableNotFound(TableId),

    /// Внутренняя ошибка: нарушен инвариант движка.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        if err.is_invariant_violation() {
            log::error!("engine invariant violated: {err}");
            ApiError::Internal(err.to_string())
        } else {
            ApiError::BadRequest(err.to_string())
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::TableNotFound(id) => ApiError::TableNotFound(id),
            ManagerError::Poisoned(_) => ApiError::Internal(err.to_string()),
            ManagerError::Engine(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
