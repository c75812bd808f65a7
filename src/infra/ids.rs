use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::TableId;

/// Простая генерация ID на основе монотонного счётчика.
#[derive(Debug)]
pub struct IdGenerator {
    table_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор, первый ID = 1.
    pub fn new() -> Self {
        Self {
            table_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_table_id(&self) -> TableId {
        self.table_counter.fetch_add(1, Ordering::Relaxed)
    }
}
