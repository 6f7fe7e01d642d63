//! Хранилище в памяти
//!
//! Реализация порта хранилища поверх `HashMap` - используется в тестах
//! и в сценариях, где персистентность не нужна.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{Result, SubStudioError};
use crate::storage::StoragePort;

/// Хранилище ключ -> байты в памяти процесса
pub struct MemoryStorage {
    /// Сохраненные записи
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Создать пустое хранилище
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Количество сохраненных записей
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Проверить, пусто ли хранилище
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let entries = self.entries.read().unwrap();
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| SubStudioError::NotFound(key.to_string()))
    }

    async fn contains(&self, key: &str) -> bool {
        let entries = self.entries.read().unwrap();
        entries.contains_key(key)
    }
}
