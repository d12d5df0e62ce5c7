//! In-memory storage implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{KeyValueStorage, StorageError};

/// InMemoryStorage は開発・テスト用の key-value スロット
///
/// プロセスが終われば消える。永続化の契約（get は不在で None、
/// set は上書き）だけを満たす最小実装。
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Other("storage mutex poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Other("storage mutex poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
