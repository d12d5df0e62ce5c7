//! File-backed storage implementation.

use std::fs;
use std::path::PathBuf;

use crate::ports::{KeyValueStorage, StorageError};

/// FileStorage はデータディレクトリ配下にキーごとに 1 ファイルを置く
///
/// キー `todo-tasks` は `<dir>/todo-tasks.json` に対応する。
/// ディレクトリは最初の書き込み時に作られる。
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    fn temp_storage() -> FileStorage {
        let dir = std::env::temp_dir().join(format!("tickler-test-{}", Ulid::new()));
        FileStorage::new(dir)
    }

    #[test]
    fn absent_key_reads_as_none() {
        let storage = temp_storage();
        assert!(storage.get("todo-tasks").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let storage = temp_storage();
        storage.set("todo-tasks", "[]").unwrap();

        assert_eq!(storage.get("todo-tasks").unwrap().as_deref(), Some("[]"));
    }
}
