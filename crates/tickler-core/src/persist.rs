//! Persistence adapter - タスク列と key-value ストアの往復
//!
//! タスク列全体を一つの固定キーの下に JSON 配列として保存します。
//! `due_date` は RFC 3339 文字列（秒精度）に変換されます。
//!
//! # Best-effort 契約
//! - `save_tasks` の失敗はログに出して吸収する（呼び出し側へ伝播しない）
//! - `load_tasks` はキー不在・パース失敗をどちらも「保存なし」として扱い、
//!   空列を返す（クラッシュさせない）
//!
//! Round-trip law: `load(save(tasks)) == tasks`（秒精度のタイムスタンプで）

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Importance, Task, TaskId};
use crate::ports::KeyValueStorage;

/// 保存スロットの固定キー
pub const TASKS_STORAGE_KEY: &str = "todo-tasks";

/// 保存形式のレコード（due_date だけ文字列に落とす）
#[derive(Debug, Serialize, Deserialize)]
struct StoredTask {
    id: TaskId,
    title: String,
    description: String,
    importance: Importance,
    due_date: String,
    completed: bool,
    notified: bool,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            importance: task.importance,
            due_date: task.due_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            completed: task.completed,
            notified: task.notified,
        }
    }
}

impl TryFrom<StoredTask> for Task {
    type Error = chrono::ParseError;

    fn try_from(stored: StoredTask) -> Result<Self, Self::Error> {
        let due_date = DateTime::parse_from_rfc3339(&stored.due_date)?.with_timezone(&Utc);
        Ok(Task {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            importance: stored.importance,
            due_date,
            completed: stored.completed,
            notified: stored.notified,
        })
    }
}

/// Mirror the full sequence to storage. Never propagates failure.
pub fn save_tasks(storage: &dyn KeyValueStorage, key: &str, tasks: &[Task]) {
    let stored: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    let json = match serde_json::to_string(&stored) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize tasks: {e}");
            return;
        }
    };
    if let Err(e) = storage.set(key, &json) {
        log::error!("failed to save tasks: {e}");
    }
}

/// Load the persisted sequence. Absent or malformed content reads as empty.
pub fn load_tasks(storage: &dyn KeyValueStorage, key: &str) -> Vec<Task> {
    let json = match storage.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("failed to read saved tasks: {e}");
            return Vec::new();
        }
    };

    let stored: Vec<StoredTask> = match serde_json::from_str(&json) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("malformed saved tasks, starting empty: {e}");
            return Vec::new();
        }
    };

    match stored.into_iter().map(Task::try_from).collect() {
        Ok(tasks) => tasks,
        Err(e) => {
            log::warn!("saved tasks carry a bad timestamp, starting empty: {e}");
            Vec::new()
        }
    }
}
