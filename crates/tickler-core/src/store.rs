//! TaskStore - タスク列の正本（source of truth）
//!
//! 順序付きのタスク列を一つだけ所有し、すべての変更操作をここに集めます。
//!
//! # 設計原則
//! - 変更は structural replacement：既存列を壊さず、新しい列を作って差し替える
//! - すべての操作は total：対象 ID が無ければ no-op（false を返す）
//! - 変更のたびに key-value ストアへ best-effort でミラーする（失敗はログのみ）
//! - スケジューラと共有するため Clone 可能（内部は Arc<Mutex<_>>）

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Task, TaskId};
use crate::persist;
use crate::ports::KeyValueStorage;

#[derive(Clone)]
pub struct TaskStore {
    state: Arc<Mutex<Vec<Task>>>,
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl TaskStore {
    /// Open the store, loading whatever the storage slot holds.
    ///
    /// キー不在・壊れた内容はどちらも「保存なし」として空列から始まる。
    pub fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = persist::load_tasks(storage.as_ref(), &key);
        Self {
            state: Arc::new(Mutex::new(tasks)),
            storage,
            key,
        }
    }

    /// Snapshot of the current sequence (read-only projection for rendering).
    pub async fn tasks(&self) -> Vec<Task> {
        self.state.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.is_empty()
    }

    /// Append a task to the end of the sequence.
    pub async fn add(&self, task: Task) {
        let mut guard = self.state.lock().await;
        let mut next = guard.clone();
        next.push(task);
        persist::save_tasks(self.storage.as_ref(), &self.key, &next);
        *guard = next;
    }

    /// Flip `completed` on the matching task. Returns false when `id` is absent.
    pub async fn toggle_complete(&self, id: TaskId) -> bool {
        self.replace(id, |t| Task {
            completed: !t.completed,
            ..t.clone()
        })
        .await
    }

    /// Remove the matching task. Returns false when `id` is absent.
    pub async fn delete(&self, id: TaskId) -> bool {
        let mut guard = self.state.lock().await;
        if !guard.iter().any(|t| t.id == id) {
            return false;
        }
        let next: Vec<Task> = guard.iter().filter(|t| t.id != id).cloned().collect();
        persist::save_tasks(self.storage.as_ref(), &self.key, &next);
        *guard = next;
        true
    }

    /// Set `notified = true`, exactly once.
    ///
    /// 既に notified のタスクには何もしない（false を返す）。
    /// スケジューラの冪等性はこの一方向フラグに依存している。
    pub async fn mark_notified(&self, id: TaskId) -> bool {
        let mut guard = self.state.lock().await;
        let Some(current) = guard.iter().find(|t| t.id == id) else {
            return false;
        };
        if current.notified {
            return false;
        }
        let next: Vec<Task> = guard
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        notified: true,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        persist::save_tasks(self.storage.as_ref(), &self.key, &next);
        *guard = next;
        true
    }

    /// Replace the matching task with `f(task)`. Returns false when absent.
    async fn replace(&self, id: TaskId, f: impl Fn(&Task) -> Task) -> bool {
        let mut guard = self.state.lock().await;
        if !guard.iter().any(|t| t.id == id) {
            return false;
        }
        let next: Vec<Task> = guard
            .iter()
            .map(|t| if t.id == id { f(t) } else { t.clone() })
            .collect();
        persist::save_tasks(self.storage.as_ref(), &self.key, &next);
        *guard = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Importance;
    use crate::impls::InMemoryStorage;
    use crate::persist::TASKS_STORAGE_KEY;
    use chrono::{TimeZone, Utc};
    use ulid::Ulid;

    fn store() -> TaskStore {
        TaskStore::open(Arc::new(InMemoryStorage::new()), TASKS_STORAGE_KEY)
    }

    fn task(title: &str) -> Task {
        let due = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Task::new(
            TaskId::from_ulid(Ulid::new()),
            title,
            "",
            Importance::Medium,
            due,
        )
    }

    #[tokio::test]
    async fn add_appends_one_task_with_flags_cleared() {
        let store = store();
        store.add(task("a")).await;

        let tasks = store.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
        assert!(!tasks[0].notified);
    }

    #[tokio::test]
    async fn add_preserves_insertion_order() {
        let store = store();
        store.add(task("first")).await;
        store.add(task("second")).await;

        let titles: Vec<String> = store.tasks().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[tokio::test]
    async fn toggle_complete_is_its_own_inverse() {
        let store = store();
        let t = task("a");
        let id = t.id;
        store.add(t).await;

        assert!(store.toggle_complete(id).await);
        assert!(store.tasks().await[0].completed);

        assert!(store.toggle_complete(id).await);
        assert!(!store.tasks().await[0].completed);
    }

    #[tokio::test]
    async fn operations_are_noops_for_absent_ids() {
        let store = store();
        store.add(task("a")).await;
        let ghost = TaskId::from_ulid(Ulid::new());

        assert!(!store.toggle_complete(ghost).await);
        assert!(!store.delete(ghost).await);
        assert!(!store.mark_notified(ghost).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_task() {
        let store = store();
        let keep = task("keep");
        let gone = task("gone");
        let gone_id = gone.id;
        store.add(keep).await;
        store.add(gone).await;

        assert!(store.delete(gone_id).await);

        let tasks = store.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "keep");
    }

    #[tokio::test]
    async fn mark_notified_flips_exactly_once() {
        let store = store();
        let t = task("a");
        let id = t.id;
        store.add(t).await;

        assert!(store.mark_notified(id).await);
        assert!(store.tasks().await[0].notified);

        // 二度目は no-op
        assert!(!store.mark_notified(id).await);
        assert!(store.tasks().await[0].notified);
    }

    #[tokio::test]
    async fn mutations_are_mirrored_to_storage() {
        let storage = Arc::new(InMemoryStorage::new());
        let store = TaskStore::open(Arc::clone(&storage) as Arc<dyn KeyValueStorage>, TASKS_STORAGE_KEY);
        store.add(task("persisted")).await;

        // 同じストレージから開き直すと同じ列が見える
        let reopened = TaskStore::open(storage, TASKS_STORAGE_KEY);
        let tasks = reopened.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "persisted");
    }
}
