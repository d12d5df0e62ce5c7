//! Notifier port - 通知表示の抽象化
//!
//! 通知の許可状態（granted/denied/undetermined）はポート側の所有物。
//! スケジューラは発火前に `permission()` を確認し、Granted 以外なら沈黙する。
//! 表示の細部（10 秒で自動クローズ、クリックでフォーカス）はアダプタの責務。

use crate::domain::Task;

/// NotifyPermission は通知許可の三値状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyPermission {
    /// まだ尋ねていない
    Undetermined,
    Granted,
    Denied,
}

/// NotificationContent は一件の通知の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// 期限到来タスクのリマインダー通知を組み立てる
    ///
    /// body は `"{絵文字} {タイトル}\n{説明}"`（重要度ごとの絵文字マーカー付き）。
    pub fn for_task(task: &Task) -> Self {
        Self {
            title: "Task Reminder".to_string(),
            body: format!("{} {}\n{}", task.importance.emoji(), task.title, task.description),
        }
    }
}

/// Notifier は一件ずつの通知表示を提供
pub trait Notifier: Send + Sync {
    /// 現在の許可状態
    fn permission(&self) -> NotifyPermission;

    /// 許可を要求する。Denied 済みなら再度尋ねない（ユーザーに badger しない）。
    fn request_permission(&self) -> NotifyPermission;

    /// 通知を一件表示する（fire-and-forget、失敗してもコアには波及しない）
    fn show(&self, content: &NotificationContent);
}
