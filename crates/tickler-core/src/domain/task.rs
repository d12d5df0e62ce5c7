//! Task - the sole entity of the store.

use chrono::{DateTime, Utc};

use super::{Importance, TaskId};

/// Task はユーザーが作成したリマインダー
///
/// # ライフサイクル
/// - フォーム送信時に作成（ID はクライアント側で採番）
/// - toggle / notify / edit では「置き換え」で更新（destructive mutation しない）
/// - 明示的な delete で削除
///
/// `notified` はスケジューラだけが一度だけ true にする one-shot フラグ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Non-empty (enforced by draft validation, not re-checked here).
    pub title: String,
    pub description: String,
    pub importance: Importance,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
    pub notified: bool,
}

impl Task {
    /// Create a fresh task with both lifecycle flags cleared.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        importance: Importance,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            importance,
            due_date,
            completed: false,
            notified: false,
        }
    }

    /// Is this task eligible for a one-shot alert at `now`?
    ///
    /// 条件: 未完了 / 未通知 / 期限到来（due_date <= now）
    pub fn is_alert_due(&self, now: DateTime<Utc>) -> bool {
        !self.completed && !self.notified && self.due_date <= now
    }
}
