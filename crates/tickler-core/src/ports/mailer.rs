//! Mailer port - リマインダーメール送信の抽象化
//!
//! 送信は fire-and-forget。成否はローカルに報告されるだけで、
//! リトライもされず、タスク作成の成否にも影響しない。

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// メールテンプレート識別子（外部サービス側で定義される）
pub const REMINDER_TEMPLATE: &str = "task_reminder";

/// 本文に埋め込む固定の注記
const REMINDER_NOTES: &str = "This is a reminder from your TODO app";

#[derive(Debug, Clone, Error)]
pub enum MailError {
    #[error("send failed: {0}")]
    Send(String),
}

/// ReminderMail はテンプレート ID + 宛先 + フィールドマップ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMail {
    pub template: String,
    pub to: String,
    pub task_name: String,
    pub notes: String,
}

impl ReminderMail {
    pub fn new(to: impl Into<String>, task_name: impl Into<String>) -> Self {
        Self {
            template: REMINDER_TEMPLATE.to_string(),
            to: to.into(),
            task_name: task_name.into(),
            notes: REMINDER_NOTES.to_string(),
        }
    }
}

/// Mailer はアウトバウンドメールの送信口
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &ReminderMail) -> Result<(), MailError>;
}
