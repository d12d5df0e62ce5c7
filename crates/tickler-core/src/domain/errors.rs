//! Error types.

use thiserror::Error;

/// ValidationError はフォーム入力の検証エラー
///
/// どれか一つでも失敗したら Task は作られない（partial task を作らない）。
/// 個々のメッセージはフォームのインライン表示にそのまま使える文面。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,

    #[error("due date and time are required")]
    MissingDueDate,

    #[error("due date and time must be in the future")]
    DueDateInPast,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
