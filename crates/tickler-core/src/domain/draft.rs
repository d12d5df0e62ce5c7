//! TaskDraft - validated form input.

use chrono::{DateTime, Utc};

use super::{Importance, Task, TaskId, ValidationError};

/// TaskDraft はフォームの入力値（検証前）
///
/// # 検証ルール
/// - title は必須（trim 後に非空）
/// - due_date は必須、かつ未来であること
/// - notify_email は任意。指定された場合のみ形式を検証する
///
/// 検証に失敗したら Task は一切作られない。
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub importance: Importance,
    pub due_date: Option<DateTime<Utc>>,
    pub notify_email: Option<String>,
}

impl TaskDraft {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let due = self.due_date.ok_or(ValidationError::MissingDueDate)?;
        if due < now {
            return Err(ValidationError::DueDateInPast);
        }

        if let Some(email) = &self.notify_email
            && !is_plausible_email(email)
        {
            return Err(ValidationError::InvalidEmail(email.clone()));
        }

        Ok(())
    }

    /// Validate and build the Task (title/description trimmed, flags cleared).
    pub fn into_task(self, id: TaskId, now: DateTime<Utc>) -> Result<Task, ValidationError> {
        self.validate(now)?;
        // validate() で due_date の存在は確認済み
        let due = self.due_date.ok_or(ValidationError::MissingDueDate)?;
        Ok(Task::new(
            id,
            self.title.trim(),
            self.description.trim(),
            self.importance,
            due,
        ))
    }
}

/// 緩い形式チェック（local@domain.tld の形）
fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}
