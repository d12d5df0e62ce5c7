//! TaskFilter - the single active view filter.

use std::fmt;
use std::str::FromStr;

use super::{Importance, Task};

/// TaskFilter は表示フィルタ（常にどれか一つだけ有効、デフォルトは All）
///
/// 重要度フィルタ（High/Medium/Low）は「未完了のタスクのみ」を対象にする。
/// 完了済みは Completed フィルタでのみ表示される。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
    High,
    Medium,
    Low,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 6] = [
        TaskFilter::All,
        TaskFilter::Active,
        TaskFilter::High,
        TaskFilter::Medium,
        TaskFilter::Low,
        TaskFilter::Completed,
    ];

    /// Does `task` pass this filter?
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::High => task.importance == Importance::High && !task.completed,
            TaskFilter::Medium => task.importance == Importance::Medium && !task.completed,
            TaskFilter::Low => task.importance == Importance::Low && !task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
            TaskFilter::High => "high",
            TaskFilter::Medium => "medium",
            TaskFilter::Low => "low",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            "high" => Ok(TaskFilter::High),
            "medium" => Ok(TaskFilter::Medium),
            "low" => Ok(TaskFilter::Low),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}
