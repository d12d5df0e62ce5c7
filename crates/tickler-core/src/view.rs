//! View projection - filter + sort
//!
//! 現在のタスク列とフィルタ値だけから決まる純粋関数。
//! 隠れた状態はなく、レンダリングのたびに再計算されます。

use std::cmp::Ordering;

use crate::domain::{Task, TaskFilter};

/// Filter first, then sort:
/// 1. 未完了が完了より先
/// 2. 未完了同士は重要度順（High, Medium, Low）
/// 3. 最後は期限の昇順でタイブレーク
pub fn project(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks.iter().filter(|t| filter.matches(t)).cloned().collect();
    visible.sort_by(compare);
    visible
}

fn compare(a: &Task, b: &Task) -> Ordering {
    if a.completed != b.completed {
        return if a.completed {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    // 重要度は未完了同士でのみ効く。完了側は期限順のみ。
    if !a.completed && !b.completed {
        let by_importance = a
            .importance
            .severity_rank()
            .cmp(&b.importance.severity_rank());
        if by_importance != Ordering::Equal {
            return by_importance;
        }
    }

    a.due_date.cmp(&b.due_date)
}

/// サマリ行（"N of M tasks completed"）向けの集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub completed: usize,
    pub total: usize,
}

pub fn counts(tasks: &[Task]) -> TaskCounts {
    TaskCounts {
        completed: tasks.iter().filter(|t| t.completed).count(),
        total: tasks.len(),
    }
}
