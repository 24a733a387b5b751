//! Aggregate statistics over the task collection.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::{Task, TaskStatus};

/// Aggregate statistics derived from the full task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Size of the collection.
    pub total_tasks: usize,
    /// Tasks with status completed.
    pub completed_tasks: usize,
    /// Tasks with status in-progress.
    pub in_progress_tasks: usize,
    /// Tasks whose due date has passed and which are not completed.
    pub overdue_tasks: usize,
    /// Mean `actual_time` (minutes) over completed tasks that recorded one,
    /// or `0.0` when there are none.
    pub avg_completion_time: f64,
    /// Percentage of all tasks marked completed, rounded; `0` when empty.
    pub productivity_score: u32,
}

impl TaskStats {
    /// Computes statistics over `tasks`, using `now` for the overdue check.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let total_tasks = tasks.len();
        let completed_tasks =
            tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
        let in_progress_tasks =
            tasks.iter().filter(|t| t.status == TaskStatus::InProgress).count();
        let overdue_tasks = tasks
            .iter()
            .filter(|t| {
                t.status != TaskStatus::Completed && t.due_date.is_some_and(|due| due < now)
            })
            .count();

        let timed: Vec<u32> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .filter_map(|t| t.actual_time)
            .collect();
        let avg_completion_time = if timed.is_empty() {
            0.0
        } else {
            f64::from(timed.iter().sum::<u32>()) / timed.len() as f64
        };

        let productivity_score = if total_tasks == 0 {
            0
        } else {
            (completed_tasks as f64 / total_tasks as f64 * 100.0).round() as u32
        };

        Self {
            total_tasks,
            completed_tasks,
            in_progress_tasks,
            overdue_tasks,
            avg_completion_time,
            productivity_score,
        }
    }
}
