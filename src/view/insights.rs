//! Breakdowns and trends behind the statistics page.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::task::{Task, TaskCategory, TaskPriority, TaskStatus};

/// Per-category totals for the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    /// The category this slice describes.
    pub category: TaskCategory,
    /// Tasks in the category.
    pub count: usize,
    /// Completed tasks in the category.
    pub completed: usize,
}

/// Per-priority totals for the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioritySlice {
    /// The priority this slice describes.
    pub priority: TaskPriority,
    /// Tasks at the priority.
    pub count: usize,
    /// Completed tasks at the priority.
    pub completed: usize,
}

/// One day of the weekly productivity summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The calendar day.
    pub day: NaiveDate,
    /// Tasks completed on that day.
    pub completed: usize,
    /// Summed `actual_time` minutes of those tasks.
    pub total_minutes: u32,
}

/// Task counts per category, in display order.
#[must_use]
pub fn category_breakdown(tasks: &[Task]) -> Vec<CategorySlice> {
    TaskCategory::ALL
        .into_iter()
        .map(|category| {
            let in_category = tasks.iter().filter(|t| t.category == category);
            let (count, completed) = count_with_completed(in_category);
            CategorySlice { category, count, completed }
        })
        .collect()
}

/// Task counts per priority, most urgent first.
#[must_use]
pub fn priority_breakdown(tasks: &[Task]) -> Vec<PrioritySlice> {
    TaskPriority::ALL
        .into_iter()
        .map(|priority| {
            let at_priority = tasks.iter().filter(|t| t.priority == priority);
            let (count, completed) = count_with_completed(at_priority);
            PrioritySlice { priority, count, completed }
        })
        .collect()
}

/// Completion summary for the last seven calendar days, oldest first.
///
/// Tasks are attributed to the day of their `completed_at` timestamp; the
/// window always ends on the current day, so the final entry is "today".
#[must_use]
pub fn weekly_completion(tasks: &[Task], now: DateTime<Utc>) -> Vec<DaySummary> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset)).date_naive();
            let done_that_day: Vec<&Task> = tasks
                .iter()
                .filter(|t| t.completed_at.is_some_and(|at| at.date_naive() == day))
                .collect();
            DaySummary {
                day,
                completed: done_that_day.len(),
                total_minutes: done_that_day.iter().filter_map(|t| t.actual_time).sum(),
            }
        })
        .collect()
}

fn count_with_completed<'a>(tasks: impl Iterator<Item = &'a Task>) -> (usize, usize) {
    tasks.fold((0, 0), |(count, completed), task| {
        let done = usize::from(task.status == TaskStatus::Completed);
        (count + 1, completed + done)
    })
}
