//! Calendar day queries and per-task due-state predicates.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::task::{Task, TaskStatus};

/// Returns `true` if the task's due date has passed and it is not completed.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.status != TaskStatus::Completed && task.due_date.is_some_and(|due| due < now)
}

/// Returns `true` if the task is due within the next 24 hours.
///
/// Tasks already past due are overdue, not due soon.
#[must_use]
pub fn is_due_soon(task: &Task, now: DateTime<Utc>) -> bool {
    task.due_date
        .is_some_and(|due| due > now && due < now + Duration::days(1))
}

/// Tasks whose due date falls on the given calendar day, in snapshot order.
#[must_use]
pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.due_date.is_some_and(|due| due.date_naive() == day))
        .collect()
}

/// Returns `true` if any task due on `day` is overdue as of `now`.
///
/// Drives the warning marker on a calendar cell.
#[must_use]
pub fn day_has_overdue(tasks: &[Task], day: NaiveDate, now: DateTime<Utc>) -> bool {
    tasks_due_on(tasks, day).iter().any(|t| is_overdue(t, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskCategory, TaskPriority};

    fn task(id: &str, status: TaskStatus, due: Option<DateTime<Utc>>) -> Task {
        let stamp: DateTime<Utc> = "2024-06-15T12:00:00Z".parse().unwrap();
        Task {
            id: id.into(),
            title: id.into(),
            description: None,
            category: TaskCategory::Study,
            priority: TaskPriority::Medium,
            status,
            due_date: due,
            estimated_time: None,
            actual_time: None,
            created_at: stamp,
            updated_at: stamp,
            completed_at: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-06-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn overdue_needs_past_due_date_and_unfinished_status() {
        let yesterday = now() - Duration::days(1);
        assert!(is_overdue(&task("a", TaskStatus::Todo, Some(yesterday)), now()));
        assert!(!is_overdue(&task("b", TaskStatus::Completed, Some(yesterday)), now()));
        assert!(!is_overdue(&task("c", TaskStatus::Todo, None), now()));
        assert!(!is_overdue(&task("d", TaskStatus::Todo, Some(now() + Duration::hours(1))), now()));
    }

    #[test]
    fn due_soon_is_a_forward_looking_24_hour_window() {
        assert!(is_due_soon(&task("a", TaskStatus::Todo, Some(now() + Duration::hours(6))), now()));
        assert!(!is_due_soon(&task("b", TaskStatus::Todo, Some(now() + Duration::days(2))), now()));
        assert!(!is_due_soon(&task("c", TaskStatus::Todo, Some(now() - Duration::hours(1))), now()));
        assert!(!is_due_soon(&task("d", TaskStatus::Todo, None), now()));
    }

    #[test]
    fn tasks_due_on_matches_calendar_day_not_exact_instant() {
        let morning: DateTime<Utc> = "2024-06-20T08:00:00Z".parse().unwrap();
        let evening: DateTime<Utc> = "2024-06-20T21:00:00Z".parse().unwrap();
        let next_day: DateTime<Utc> = "2024-06-21T00:30:00Z".parse().unwrap();
        let tasks = vec![
            task("am", TaskStatus::Todo, Some(morning)),
            task("pm", TaskStatus::Todo, Some(evening)),
            task("next", TaskStatus::Todo, Some(next_day)),
            task("undated", TaskStatus::Todo, None),
        ];

        let day = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let due: Vec<&str> = tasks_due_on(&tasks, day).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(due, vec!["am", "pm"]);
    }

    #[test]
    fn day_has_overdue_flags_only_days_with_unfinished_past_due_tasks() {
        let past: DateTime<Utc> = "2024-06-14T09:00:00Z".parse().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        let unfinished = vec![task("a", TaskStatus::Todo, Some(past))];
        assert!(day_has_overdue(&unfinished, day, now()));

        let finished = vec![task("a", TaskStatus::Completed, Some(past))];
        assert!(!day_has_overdue(&finished, day, now()));
    }
}
