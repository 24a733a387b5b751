//! Built-in sample tasks installed on first run.

use chrono::{DateTime, Duration, Utc};

use crate::task::{Task, TaskCategory, TaskPriority, TaskStatus};

/// Returns the first-run demonstration dataset, dated relative to `now`.
///
/// One task per category, covering every status, so a fresh install has
/// something to show on the list, calendar, and statistics views.
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task {
            id: "1".into(),
            title: "Finish the algebra problem set".into(),
            description: Some("Exercises 1-15 from the textbook".into()),
            category: TaskCategory::Assignment,
            priority: TaskPriority::High,
            status: TaskStatus::Todo,
            due_date: Some(now + Duration::days(2)),
            estimated_time: Some(120),
            actual_time: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        },
        Task {
            id: "2".into(),
            title: "Revise for the midterm exam".into(),
            description: Some("Web programming module".into()),
            category: TaskCategory::Study,
            priority: TaskPriority::Urgent,
            status: TaskStatus::InProgress,
            due_date: Some(now + Duration::days(1)),
            estimated_time: Some(180),
            actual_time: Some(90),
            created_at: now - Duration::days(2),
            updated_at: now,
            completed_at: None,
        },
        Task {
            id: "3".into(),
            title: "Group project: website design".into(),
            description: Some("Finish the frontend for the team project".into()),
            category: TaskCategory::Project,
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: Some(now + Duration::days(7)),
            estimated_time: Some(300),
            actual_time: None,
            created_at: now - Duration::days(1),
            updated_at: now,
            completed_at: None,
        },
        Task {
            id: "4".into(),
            title: "Read \"Clean Code\"".into(),
            description: Some("Chapters 1-3".into()),
            category: TaskCategory::Personal,
            priority: TaskPriority::Low,
            status: TaskStatus::Completed,
            due_date: Some(now - Duration::days(1)),
            estimated_time: Some(90),
            actual_time: Some(75),
            created_at: now - Duration::days(5),
            updated_at: now - Duration::days(1),
            completed_at: Some(now - Duration::days(1)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_distinct() {
        let now = Utc::now();
        let tasks = sample_tasks(now);
        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn seed_keeps_completed_at_consistent_with_status() {
        let tasks = sample_tasks(Utc::now());
        for task in &tasks {
            assert_eq!(
                task.completed_at.is_some(),
                task.status == TaskStatus::Completed,
                "task {} breaks the completed_at invariant",
                task.id
            );
        }
    }

    #[test]
    fn seed_covers_every_category() {
        let tasks = sample_tasks(Utc::now());
        for category in TaskCategory::ALL {
            assert!(tasks.iter().any(|t| t.category == category));
        }
    }
}
