//! List-view filtering.

use crate::task::{Task, TaskCategory, TaskStatus};

/// Filter for the task list view.
///
/// All criteria combine conjunctively. An empty search string matches every
/// task; `None` for category or status acts as the "all" wildcard.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Case-insensitive substring matched against title or description.
    pub search: String,
    /// Restrict to one category, or `None` for all.
    pub category: Option<TaskCategory>,
    /// Restrict to one status, or `None` for all.
    pub status: Option<TaskStatus>,
}

impl TaskQuery {
    /// Returns `true` if `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
        let matches_category = self.category.is_none_or(|c| task.category == c);
        let matches_status = self.status.is_none_or(|s| task.status == s);

        matches_search && matches_category && matches_status
    }

    /// Applies the query to a snapshot, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
