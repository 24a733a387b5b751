//! Display ordering for the task list view.

use std::cmp::Ordering;

use crate::task::{Task, TaskStatus};

/// Comparator implementing the list view's display order.
///
/// Completed tasks sort after everything else; ties break by priority rank
/// (urgent first), then by due date ascending with undated tasks last. Two
/// undated tasks compare equal, so a stable sort keeps their snapshot order.
#[must_use]
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    let a_done = a.status == TaskStatus::Completed;
    let b_done = b.status == TaskStatus::Completed;
    if a_done != b_done {
        return if a_done { Ordering::Greater } else { Ordering::Less };
    }

    match a.priority.rank().cmp(&b.priority.rank()) {
        Ordering::Equal => {}
        other => return other,
    }

    match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
    }
}

/// Sorts a task list in place into display order. Stable.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(display_order);
}
