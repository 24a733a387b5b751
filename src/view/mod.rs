//! Read-only views derived from the store's task snapshot.
//!
//! Everything here is presentation-side logic: filtering and ordering for
//! the list view, due-state predicates and day queries for the calendar,
//! and the breakdowns behind the statistics page. Nothing in this module
//! mutates or persists.

mod calendar;
mod filter;
mod insights;
mod sort;

pub use calendar::{day_has_overdue, is_due_soon, is_overdue, tasks_due_on};
pub use filter::TaskQuery;
pub use insights::{
    category_breakdown, priority_breakdown, weekly_completion, CategorySlice, DaySummary,
    PrioritySlice,
};
pub use sort::{display_order, sort_for_display};
