//! Core task types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    /// Revision, reading, exam preparation.
    Study,
    /// Graded coursework with a hand-in.
    Assignment,
    /// Longer-running group or solo project work.
    Project,
    /// Everything outside of school.
    Personal,
}

impl TaskCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Study, Self::Assignment, Self::Project, Self::Personal];
}

/// Priority of a task, ordered urgent > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    Medium,
    /// Should be done soon.
    High,
    /// Drop everything else.
    Urgent,
}

impl TaskPriority {
    /// All priorities from most to least urgent.
    pub const ALL: [Self; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    /// Sort rank for display ordering: urgent=0, high=1, medium=2, low=3.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

/// A unit of work tracked by the store.
///
/// Field names serialize in camelCase and optional fields are omitted when
/// absent, so blobs written by earlier versions of the application revive
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique stable identifier, assigned at creation.
    pub id: String,
    /// Non-empty title. Validated by the caller, not re-checked here.
    pub title: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category the task belongs to.
    pub category: TaskCategory,
    /// Priority of the task.
    pub priority: TaskPriority,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// When the task is due, if scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated effort in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    /// Actual effort in minutes, meaningful once completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<u32>,
    /// Creation timestamp, fixed at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
    /// Present exactly while `status` is [`TaskStatus::Completed`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payload for creating a task.
///
/// Excludes the fields the store assigns itself (`id`, `created_at`,
/// `updated_at`, `completed_at`).
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Non-empty title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Category the task belongs to.
    pub category: TaskCategory,
    /// Priority of the task.
    pub priority: TaskPriority,
    /// Initial lifecycle status.
    pub status: TaskStatus,
    /// When the task is due, if scheduled.
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated effort in minutes.
    pub estimated_time: Option<u32>,
    /// Actual effort in minutes.
    pub actual_time: Option<u32>,
}

/// Field-level partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New title (if `Some`).
    pub title: Option<String>,
    /// New description (if `Some`).
    pub description: Option<String>,
    /// New category (if `Some`).
    pub category: Option<TaskCategory>,
    /// New priority (if `Some`).
    pub priority: Option<TaskPriority>,
    /// New status (if `Some`).
    pub status: Option<TaskStatus>,
    /// New due date (if `Some`).
    pub due_date: Option<DateTime<Utc>>,
    /// New estimated effort in minutes (if `Some`).
    pub estimated_time: Option<u32>,
    /// New actual effort in minutes (if `Some`).
    pub actual_time: Option<u32>,
    /// New completion timestamp (if `Some`).
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Returns a patch that sets only `status`.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}
