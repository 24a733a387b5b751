//! taskdesk — task store core for a personal study planner.
//!
//! The [`TaskStore`] owns the authoritative task collection, persists it as
//! one JSON blob through the [`ports::BlobStore`] boundary, and derives the
//! statistics the dashboard renders. The [`view`] module holds the
//! presentation-side read logic (filtering, display ordering, calendar and
//! breakdown views). Everything is synchronous and single-writer: one user,
//! one device, one logical mutation at a time.

pub mod adapters;
pub mod context;
pub mod ports;
pub mod store;
pub mod task;
pub mod view;

pub use context::ServiceContext;
pub use store::{StoreError, TaskStore, STORAGE_KEY};
pub use task::{NewTask, Task, TaskCategory, TaskPatch, TaskPriority, TaskStats, TaskStatus};
