//! Task data model.
//!
//! Defines the Rust types that mirror the persisted JSON task schema.
//! These are serialized/deserialized by the store and consumed by the views.

mod model;
mod stats;

pub use model::{NewTask, Task, TaskCategory, TaskPatch, TaskPriority, TaskStatus};
pub use stats::TaskStats;
