//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Timestamps (`created_at`, `updated_at`, `completed_at`) and the overdue
/// check all read time through this port, so tests can pin "now".
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
