//! Live adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Live ID generator that produces random UUIDs.
///
/// Earlier versions of the app derived ids from the creation timestamp;
/// random UUIDs give the same stability with no collision window.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
