//! ID generator port for producing unique task identifiers.

/// Generates unique identifiers for new tasks.
///
/// Uniqueness across the live collection is the only hard requirement;
/// the scheme (UUID, time-based, sequential) is an adapter choice.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
