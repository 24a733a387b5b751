//! Blob store port for durable key-value persistence.

/// Error type carried by blob store operations.
pub type BlobError = Box<dyn std::error::Error + Send + Sync>;

/// Durable key-value store holding one serialized snapshot per key.
///
/// The task store keeps the entire collection under a single fixed key and
/// rewrites the whole blob on every mutation. Abstracting the mechanism
/// keeps the backing medium (file, browser storage, embedded database)
/// swappable without touching the business logic.
pub trait BlobStore: Send + Sync {
    /// Loads the blob stored under `key`, or `None` if no blob exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, BlobError>;

    /// Writes `contents` under `key`, creating or overwriting the blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn save(&self, key: &str, contents: &str) -> Result<(), BlobError>;
}
