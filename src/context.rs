//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{FileBlobStore, LiveClock, LiveIdGenerator};
use crate::ports::blob::BlobStore;
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects the task store depends on.
///
/// Each field provides access to one external boundary. The live
/// constructor wires up real adapters; tests build a context from
/// in-memory fakes.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Durable blob store for the persisted snapshot.
    pub blobs: Box<dyn BlobStore>,
    /// ID generator for new tasks.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with the system clock, a UUID id generator,
    /// and a file-backed blob store rooted at `data_dir`.
    #[must_use]
    pub fn live(data_dir: &Path) -> Self {
        Self {
            clock: Box::new(LiveClock),
            blobs: Box::new(FileBlobStore::new(data_dir)),
            id_gen: Box::new(LiveIdGenerator::new()),
        }
    }
}
