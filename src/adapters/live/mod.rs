//! Live adapters for real external interactions.

pub mod blob;
pub mod clock;
pub mod id_gen;

pub use blob::FileBlobStore;
pub use clock::LiveClock;
pub use id_gen::LiveIdGenerator;
