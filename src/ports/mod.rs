//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task store core and an
//! external system (time, durable storage, IDs). Implementations live in
//! `src/adapters/`.

pub mod blob;
pub mod clock;
pub mod id_gen;

pub use blob::{BlobError, BlobStore};
pub use clock::Clock;
pub use id_gen::IdGenerator;
