//! Live blob store backed by one JSON file per key.

use std::path::{Path, PathBuf};

use crate::ports::blob::{BlobError, BlobStore};

/// Blob store that keeps each key as `<root>/<key>.json` on disk.
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Creates a blob store rooted at the given directory.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, BlobError> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn save(&self, key: &str, contents: &str) -> Result<(), BlobError> {
        let path = self.blob_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }
}
