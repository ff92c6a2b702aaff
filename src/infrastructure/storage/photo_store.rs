//! Local filesystem store for cliente photos.
//!
//! Files are kept under a single flat directory and named by their original
//! upload filename. A duplicate filename overwrites the existing file.

use std::path::PathBuf;

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};

use crate::shared::error::AppError;

/// Photo file store rooted at the configured upload directory.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    /// Root directory for all stored photos.
    root: PathBuf,
}

impl PhotoStore {
    /// Create a new photo store rooted at the given path. The directory is
    /// created lazily on first write.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a filename to its on-disk path within the root.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Write a photo under its filename, overwriting any existing file with
    /// the same name.
    pub async fn save(&self, filename: &str, data: Bytes) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await?;

        let path = self.path_of(filename);
        fs::write(&path, &data).await?;

        debug!(filename, bytes = data.len(), "Stored photo");
        Ok(())
    }

    /// Best-effort removal of a stored photo. A missing file is a silent
    /// no-op; other failures are logged and swallowed.
    pub async fn remove(&self, filename: &str) {
        let path = self.path_of(filename);
        match fs::remove_file(&path).await {
            Ok(()) => debug!(filename, "Removed photo"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(filename, error = %e, "Failed to remove photo"),
        }
    }
}
