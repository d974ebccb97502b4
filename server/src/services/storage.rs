//! Local-disk photo storage.
//!
//! DESIGN
//! ======
//! Objects live at `{root}/{user_id}/{image_id}` and are served read-only
//! under `/uploads` by the router's static file service, so the database
//! only has to track ids.

use std::path::{Path, PathBuf};

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle on the uploads directory. Cheap to clone into handlers.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path for one object.
    #[must_use]
    pub fn object_path(&self, user_id: Uuid, image_id: Uuid) -> PathBuf {
        self.root.join(user_id.to_string()).join(image_id.to_string())
    }

    /// URL the object is served from.
    #[must_use]
    pub fn public_url(user_id: Uuid, image_id: Uuid) -> String {
        format!("/uploads/{user_id}/{image_id}")
    }

    /// Persist an uploaded object.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory or file cannot be written.
    pub async fn save(&self, user_id: Uuid, image_id: Uuid, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.object_path(user_id, image_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    /// Remove a stored object.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file exists but cannot be removed.
    pub async fn remove(&self, user_id: Uuid, image_id: Uuid) -> Result<(), StorageError> {
        let path = self.object_path(user_id, image_id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Already gone: deletion is idempotent.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
