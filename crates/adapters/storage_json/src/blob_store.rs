//! File-backed implementation of [`BlobStore`].
//!
//! One `<key>.json` file per key, pretty-printed. The key alphabet is
//! enforced by [`StorageKey`] before a path is ever built, so a key cannot
//! escape the data directory.

use std::path::PathBuf;

use tokio::sync::Mutex;

use hearth_app::ports::BlobStore;
use hearth_domain::error::HearthError;
use hearth_domain::storage_key::StorageKey;

use crate::error::StorageError;
use crate::fs;

/// Directory-of-JSON-files blob store.
pub struct JsonBlobStore {
    dir: PathBuf,
    // One writer at a time; readers go straight to the filesystem.
    write_gate: Mutex<()>,
}

impl JsonBlobStore {
    /// Open the store, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            write_gate: Mutex::new(()),
        })
    }

    fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for JsonBlobStore {
    async fn read(&self, key: &StorageKey) -> Result<Option<serde_json::Value>, HearthError> {
        match fs::read_optional(&self.path_for(key))
            .await
            .map_err(StorageError::from)?
        {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, key: &StorageKey, value: &serde_json::Value) -> Result<(), HearthError> {
        let bytes = serde_json::to_vec_pretty(value).map_err(StorageError::from)?;
        let _gate = self.write_gate.lock().await;
        fs::write_atomic(&self.path_for(key), &bytes)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), HearthError> {
        let _gate = self.write_gate.lock().await;
        fs::remove_if_exists(&self.path_for(key))
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }
}
