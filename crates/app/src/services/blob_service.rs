//! Blob service — read/write/delete use-cases over the blob store port.

use hearth_domain::error::HearthError;
use hearth_domain::storage_key::StorageKey;

use crate::ports::BlobStore;

/// Application service fronting the per-key JSON blob store.
pub struct BlobService<B> {
    store: B,
}

impl<B: BlobStore> BlobService<B> {
    /// Create a new service backed by the given store.
    pub fn new(store: B) -> Self {
        Self { store }
    }

    /// Read the document under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file exists but cannot be read or
    /// parsed.
    pub async fn read(&self, key: &StorageKey) -> Result<Option<serde_json::Value>, HearthError> {
        self.store.read(key).await
    }

    /// Create or overwrite the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the write fails.
    #[tracing::instrument(skip(self, value))]
    pub async fn write(
        &self,
        key: &StorageKey,
        value: &serde_json::Value,
    ) -> Result<(), HearthError> {
        self.store.write(key, value).await
    }

    /// Remove the document under `key`; missing keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error when removal fails for a reason other than
    /// the file being absent.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, key: &StorageKey) -> Result<(), HearthError> {
        self.store.delete(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryBlobStore {
        store: Mutex<HashMap<StorageKey, serde_json::Value>>,
    }

    impl BlobStore for InMemoryBlobStore {
        fn read(
            &self,
            key: &StorageKey,
        ) -> impl Future<Output = Result<Option<serde_json::Value>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(key).cloned();
            async { Ok(result) }
        }

        fn write(
            &self,
            key: &StorageKey,
            value: &serde_json::Value,
        ) -> impl Future<Output = Result<(), HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(key.clone(), value.clone());
            async { Ok(()) }
        }

        fn delete(&self, key: &StorageKey) -> impl Future<Output = Result<(), HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(key);
            async { Ok(()) }
        }
    }

    fn key(name: &str) -> StorageKey {
        name.parse().unwrap()
    }

    #[tokio::test]
    async fn should_roundtrip_write_then_read() {
        let svc = BlobService::new(InMemoryBlobStore::default());
        let value = serde_json::json!({"cards": [1, 2, 3]});

        svc.write(&key("flashcards"), &value).await.unwrap();
        let fetched = svc.read(&key("flashcards")).await.unwrap();
        assert_eq!(fetched, Some(value));
    }

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let svc = BlobService::new(InMemoryBlobStore::default());
        assert!(svc.read(&key("absent")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_existing_key() {
        let svc = BlobService::new(InMemoryBlobStore::default());
        svc.write(&key("settings"), &serde_json::json!({}))
            .await
            .unwrap();

        svc.delete(&key("settings")).await.unwrap();
        assert!(svc.read(&key("settings")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_tolerate_deleting_missing_key() {
        let svc = BlobService::new(InMemoryBlobStore::default());
        svc.delete(&key("absent")).await.unwrap();
    }
}
