use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StorageKey;

/// Filesystem-backed store for uploaded documents.
pub struct LocalBlobStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalBlobStore {
    pub fn new(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, key: &StorageKey, data: Bytes) -> Result<(), BlobStoreError> {
        let path = StorePath::from(key.as_str());
        self.inner
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), BlobStoreError> {
        let path = StorePath::from(key.as_str());
        self.inner
            .delete(&path)
            .await
            .map_err(|e| BlobStoreError::DeleteFailed(e.to_string()))
    }
}
