use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StorageKey;

/// Holds the original uploaded binaries, keyed per summary.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &StorageKey, data: Bytes) -> Result<(), BlobStoreError>;

    async fn delete(&self, key: &StorageKey) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
