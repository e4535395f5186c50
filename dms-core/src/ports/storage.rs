use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// The stable error-code set a storage-port implementation must map onto
/// (§4.1). Handlers (§4.6) pattern-match on these variants to decide
/// idempotent-success vs retry.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("in use: {0}")]
    InUse(String),
    #[error("connectivity error: {0}")]
    Conn(String),
    #[error("storage error: {0}")]
    Other(#[source] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// One rooted-directory-tree storage tier (§4.1). The NAS port and the cache
/// port share this exact trait shape; only the root differs.
#[async_trait]
pub trait StoragePort: Send + Sync {
    async fn write_file(&self, key: &str, data: Bytes) -> StorageResult<()>;
    async fn read_file(&self, key: &str) -> StorageResult<Bytes>;
    async fn delete_file(&self, key: &str) -> StorageResult<()>;
    async fn move_file(&self, src: &str, dst: &str) -> StorageResult<()>;
    async fn copy_file(&self, src: &str, dst: &str) -> StorageResult<()>;
    async fn mkdir(&self, path: &str) -> StorageResult<()>;
    async fn rmdir(&self, path: &str, recursive: bool) -> StorageResult<()>;
    async fn move_dir(&self, src: &str, dst: &str) -> StorageResult<()>;
    async fn exists(&self, key: &str) -> StorageResult<bool>;
    async fn size(&self, key: &str) -> StorageResult<u64>;
    async fn list(&self, path: &str) -> StorageResult<Vec<String>>;
}
