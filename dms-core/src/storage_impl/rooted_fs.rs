use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::storage::{StorageError, StorageResult, StoragePort};

/// One rooted directory tree backing either the cache tier or the NAS tier
/// (§4.1). Both tiers use this exact adapter, constructed with a different
/// root; nothing in the adapter itself is tier-specific.
pub struct RootedFsStorage {
    root: PathBuf,
}

impl RootedFsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        RootedFsStorage { root: root.into() }
    }

    /// Resolve `key` under the root, rejecting anything that would escape it
    /// via `..` or an absolute path. Keys are always `/`-separated logical
    /// paths (e.g. `sessions/{id}/parts/{n}`, `.trash/{id}__{name}`), never
    /// raw user input.
    fn resolve(&self, key: &str) -> StorageResult<PathBuf> {
        let mut resolved = self.root.clone();
        for component in key.split('/') {
            match component {
                "" | "." => continue,
                ".." => {
                    return Err(StorageError::Other(anyhow::anyhow!(
                        "path traversal rejected: {key}"
                    )));
                }
                part => resolved.push(part),
            }
        }
        Ok(resolved)
    }

    fn map_io_err(key: &str, err: std::io::Error) -> StorageError {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
            std::io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(key.to_string()),
            _ => StorageError::Other(anyhow::Error::new(err).context(key.to_string())),
        }
    }
}

#[async_trait]
impl StoragePort for RootedFsStorage {
    async fn write_file(&self, key: &str, data: Bytes) -> StorageResult<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::map_io_err(key, e))?;
        }
        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| Self::map_io_err(key, e))?;
        file.write_all(&data)
            .await
            .map_err(|e| Self::map_io_err(key, e))?;
        file.flush().await.map_err(|e| Self::map_io_err(key, e))?;
        Ok(())
    }

    async fn read_file(&self, key: &str) -> StorageResult<Bytes> {
        let path = self.resolve(key)?;
        let data = fs::read(&path).await.map_err(|e| Self::map_io_err(key, e))?;
        Ok(Bytes::from(data))
    }

    async fn delete_file(&self, key: &str) -> StorageResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(Self::map_io_err(key, e)),
        }
    }

    async fn move_file(&self, src: &str, dst: &str) -> StorageResult<()> {
        let src_path = self.resolve(src)?;
        let dst_path = self.resolve(dst)?;
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::map_io_err(dst, e))?;
        }
        fs::rename(&src_path, &dst_path)
            .await
            .map_err(|e| Self::map_io_err(src, e))
    }

    async fn copy_file(&self, src: &str, dst: &str) -> StorageResult<()> {
        let src_path = self.resolve(src)?;
        let dst_path = self.resolve(dst)?;
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::map_io_err(dst, e))?;
        }
        fs::copy(&src_path, &dst_path)
            .await
            .map_err(|e| Self::map_io_err(src, e))?;
        Ok(())
    }

    async fn mkdir(&self, path: &str) -> StorageResult<()> {
        let resolved = self.resolve(path)?;
        fs::create_dir_all(&resolved)
            .await
            .map_err(|e| Self::map_io_err(path, e))
    }

    async fn rmdir(&self, path: &str, recursive: bool) -> StorageResult<()> {
        let resolved = self.resolve(path)?;
        let result = if recursive {
            fs::remove_dir_all(&resolved).await
        } else {
            fs::remove_dir(&resolved).await
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(Self::map_io_err(path, e)),
        }
    }

    async fn move_dir(&self, src: &str, dst: &str) -> StorageResult<()> {
        let src_path = self.resolve(src)?;
        let dst_path = self.resolve(dst)?;
        if let Some(parent) = dst_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::map_io_err(dst, e))?;
        }
        fs::rename(&src_path, &dst_path)
            .await
            .map_err(|e| Self::map_io_err(src, e))
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.resolve(key)?;
        Ok(fs::try_exists(&path)
            .await
            .map_err(|e| Self::map_io_err(key, e))?)
    }

    async fn size(&self, key: &str) -> StorageResult<u64> {
        let path = self.resolve(key)?;
        let meta = fs::metadata(&path)
            .await
            .map_err(|e| Self::map_io_err(key, e))?;
        Ok(meta.len())
    }

    async fn list(&self, path: &str) -> StorageResult<Vec<String>> {
        let resolved = self.resolve(path)?;
        let mut entries = match fs::read_dir(&resolved).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path.to_string()));
            }
            Err(e) => return Err(Self::map_io_err(path, e)),
        };
        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Self::map_io_err(path, e))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RootedFsStorage::new(dir.path());
        storage
            .write_file("a/b/c.txt", Bytes::from("hello"))
            .await
            .unwrap();
        let data = storage.read_file("a/b/c.txt").await.unwrap();
        assert_eq!(data, Bytes::from("hello"));
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RootedFsStorage::new(dir.path());
        let err = storage.read_file("nope.txt").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn traversal_outside_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RootedFsStorage::new(dir.path());
        let err = storage
            .write_file("../escape.txt", Bytes::from("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Other(_)));
    }

    #[tokio::test]
    async fn move_dir_relocates_subtree() {
        let dir = tempfile::tempdir().unwrap();
        let storage = RootedFsStorage::new(dir.path());
        storage.mkdir("folder/sub").await.unwrap();
        storage
            .write_file("folder/sub/file.txt", Bytes::from("x"))
            .await
            .unwrap();
        storage.move_dir("folder", "renamed").await.unwrap();
        assert!(storage.exists("renamed/sub/file.txt").await.unwrap());
        assert!(!storage.exists("folder").await.unwrap());
    }
}
