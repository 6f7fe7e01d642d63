//! Файловое хранилище
//!
//! Реализация порта хранилища поверх каталога на диске. Каждый ключ
//! превращается в безопасное имя файла внутри корневого каталога,
//! как это делал исходный сервис с каталогом `uploads/`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use path_clean::PathClean;

use crate::error::{Result, SubStudioError};
use crate::storage::StoragePort;
use crate::utils::common::sanitize_filename;

/// Хранилище ключ -> файл в корневом каталоге
pub struct FsStorage {
    /// Корневой каталог хранилища
    root: PathBuf,
}

impl FsStorage {
    /// Создать хранилище с указанным корневым каталогом.
    ///
    /// Каталог создается лениво при первой записи.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Корневой каталог хранилища
    pub fn root(&self) -> &Path {
        &self.root
    }

    // Ключ проходит через sanitize_filename, поэтому разделители путей
    // до join не доживают и запись за пределы корня невозможна.
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_filename(key)).clean()
    }
}

#[async_trait]
impl StoragePort for FsStorage {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.key_path(key);
        tokio::fs::write(&path, bytes).await?;

        debug!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.key_path(key);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SubStudioError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn contains(&self, key: &str) -> bool {
        match tokio::fs::metadata(self.key_path(key)).await {
            Ok(metadata) => metadata.is_file(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("uploads"));

        storage.put("clip.srt", b"1\n00:00:00.000").await.unwrap();

        assert!(storage.contains("clip.srt").await);
        assert_eq!(storage.get("clip.srt").await.unwrap(), b"1\n00:00:00.000");
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        let err = storage.get("missing.srt").await.unwrap_err();
        assert!(matches!(err, SubStudioError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_keys_are_sanitized() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path());

        storage.put("My Clip.srt", b"data").await.unwrap();

        // Ключ с пробелами и верхним регистром превращается в безопасное имя файла
        assert!(dir.path().join("my_clip.srt").is_file());
        assert_eq!(storage.get("My Clip.srt").await.unwrap(), b"data");
    }

    #[tokio::test]
    async fn test_key_cannot_escape_root() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("uploads"));

        storage.put("../escape.srt", b"data").await.unwrap();

        // Разделители путей заменяются, файл остается внутри корня
        assert!(dir.path().join("uploads").join(".._escape.srt").is_file());
        assert!(!dir.path().join("escape.srt").exists());
    }
}
