//! Модуль хранилища
//!
//! Этот модуль определяет порт хранилища, через который библиотека
//! сохраняет видео и треки субтитров, и его реализации. Ядро конвейера
//! не зависит от конкретного механизма хранения - тесты используют
//! хранилище в памяти, рабочий код пишет на диск.

pub mod memory;
pub mod fs;

pub use memory::MemoryStorage;
pub use fs::FsStorage;

use async_trait::async_trait;

use crate::error::Result;

/// Порт хранилища: плоское отображение ключ -> байты.
///
/// Ключ - это имя файла без каталогов (например `video.mp4` или
/// `video.srt`); интерпретация ключа остается за реализацией.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Сохранить байты под ключом, перезаписывая существующее значение
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Прочитать байты по ключу
    ///
    /// Возвращает `NotFound`, если под ключом ничего не сохранено.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Проверить, сохранено ли что-нибудь под ключом
    async fn contains(&self, key: &str) -> bool;
}
