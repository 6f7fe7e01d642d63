//! Модуль обработки ошибок библиотеки sub-studio
//!
//! Этот модуль содержит типы ошибок, которые могут возникнуть при работе библиотеки.

use thiserror::Error;

/// Ошибки библиотеки sub-studio
#[derive(Debug, Error)]
pub enum SubStudioError {
    /// Отрицательная или некорректная временная метка
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Некорректный запрос (битый JSON или неверная форма аннотаций)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Трек не найден в хранилище
    #[error("Track not found: {0}")]
    NotFound(String),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Неверный формат сохраненных данных
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Ошибка конфигурации
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Другая ошибка
    #[error("Other error: {0}")]
    Other(String),
}

impl From<&str> for SubStudioError {
    fn from(s: &str) -> Self {
        SubStudioError::Other(s.to_string())
    }
}

impl From<String> for SubStudioError {
    fn from(s: String) -> Self {
        SubStudioError::Other(s)
    }
}

/// Тип Result для библиотеки sub-studio
pub type Result<T> = std::result::Result<T, SubStudioError>;
