//! # Типы субтитров
//!
//! Этот модуль содержит общие типы данных для конвейера
//! аннотация -> реплика -> трек.

use serde::{Deserialize, Serialize};

/// Сырое событие аннотации, захваченное во время воспроизведения видео.
///
/// Порядок аннотаций - это порядок захвата; библиотека его сохраняет
/// и никогда не сортирует по временным меткам.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Смещение от начала видео в секундах
    pub timestamp: f64,
    /// Текст аннотации
    pub text: String,
}

/// Одна пронумерованная реплика субтитров с интервалом показа.
///
/// Создается только секвенсором; инварианты: `end > start`,
/// `index` начинается с 1 и строго возрастает на 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Порядковый номер реплики (с 1)
    pub index: usize,
    /// Начальное время показа в секундах
    pub start: f64,
    /// Конечное время показа в секундах
    pub end: f64,
    /// Текст реплики
    pub text: String,
}
