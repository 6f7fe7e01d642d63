//! Модуль конфигурации библиотеки sub-studio
//!
//! Этот модуль содержит структуры для настройки генерации субтитров.

use serde::{Deserialize, Serialize};

/// Конфигурация библиотеки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Длительность показа каждой реплики в секундах
    pub cue_duration: f64,
    /// Директория для хранения загрузок (используется файловым бэкендом)
    pub uploads_dir: String,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            cue_duration: 1.0,
            uploads_dir: "uploads".to_string(),
        }
    }
}
