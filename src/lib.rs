//! Основной файл библиотеки sub-studio
//!
//! Эта библиотека превращает аннотации с временными метками, захваченные
//! во время воспроизведения видео, в трек субтитров формата SRT,
//! сохраняет видео вместе с треком под общим базовым именем и отдает
//! сохраненный трек по имени без изменений.

pub mod config;
pub mod error;
pub mod storage;
pub mod subtitle;
pub mod utils;

use crate::config::TrackConfig;
use crate::error::{Result, SubStudioError};
use crate::storage::{FsStorage, MemoryStorage, StoragePort};
use crate::subtitle::types::Annotation;
use crate::utils::common::{derive_base_name, sanitize_filename};

/// Основная структура для работы с библиотекой
pub struct SubStudio {
    /// Конфигурация библиотеки
    config: TrackConfig,
    /// Порт хранилища для видео и треков
    storage: Box<dyn StoragePort>,
}

impl SubStudio {
    /// Создать новый экземпляр SubStudio с указанной конфигурацией и хранилищем
    pub fn new(config: TrackConfig, storage: Box<dyn StoragePort>) -> Self {
        Self { config, storage }
    }

    /// Создать экземпляр с файловым хранилищем из `config.uploads_dir`
    pub fn with_fs_storage(config: TrackConfig) -> Self {
        let storage = FsStorage::new(config.uploads_dir.clone());
        Self::new(config, Box::new(storage))
    }

    /// Создать экземпляр с хранилищем в памяти и настройками по умолчанию
    pub fn in_memory() -> Self {
        Self::new(TrackConfig::default(), Box::new(MemoryStorage::new()))
    }

    /// Принять загрузку: видео и JSON-список аннотаций.
    ///
    /// Разбирает аннотации (строгая проверка формы), строит реплики,
    /// кодирует трек и сохраняет видео с треком под общим базовым
    /// именем, выведенным из имени загруженного файла. Вся логика
    /// форматирования находится в модуле `subtitle`; здесь только
    /// оркестрация.
    ///
    /// # Аргументы
    ///
    /// * `file_name` - Имя загруженного видеофайла
    /// * `video_bytes` - Содержимое видеофайла
    /// * `annotations_json` - JSON-массив аннотаций `{"timestamp", "text"}`
    ///
    /// # Возвращает
    ///
    /// Базовое имя, под которым сохранены видео и трек.
    pub async fn store_upload(
        &self,
        file_name: &str,
        video_bytes: &[u8],
        annotations_json: &str,
    ) -> Result<String> {
        if file_name.is_empty() || video_bytes.is_empty() {
            return Err(SubStudioError::BadRequest(
                "Invalid video file: empty name or content".to_string(),
            ));
        }

        log::info!(
            "Received upload {} ({} bytes of video)",
            file_name,
            video_bytes.len()
        );

        let annotations = subtitle::parser::parse_annotations(annotations_json)?;
        let cues = subtitle::sequencer::build_cues(&annotations, self.config.cue_duration)?;
        let track_text = subtitle::encoder::encode_srt(&cues)?;

        let base_name = derive_base_name(file_name);
        let video_key = sanitize_filename(file_name);
        let track_key = format!("{}.srt", base_name);

        if self.storage.contains(&track_key).await {
            log::warn!("Overwriting existing track {}", track_key);
        }

        self.storage.put(&video_key, video_bytes).await?;
        self.storage.put(&track_key, track_text.as_bytes()).await?;

        log::info!(
            "Stored video {} and track {} ({} cues)",
            video_key,
            track_key,
            cues.len()
        );
        Ok(base_name)
    }

    /// Вернуть сохраненный трек по базовому имени без изменений.
    ///
    /// # Аргументы
    ///
    /// * `base_name` - Базовое имя, возвращенное из `store_upload`
    ///
    /// # Возвращает
    ///
    /// Текст трека или `NotFound`, если под этим именем ничего
    /// не сохранено.
    pub async fn fetch_track(&self, base_name: &str) -> Result<String> {
        let track_key = format!("{}.srt", base_name);
        let bytes = self.storage.get(&track_key).await?;

        String::from_utf8(bytes).map_err(|e| {
            SubStudioError::InvalidFormat(format!("Stored track is not valid UTF-8: {}", e))
        })
    }
}

/// Публичный API для генерации трека без хранилища
pub fn generate_track(annotations: &[Annotation], cue_duration: f64) -> Result<String> {
    let cues = subtitle::sequencer::build_cues(annotations, cue_duration)?;
    subtitle::encoder::encode_srt(&cues)
}
