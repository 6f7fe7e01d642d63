//! # Subtitle модуль
//!
//! Модуль конвейера субтитров: разбор аннотаций, построение реплик
//! и кодирование итогового трека. Все функции чистые и синхронные,
//! ввод-вывод остается за хранилищем.

pub mod types;
pub mod parser;
pub mod timestamp;
pub mod sequencer;
pub mod encoder;

// Публично экспортируем основные типы и API для удобства использования
pub use types::{Annotation, Cue};
pub use parser::parse_annotations;
pub use timestamp::format_timestamp;
pub use sequencer::build_cues;
pub use encoder::encode_srt;
