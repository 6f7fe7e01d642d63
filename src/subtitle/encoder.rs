//! Модуль кодирования трека субтитров
//!
//! Этот модуль сериализует последовательность реплик в итоговый
//! текст трека в формате SRT.

use crate::error::Result;
use crate::subtitle::timestamp::format_timestamp;
use crate::subtitle::types::Cue;

/// Кодирует последовательность реплик в текст трека.
///
/// Для каждой реплики выводится блок: строка с номером, строка
/// `start --> end`, строка текста и пустая строка-разделитель.
/// Блоки идут в порядке реплик; завершающие пробельные символы
/// обрезаются, так что после последнего блока пустой строки нет.
///
/// # Аргументы
///
/// * `cues` - Список реплик в порядке вывода
///
/// # Возвращает
///
/// Текст трека (пустая строка для пустого списка) или ошибку
/// форматирования временной метки - частичный текст никогда
/// не возвращается.
pub fn encode_srt(cues: &[Cue]) -> Result<String> {
    let mut srt_content = String::new();

    for cue in cues {
        srt_content.push_str(&format!("{}\n", cue.index));
        srt_content.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(cue.start)?,
            format_timestamp(cue.end)?
        ));
        srt_content.push_str(&format!("{}\n\n", cue.text));
    }

    Ok(srt_content.trim().to_string())
}
