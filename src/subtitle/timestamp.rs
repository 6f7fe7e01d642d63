//! Модуль форматирования временных меток
//!
//! Этот модуль содержит функции для преобразования секунд
//! в текстовый формат `HH:MM:SS.mmm`, используемый в треке субтитров.

use crate::error::{Result, SubStudioError};

/// Форматирует временную метку в формат `HH:MM:SS.mmm`.
///
/// Часы и минуты дополняются нулями до двух знаков; поле часов не
/// ограничено сверху и при значениях больше 99 занимает три и более
/// знаков. Секунды всегда содержат ровно три знака после точки.
///
/// # Аргументы
///
/// * `seconds` - Неотрицательное смещение в секундах
///
/// # Возвращает
///
/// Отформатированную строку или ошибку, если метка отрицательная
/// или не является конечным числом (субтитр не может предшествовать
/// началу видео).
pub fn format_timestamp(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(SubStudioError::InvalidTimestamp(format!(
            "Timestamp must be a non-negative number of seconds, got {}",
            seconds
        )));
    }

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let seconds_remainder = seconds % 60.0;

    Ok(format!(
        "{:02}:{:02}:{:06.3}",
        hours, minutes, seconds_remainder
    ))
}
