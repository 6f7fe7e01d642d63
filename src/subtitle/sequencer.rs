//! Модуль построения реплик из аннотаций
//!
//! Этот модуль превращает упорядоченный список аннотаций в список
//! пронумерованных реплик с фиксированной длительностью показа.

use log::debug;

use crate::error::{Result, SubStudioError};
use crate::subtitle::types::{Annotation, Cue};

/// Строит последовательность реплик из списка аннотаций.
///
/// Каждая аннотация на позиции `i` (с 1) дает реплику с `index = i`,
/// `start` равным метке аннотации и `end = start + cue_duration`.
/// Реплики нумеруются в порядке захвата, без сортировки по времени;
/// пересечения интервалов показа соседних реплик не разрешаются и
/// принимаются как есть. Текст не валидируется - пустая строка дает
/// пустую реплику.
///
/// # Аргументы
///
/// * `annotations` - Список аннотаций в порядке захвата
/// * `cue_duration` - Длительность показа каждой реплики в секундах
///
/// # Возвращает
///
/// Вектор реплик или ошибку при первой отрицательной метке -
/// частичный результат никогда не возвращается.
pub fn build_cues(annotations: &[Annotation], cue_duration: f64) -> Result<Vec<Cue>> {
    if !cue_duration.is_finite() || cue_duration <= 0.0 {
        return Err(SubStudioError::Configuration(format!(
            "Cue duration must be a positive number of seconds, got {}",
            cue_duration
        )));
    }

    let mut cues = Vec::with_capacity(annotations.len());

    for (i, annotation) in annotations.iter().enumerate() {
        if !annotation.timestamp.is_finite() || annotation.timestamp < 0.0 {
            return Err(SubStudioError::InvalidTimestamp(format!(
                "Annotation #{} has invalid timestamp {}",
                i + 1,
                annotation.timestamp
            )));
        }

        cues.push(Cue {
            index: i + 1,
            start: annotation.timestamp,
            end: annotation.timestamp + cue_duration,
            text: annotation.text.clone(),
        });
    }

    debug!("Built {} cues from {} annotations", cues.len(), annotations.len());
    Ok(cues)
}
