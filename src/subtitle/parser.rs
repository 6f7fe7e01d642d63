//! Модуль для разбора списка аннотаций
//!
//! Этот модуль содержит функции для разбора JSON-списка аннотаций,
//! полученного с границы загрузки.

use log::info;

use crate::error::{Result, SubStudioError};
use crate::subtitle::types::Annotation;

/// Разбирает JSON-массив аннотаций вида `[{"timestamp": 1.5, "text": "..."}]`.
///
/// Форма проверяется строго: не-массив, отсутствующее или нечисловое
/// поле `timestamp`, отсутствующее или нестроковое поле `text` -
/// все это отклоняется как некорректный запрос, и аннотации не
/// попадают в секвенсор.
///
/// # Аргументы
///
/// * `raw` - Сырая JSON-строка с границы загрузки
///
/// # Возвращает
///
/// Вектор аннотаций в исходном порядке или ошибку `BadRequest`.
pub fn parse_annotations(raw: &str) -> Result<Vec<Annotation>> {
    let annotations: Vec<Annotation> = serde_json::from_str(raw)
        .map_err(|e| SubStudioError::BadRequest(format!("Invalid annotations payload: {}", e)))?;

    info!("Parsed {} annotations from upload payload", annotations.len());
    Ok(annotations)
}
