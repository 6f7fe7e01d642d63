//! Тест для модуля построения реплик

use crate::error::SubStudioError;
use crate::subtitle::sequencer::build_cues;
use crate::subtitle::types::{Annotation, Cue};

fn annotation(timestamp: f64, text: &str) -> Annotation {
    Annotation {
        timestamp,
        text: text.to_string(),
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    let cues = build_cues(&[], 1.0).unwrap();
    assert!(cues.is_empty());
}

#[test]
fn test_single_annotation() {
    let cues = build_cues(&[annotation(2.0, "hi")], 1.0).unwrap();

    assert_eq!(
        cues,
        vec![Cue {
            index: 1,
            start: 2.0,
            end: 3.0,
            text: "hi".to_string(),
        }]
    );
}

#[test]
fn test_indices_and_durations() {
    let annotations: Vec<Annotation> = (0..17)
        .map(|i| annotation(i as f64 * 2.5, "text"))
        .collect();

    let cues = build_cues(&annotations, 1.0).unwrap();

    // Длина сохраняется, номера идут ровно 1..=n, длительность фиксированная
    assert_eq!(cues.len(), annotations.len());
    for (i, cue) in cues.iter().enumerate() {
        assert_eq!(cue.index, i + 1);
        assert_eq!(cue.end - cue.start, 1.0);
        assert_eq!(cue.start, annotations[i].timestamp);
    }
}

#[test]
fn test_capture_order_is_preserved() {
    // Метки не по возрастанию - нумерация все равно идет в порядке захвата
    let cues = build_cues(&[annotation(5.0, "later"), annotation(1.0, "earlier")], 1.0).unwrap();

    assert_eq!(cues[0].index, 1);
    assert_eq!(cues[0].start, 5.0);
    assert_eq!(cues[1].index, 2);
    assert_eq!(cues[1].start, 1.0);
}

#[test]
fn test_overlapping_cues_accepted() {
    // Реплики ближе секунды друг к другу - интервалы пересекаются как есть
    let cues = build_cues(&[annotation(0.0, "a"), annotation(0.4, "b")], 1.0).unwrap();

    assert!(cues[0].end > cues[1].start);
}

#[test]
fn test_custom_duration() {
    let cues = build_cues(&[annotation(10.0, "x")], 2.5).unwrap();

    assert_eq!(cues[0].start, 10.0);
    assert_eq!(cues[0].end, 12.5);
}

#[test]
fn test_whitespace_text_accepted() {
    let cues = build_cues(&[annotation(1.0, "   ")], 1.0).unwrap();
    assert_eq!(cues[0].text, "   ");
}

#[test]
fn test_negative_timestamp_aborts_whole_call() {
    let annotations = vec![annotation(0.0, "ok"), annotation(-2.0, "bad")];

    let err = build_cues(&annotations, 1.0).unwrap_err();
    assert!(matches!(err, SubStudioError::InvalidTimestamp(_)));
}

#[test]
fn test_invalid_duration_rejected() {
    let annotations = vec![annotation(0.0, "x")];

    assert!(matches!(
        build_cues(&annotations, 0.0).unwrap_err(),
        SubStudioError::Configuration(_)
    ));
    assert!(matches!(
        build_cues(&annotations, -1.0).unwrap_err(),
        SubStudioError::Configuration(_)
    ));
    assert!(build_cues(&annotations, f64::NAN).is_err());
}
