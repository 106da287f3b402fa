//! Labels for classifications produced by the Jenks classifier

use breaks_jenks::JenksClassifier;
use breaks_labels::BreaksFormatter;

#[test]
fn test_labels_follow_classification() {
    let values = [1.0, 2.0, 3.0, 4.0, 100.0];
    let classification = JenksClassifier::new().classify(&values, 2).unwrap();
    let labels = BreaksFormatter::new()
        .format(&values, classification.maxima())
        .unwrap();
    assert_eq!(labels, vec!["1 - 4", "100"]);
}

#[test]
fn test_one_label_per_selected_class() {
    let values: Vec<f64> = (0..60).map(|i| f64::from((i * 37) % 101)).collect();
    let selection = JenksClassifier::new().select(&values).unwrap();
    let labels = BreaksFormatter::new()
        .format(&values, selection.classification().maxima())
        .unwrap();

    assert_eq!(labels.len(), selection.k());
    assert!(labels[0].starts_with('0'));
    let last = labels.last().unwrap();
    let top = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(last.ends_with(&top.to_string()), "{last}");
}

#[test]
fn test_exact_classification_gives_single_values() {
    let values = [2.0, 2.0, 7.5, 7.5, 7.5, 11.0];
    let classification = JenksClassifier::new().classify(&values, 3).unwrap();
    let labels = BreaksFormatter::new()
        .format(&values, classification.maxima())
        .unwrap();
    assert_eq!(labels, vec!["2", "7.5", "11"]);
}
