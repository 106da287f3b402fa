//! End-to-end behaviour through the facade functions

use approx::assert_relative_eq;
use natural_breaks::{
    classify, format_breaks, select_best_k, ClassPartition, Error, JenksClassifier, ValueSet,
};
use proptest::prelude::*;

#[test]
fn test_exact_partition_example() {
    let values = [1.0, 1.0, 1.0, 5.0, 5.0, 9.0, 9.0, 9.0];
    let (maxima, partition) = classify(&values, 3).unwrap();
    assert_eq!(partition.sizes(), vec![3, 2, 3]);
    assert_eq!(maxima.as_slice(), &[1.0, 1.0, 5.0, 9.0]);

    let classification = JenksClassifier::new().classify(&values, 3).unwrap();
    assert_eq!(classification.gvf(), 1.0);
    assert_eq!(classification.resolve_stats().passes, 0);
    assert_eq!(classification.optimize_stats().passes, 0);
}

#[test]
fn test_outlier_example() {
    let values = [1.0, 2.0, 3.0, 4.0, 100.0];
    let (maxima, partition) = classify(&values, 2).unwrap();
    assert_eq!(partition.sizes(), vec![4, 1]);
    assert_eq!(maxima.as_slice(), &[1.0, 4.0, 100.0]);
    assert_eq!(format_breaks(&values, &maxima).unwrap(), vec!["1 - 4", "100"]);
}

#[test]
fn test_five_distinct_values_skip_search() {
    let values = [2.0, 4.0, 4.0, 6.0, 8.0, 8.0, 8.0, 10.0];
    let (maxima, partition, k, gvf) = select_best_k(&values, 4, 7).unwrap();
    assert_eq!(k, 5);
    assert_eq!(gvf, 1.0);
    assert_eq!(partition.sizes(), vec![1, 2, 1, 3, 1]);
    assert_eq!(maxima.as_slice(), &[2.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    let selection = JenksClassifier::new().select(&values).unwrap();
    assert!(!selection.searched());
    assert!(selection.gvf_table().is_empty());
}

#[test]
fn test_search_picks_highest_gvf() {
    let values: Vec<f64> = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 30.0, 31.0, 55.0, 56.0, 90.0]
        .iter()
        .flat_map(|&v| [v, v + 0.5])
        .collect();
    let (_, _, k, gvf) = select_best_k(&values, 2, 5).unwrap();

    let best = (2..=5)
        .map(|k| JenksClassifier::new().classify(&values, k).unwrap().gvf())
        .fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(gvf, best);
    assert!((2..=5).contains(&k));
}

#[test]
fn test_errors_surface() {
    assert!(matches!(classify(&[], 2), Err(Error::InvalidInput(_))));
    assert!(matches!(classify(&[1.0, 2.0], 0), Err(Error::InvalidInput(_))));
    assert!(matches!(classify(&[1.0, 2.0], 3), Err(Error::InvalidInput(_))));
    assert!(matches!(select_best_k(&[], 4, 7), Err(Error::InvalidInput(_))));
}

proptest! {
    #[test]
    fn prop_labels_and_partition_agree_with_maxima(
        raw in prop::collection::vec((0u16..400).prop_map(|v| f64::from(v) / 4.0), 1..120),
        k in 1usize..8,
    ) {
        let values = ValueSet::new(&raw).unwrap();
        prop_assume!(k <= values.distinct_count());
        if let Ok((maxima, partition)) = classify(&raw, k) {
            let labels = format_breaks(&raw, &maxima).unwrap();
            prop_assert_eq!(labels.len(), k);
            prop_assert_eq!(ClassPartition::from_maxima(&values, &maxima).unwrap(), partition);
        }
    }
}
