//! Jenks natural breaks for one-dimensional data
//!
//! This crate re-exports the workspace crates and offers three free functions
//! covering the usual flow from raw observations to a legend:
//!
//! - [`classify`]: partition values into exactly `k` classes
//! - [`select_best_k`]: search a class-count range for the best GVF
//!   ([`select_best_k_default`] searches `DEFAULT_MIN_CLASSES..=DEFAULT_MAX_CLASSES`)
//! - [`format_breaks`]: render class maxima as readable range labels
//!
//! ```rust
//! use natural_breaks::{classify, format_breaks};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 100.0];
//! let (maxima, partition) = classify(&values, 2).unwrap();
//!
//! assert_eq!(partition.sizes(), vec![4, 1]);
//! assert_eq!(maxima.as_slice(), &[1.0, 4.0, 100.0]);
//! assert_eq!(format_breaks(&values, &maxima).unwrap(), vec!["1 - 4", "100"]);
//! ```
//!
//! For finer control (pass guards, per-stage statistics, assigning new
//! observations to classes) use [`JenksClassifier`] directly.

pub use breaks_core::{ClassMaxima, ClassPartition, Error, Result, Stage, ValueSet};
pub use breaks_jenks::{
    BreakClassifier, ClassCountSelector, Classification, JenksClassifier,
    JenksClassifierBuilder, JenksConfig, Selection, StageStats, DEFAULT_MAX_CLASSES,
    DEFAULT_MIN_CLASSES,
};
pub use breaks_labels::{BreaksFormatter, LabelStyle};

// Workspace crates, for access to their full module trees
pub use breaks_core as core_types;
pub use breaks_jenks as jenks;
pub use breaks_labels as labels;

/// Classify `values` into exactly `k` classes
///
/// Returns the class maxima and the per-class element counts.
pub fn classify(values: &[f64], k: usize) -> Result<(ClassMaxima, ClassPartition)> {
    Ok(JenksClassifier::new().classify(values, k)?.into_parts())
}

/// Pick the class count in `[k_min, k_max]` with the best goodness of variance fit
///
/// Returns the maxima, partition, chosen class count and its GVF. When the
/// data has at most `k_max` distinct values it is classified at its distinct
/// count without searching.
pub fn select_best_k(
    values: &[f64],
    k_min: usize,
    k_max: usize,
) -> Result<(ClassMaxima, ClassPartition, usize, f64)> {
    let selection = JenksClassifier::builder()
        .class_range(k_min, k_max)
        .build()?
        .select(values)?;
    let (k, gvf) = (selection.k(), selection.gvf());
    let (maxima, partition) = selection.into_classification().into_parts();
    Ok((maxima, partition, k, gvf))
}

/// [`select_best_k`] over the default range of 4 to 7 classes
pub fn select_best_k_default(values: &[f64]) -> Result<(ClassMaxima, ClassPartition, usize, f64)> {
    select_best_k(values, DEFAULT_MIN_CLASSES, DEFAULT_MAX_CLASSES)
}

/// Render one `"low - high"` label per class described by `maxima`
pub fn format_breaks(values: &[f64], maxima: &ClassMaxima) -> Result<Vec<String>> {
    BreaksFormatter::new().format(values, maxima)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_best_k_defaults_match_config() {
        let values: Vec<f64> = (1..=12).map(f64::from).collect();
        let (maxima, partition, k, gvf) = select_best_k_default(&values).unwrap();
        assert_eq!((DEFAULT_MIN_CLASSES, DEFAULT_MAX_CLASSES), (4, 7));
        assert!((4..=7).contains(&k));
        assert_eq!(maxima.class_count(), k);
        assert_eq!(partition.total(), 12);
        assert!(gvf > 0.9);

        let explicit = select_best_k(&values, 4, 7).unwrap();
        assert_eq!((explicit.0, explicit.1, explicit.2), (maxima, partition, k));
        assert_eq!(explicit.3, gvf);
    }

    #[test]
    fn test_default_range_classifies_few_distinct_values_directly() {
        let values = [3.0, 1.0, 2.0, 2.0, 5.0, 4.0];
        let (maxima, partition, k, gvf) = select_best_k_default(&values).unwrap();
        assert_eq!(k, 5);
        assert_eq!(gvf, 1.0);
        assert_eq!(partition.sizes(), vec![1, 2, 1, 1, 1]);
        assert_eq!(maxima.as_slice(), &[1.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            select_best_k(&[1.0, 2.0, 3.0], 5, 2),
            Err(Error::InvalidParameter(_))
        ));
    }
}
