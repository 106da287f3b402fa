//! Result types for classification and class-count selection

use crate::gvf;
use breaks_core::{ClassMaxima, ClassPartition, ValueSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work done by one iterative stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStats {
    /// Full passes run, including the final pass that found nothing to do
    pub passes: usize,
    /// Structural changes applied
    pub moves: usize,
}

/// A finished classification of a value set into `k` classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    maxima: ClassMaxima,
    partition: ClassPartition,
    class_means: Vec<f64>,
    within_ssd: f64,
    gvf: f64,
    exact: bool,
    resolve_stats: StageStats,
    optimize_stats: StageStats,
}

impl Classification {
    /// Assemble a classification from a converged partition
    pub fn new(
        values: &ValueSet,
        partition: ClassPartition,
        exact: bool,
        resolve_stats: StageStats,
        optimize_stats: StageStats,
    ) -> Self {
        let maxima = ClassMaxima::from_partition(values, &partition);
        let class_means = partition.ranges().map(|r| values.mean(&r)).collect();
        let within_ssd = gvf::within_class_ssd(values, &partition);
        let gvf = gvf::gvf(values, &partition);
        Self {
            maxima,
            partition,
            class_means,
            within_ssd,
            gvf,
            exact,
            resolve_stats,
            optimize_stats,
        }
    }

    /// Number of classes
    pub fn class_count(&self) -> usize {
        self.partition.class_count()
    }

    /// Elements per class, low to high
    pub fn class_sizes(&self) -> Vec<usize> {
        self.partition.sizes()
    }

    /// Class edges `[min, max(class_0), ..., max(class_{k-1})]`
    pub fn maxima(&self) -> &ClassMaxima {
        &self.maxima
    }

    /// The partition over the sorted values
    pub fn partition(&self) -> &ClassPartition {
        &self.partition
    }

    /// Mean of each class
    pub fn class_means(&self) -> &[f64] {
        &self.class_means
    }

    /// Total within-class sum of squared deviations
    ///
    /// Infinite when the spread of the data is too wide to square in `f64`;
    /// [`gvf`](Self::gvf) stays finite regardless.
    pub fn within_class_ssd(&self) -> f64 {
        self.within_ssd
    }

    /// Goodness of variance fit
    pub fn gvf(&self) -> f64 {
        self.gvf
    }

    /// Whether the distinct-count shortcut produced this result
    pub fn was_exact(&self) -> bool {
        self.exact
    }

    /// Duplicate resolution statistics
    pub fn resolve_stats(&self) -> StageStats {
        self.resolve_stats
    }

    /// Boundary optimization statistics
    pub fn optimize_stats(&self) -> StageStats {
        self.optimize_stats
    }

    /// Class a value falls into, or `None` outside the classified range
    pub fn class_of(&self, value: f64) -> Option<usize> {
        self.maxima.class_of(value)
    }

    /// Class index for each observation, in the caller's order
    pub fn assign(&self, observations: &[f64]) -> Vec<Option<usize>> {
        observations.iter().map(|&v| self.class_of(v)).collect()
    }

    /// Split into the class maxima and partition
    pub fn into_parts(self) -> (ClassMaxima, ClassPartition) {
        (self.maxima, self.partition)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Classification(k={}, sizes={:?}, gvf={:.4})",
            self.class_count(),
            self.class_sizes(),
            self.gvf
        )
    }
}

/// Outcome of choosing a class count by GVF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    classification: Classification,
    gvf_table: Vec<(usize, f64)>,
}

impl Selection {
    /// Create a new selection result
    pub fn new(classification: Classification, gvf_table: Vec<(usize, f64)>) -> Self {
        Self {
            classification,
            gvf_table,
        }
    }

    /// The winning classification
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Chosen class count
    pub fn k(&self) -> usize {
        self.classification.class_count()
    }

    /// GVF of the chosen classification
    pub fn gvf(&self) -> f64 {
        self.classification.gvf()
    }

    /// `(k, gvf)` for every candidate tried, ascending by k
    ///
    /// Empty when the distinct-count shortcut skipped the search.
    pub fn gvf_table(&self) -> &[(usize, f64)] {
        &self.gvf_table
    }

    /// Whether a GVF search was performed
    pub fn searched(&self) -> bool {
        !self.gvf_table.is_empty()
    }

    /// Unwrap the winning classification
    pub fn into_classification(self) -> Classification {
        self.classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlier_classification() -> (Vec<f64>, Classification) {
        let raw = vec![100.0, 3.0, 1.0, 4.0, 2.0];
        let values = ValueSet::new(&raw).unwrap();
        let partition = ClassPartition::from_sizes(&[4, 1]).unwrap();
        let classification = Classification::new(
            &values,
            partition,
            false,
            StageStats::default(),
            StageStats { passes: 3, moves: 2 },
        );
        (raw, classification)
    }

    #[test]
    fn test_accessors() {
        let (_, c) = outlier_classification();
        assert_eq!(c.class_count(), 2);
        assert_eq!(c.class_sizes(), vec![4, 1]);
        assert_eq!(c.maxima().as_slice(), &[1.0, 4.0, 100.0]);
        assert_eq!(c.class_means(), &[2.5, 100.0]);
        assert_eq!(c.within_class_ssd(), 5.0);
        assert!(!c.was_exact());
        assert_eq!(c.optimize_stats().moves, 2);
    }

    #[test]
    fn test_assign_keeps_caller_order() {
        let (raw, c) = outlier_classification();
        assert_eq!(
            c.assign(&raw),
            vec![Some(1), Some(0), Some(0), Some(0), Some(0)]
        );
        assert_eq!(c.class_of(250.0), None);
    }

    #[test]
    fn test_display() {
        let (_, c) = outlier_classification();
        assert!(c.to_string().starts_with("Classification(k=2, sizes=[4, 1]"));
    }

    #[test]
    fn test_selection_without_search() {
        let (_, c) = outlier_classification();
        let selection = Selection::new(c, vec![]);
        assert_eq!(selection.k(), 2);
        assert!(!selection.searched());
    }
}
