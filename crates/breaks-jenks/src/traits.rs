//! Core traits for break classification

use crate::types::Classification;
use breaks_core::{Result, ValueSet};

/// Trait for algorithms that partition a value set into a fixed number of classes
///
/// Implementations are shared across threads when class counts are searched
/// in parallel.
pub trait BreakClassifier: Send + Sync {
    /// Classify `values` into exactly `k` classes
    fn classify_set(&self, values: &ValueSet, k: usize) -> Result<Classification>;

    /// Classify raw observations into exactly `k` classes
    fn classify(&self, values: &[f64], k: usize) -> Result<Classification> {
        self.classify_set(&ValueSet::new(values)?, k)
    }

    /// Short name for diagnostics
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
