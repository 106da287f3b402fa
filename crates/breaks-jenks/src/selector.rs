//! Class-count selection by goodness of variance fit

use crate::traits::BreakClassifier;
use crate::types::{Classification, Selection};
use breaks_core::{Error, Result, ValueSet};

/// Picks the class count whose classification has the highest GVF
///
/// Candidates are tried in ascending order and only a strictly greater GVF
/// replaces the current best, so ties resolve to the smallest class count.
/// Any failure while classifying a candidate aborts the whole selection.
#[derive(Debug, Clone)]
pub struct ClassCountSelector<C> {
    classifier: C,
    min_classes: usize,
    max_classes: usize,
}

impl<C: BreakClassifier> ClassCountSelector<C> {
    /// Create a selector searching `[min_classes, max_classes]`
    pub fn new(classifier: C, min_classes: usize, max_classes: usize) -> Self {
        Self {
            classifier,
            min_classes,
            max_classes,
        }
    }

    /// Inclusive class-count range searched
    pub fn range(&self) -> (usize, usize) {
        (self.min_classes, self.max_classes)
    }

    /// Select the best class count for `values`
    ///
    /// When the data has no more distinct values than `max_classes`, it is
    /// classified directly at its distinct count and no search runs.
    pub fn select(&self, values: &ValueSet) -> Result<Selection> {
        if self.min_classes == 0 || self.min_classes > self.max_classes {
            return Err(Error::InvalidParameter(format!(
                "Class range [{}, {}] is empty or starts at zero",
                self.min_classes, self.max_classes
            )));
        }

        let distinct = values.distinct_count();
        if distinct <= self.max_classes {
            log::debug!(
                "{distinct} distinct values fit within {} classes, classifying directly",
                self.max_classes
            );
            let classification = self.classifier.classify_set(values, distinct)?;
            return Ok(Selection::new(classification, Vec::new()));
        }

        let candidates = self.classify_candidates(values)?;
        let gvf_table: Vec<(usize, f64)> = candidates
            .iter()
            .map(|c| (c.class_count(), c.gvf()))
            .collect();

        let mut best: Option<Classification> = None;
        for candidate in candidates {
            let better = match &best {
                Some(current) => candidate.gvf() > current.gvf(),
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
        let best = best.ok_or_else(|| {
            Error::InvalidParameter("Class range produced no candidates".to_string())
        })?;

        log::debug!(
            "{} selected k={} (gvf={:.6}) from {:?}",
            self.classifier.name(),
            best.class_count(),
            best.gvf(),
            gvf_table
        );
        Ok(Selection::new(best, gvf_table))
    }

    #[cfg(not(feature = "parallel"))]
    fn classify_candidates(&self, values: &ValueSet) -> Result<Vec<Classification>> {
        (self.min_classes..=self.max_classes)
            .map(|k| self.classifier.classify_set(values, k))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn classify_candidates(&self, values: &ValueSet) -> Result<Vec<Classification>> {
        use rayon::prelude::*;

        // Collect every outcome first so the reported error is the one for
        // the smallest failing k, same as the sequential search
        let outcomes: Vec<Result<Classification>> = (self.min_classes..=self.max_classes)
            .into_par_iter()
            .map(|k| self.classifier.classify_set(values, k))
            .collect();
        outcomes.into_iter().collect()
    }
}
