//! Sorted value sets with multiplicity bookkeeping

use crate::error::{Error, Result};
use crate::utils;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::ops::Range;

/// An immutable, ascending-sorted set of observations
///
/// Duplicates are kept. Alongside the sorted values the set carries the
/// distinct value → multiplicity map, so value runs are O(log n) lookups.
/// Class sums are taken directly over the sorted slice, never as
/// differences of running totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSet {
    sorted: Vec<f64>,
    multiplicities: BTreeMap<OrderedFloat<f64>, usize>,
    scale: f64,
}

impl ValueSet {
    /// Build a value set from raw observations
    ///
    /// Fails on empty input or on NaN/infinite values.
    pub fn new(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_input("value set"));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("value set"));
        }

        // -0.0 and 0.0 are the same observation
        let normalized: Vec<f64> = values
            .iter()
            .map(|&v| if v == 0.0 { 0.0 } else { v })
            .collect();
        let sorted = utils::sorted(&normalized);

        let mut multiplicities = BTreeMap::new();
        for &v in &sorted {
            *multiplicities.entry(OrderedFloat(v)).or_insert(0) += 1;
        }

        let largest = sorted[0].abs().max(sorted[sorted.len() - 1].abs());
        let scale = if largest > 0.0 { largest } else { 1.0 };

        Ok(Self {
            sorted,
            multiplicities,
            scale,
        })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The observations in ascending order
    pub fn as_slice(&self) -> &[f64] {
        &self.sorted
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Largest absolute observation (1.0 for an all-zero set)
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of distinct values
    pub fn distinct_count(&self) -> usize {
        self.multiplicities.len()
    }

    /// Distinct value → multiplicity map, ascending by value
    pub fn multiplicities(&self) -> &BTreeMap<OrderedFloat<f64>, usize> {
        &self.multiplicities
    }

    /// Distinct values in ascending order
    pub fn distinct_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.multiplicities.keys().map(|v| v.into_inner())
    }

    /// How many times `value` occurs (0 if absent)
    pub fn multiplicity(&self, value: f64) -> usize {
        self.multiplicities
            .get(&OrderedFloat(value))
            .copied()
            .unwrap_or(0)
    }

    /// Sorted-order positions occupied by `value`
    ///
    /// Empty (but positioned at the insertion point) when the value is absent.
    pub fn run(&self, value: f64) -> Range<usize> {
        let start = self.sorted.partition_point(|&x| x < value);
        let end = self.sorted.partition_point(|&x| x <= value);
        start..end
    }

    /// Number of occurrences of `value` inside the sorted-order `range`
    pub fn count_in(&self, value: f64, range: &Range<usize>) -> usize {
        let run = self.run(value);
        run.end.min(range.end).saturating_sub(run.start.max(range.start))
    }

    /// Sum of the observations in the sorted-order `range`
    pub fn sum(&self, range: &Range<usize>) -> f64 {
        self.sorted[range.clone()].iter().sum()
    }

    /// Mean of the observations in the sorted-order `range` (0.0 if empty)
    pub fn mean(&self, range: &Range<usize>) -> f64 {
        utils::mean(&self.sorted[range.clone()])
    }

    /// Sum of squared deviations of the whole set about its mean
    pub fn total_ssd(&self) -> f64 {
        self.range_ssd(&(0..self.sorted.len()))
    }

    /// Sum of squared deviations of `range` about its own mean
    ///
    /// Exactly zero for a range holding a single distinct value, whatever
    /// rounding the mean picks up.
    pub fn range_ssd(&self, range: &Range<usize>) -> f64 {
        if range.is_empty() || self.is_uniform(range) {
            return 0.0;
        }
        utils::ssd(&self.sorted[range.clone()])
    }

    /// [`range_ssd`](Self::range_ssd) of the values divided by [`scale`](Self::scale)
    ///
    /// Always finite, even when the raw SSD overflows `f64`.
    pub fn normalized_range_ssd(&self, range: &Range<usize>) -> f64 {
        if range.is_empty() || self.is_uniform(range) {
            return 0.0;
        }
        utils::scaled_ssd(&self.sorted[range.clone()], self.scale)
    }

    /// [`total_ssd`](Self::total_ssd) of the values divided by [`scale`](Self::scale)
    pub fn normalized_total_ssd(&self) -> f64 {
        self.normalized_range_ssd(&(0..self.sorted.len()))
    }

    /// Whether the sorted-order `range` holds a single distinct value
    pub fn is_uniform(&self, range: &Range<usize>) -> bool {
        !range.is_empty() && self.sorted[range.start] == self.sorted[range.end - 1]
    }
}
