//! Class partitions and class maxima
//!
//! A [`ClassPartition`] splits a [`ValueSet`] into `k` contiguous classes.
//! It is stored as `k + 1` cumulative offsets into the sorted values, so
//! class `i` is simply `offsets[i]..offsets[i + 1]` and moving elements
//! between classes only shifts the offsets in between.

use crate::error::{Error, Result};
use crate::values::ValueSet;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Contiguous partition of a sorted value set into classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ClassPartition {
    offsets: Vec<usize>,
}

impl ClassPartition {
    /// Build a partition from per-class sizes
    pub fn from_sizes(sizes: &[usize]) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::InvalidInput(
                "A partition needs at least one class".to_string(),
            ));
        }
        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        offsets.push(0);
        let mut acc = 0usize;
        for &size in sizes {
            acc += size;
            offsets.push(acc);
        }
        Ok(Self { offsets })
    }

    /// Recover per-class sizes from a class maxima sequence
    ///
    /// Class `i` takes every value not already taken by an earlier class
    /// that is less than or equal to `maxima[i + 1]`. The last class takes
    /// everything that remains.
    pub fn from_maxima(values: &ValueSet, maxima: &ClassMaxima) -> Result<Self> {
        let k = maxima.class_count();
        if maxima.min() != values.min() || maxima.max() != values.max() {
            return Err(Error::InvalidInput(format!(
                "Class maxima span [{}, {}] but values span [{}, {}]",
                maxima.min(),
                maxima.max(),
                values.min(),
                values.max()
            )));
        }

        let sorted = values.as_slice();
        let mut offsets = Vec::with_capacity(k + 1);
        offsets.push(0);
        for &upper in &maxima.as_slice()[1..k] {
            offsets.push(sorted.partition_point(|&x| x <= upper));
        }
        offsets.push(sorted.len());
        Ok(Self { offsets })
    }

    /// Number of classes
    pub fn class_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of elements across all classes
    pub fn total(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Number of elements in `class`
    pub fn size(&self, class: usize) -> usize {
        self.offsets[class + 1] - self.offsets[class]
    }

    /// Per-class sizes
    pub fn sizes(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Sorted-order index range covered by `class`
    pub fn range(&self, class: usize) -> Range<usize> {
        self.offsets[class]..self.offsets[class + 1]
    }

    /// Iterate over all class ranges, low to high
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.offsets.windows(2).map(|w| w[0]..w[1])
    }

    /// Class containing the element at sorted-order position `rank`
    pub fn class_of_rank(&self, rank: usize) -> Option<usize> {
        if rank >= self.total() {
            return None;
        }
        // Last offset <= rank; skips over empty classes sharing that offset
        Some(self.offsets.partition_point(|&o| o <= rank) - 1)
    }

    /// Move `count` elements from class `from` to class `to`
    ///
    /// Every offset between the two classes shifts by `count`, so classes
    /// in between keep their sizes but slide along the sorted values.
    pub fn transfer(&mut self, from: usize, to: usize, count: usize) -> Result<()> {
        let k = self.class_count();
        if from >= k || to >= k || from == to {
            return Err(Error::InvalidParameter(format!(
                "Cannot transfer from class {from} to class {to} of {k}"
            )));
        }
        if self.size(from) < count {
            return Err(Error::InvalidParameter(format!(
                "Class {from} holds {} elements, cannot give up {count}",
                self.size(from)
            )));
        }
        if from < to {
            for offset in &mut self.offsets[from + 1..=to] {
                *offset -= count;
            }
        } else {
            for offset in &mut self.offsets[to + 1..=from] {
                *offset += count;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for ClassPartition {
    type Error = Error;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        Self::from_sizes(&sizes)
    }
}

impl From<ClassPartition> for Vec<usize> {
    fn from(partition: ClassPartition) -> Self {
        partition.sizes()
    }
}

/// Class upper edges: `[global_min, max(class_0), ..., max(class_{k-1})]`
///
/// Always `k + 1` entries, non-decreasing, with the last entry equal to the
/// global maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ClassMaxima(Vec<f64>);

impl ClassMaxima {
    /// Wrap an explicit maxima sequence, validating its layout
    pub fn new(maxima: Vec<f64>) -> Result<Self> {
        if maxima.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "Class maxima need at least 2 entries, got {}",
                maxima.len()
            )));
        }
        if maxima.iter().any(|m| !m.is_finite()) {
            return Err(Error::non_finite("class maxima"));
        }
        if maxima.windows(2).any(|w| w[1] < w[0]) {
            return Err(Error::InvalidInput(
                "Class maxima must be non-decreasing".to_string(),
            ));
        }
        Ok(Self(maxima))
    }

    /// Derive the maxima of `partition` over `values`
    pub fn from_partition(values: &ValueSet, partition: &ClassPartition) -> Self {
        let sorted = values.as_slice();
        let mut maxima = Vec::with_capacity(partition.class_count() + 1);
        let mut previous = values.min();
        maxima.push(previous);
        for range in partition.ranges() {
            if !range.is_empty() {
                previous = sorted[range.end - 1];
            }
            maxima.push(previous);
        }
        Self(maxima)
    }

    /// Number of classes described
    pub fn class_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Global minimum (entry 0)
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    /// Global maximum (last entry)
    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Upper edge of `class`
    pub fn upper(&self, class: usize) -> f64 {
        self.0[class + 1]
    }

    /// Raw entries
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Unwrap into the raw entries
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Class a value falls into, or `None` outside `[min, max]`
    ///
    /// Values falling in a gap between two classes belong to the upper one.
    pub fn class_of(&self, value: f64) -> Option<usize> {
        if !(self.min()..=self.max()).contains(&value) {
            return None;
        }
        Some(self.0[1..].partition_point(|&upper| upper < value))
    }
}

impl TryFrom<Vec<f64>> for ClassMaxima {
    type Error = Error;

    fn try_from(maxima: Vec<f64>) -> Result<Self> {
        Self::new(maxima)
    }
}

impl From<ClassMaxima> for Vec<f64> {
    fn from(maxima: ClassMaxima) -> Self {
        maxima.0
    }
}
