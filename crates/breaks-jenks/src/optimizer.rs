//! Boundary-value local search
//!
//! Once no value is split across classes, the lowest and highest values of
//! each class are the only ones that can change class without breaking the
//! ascending order of classes. Each pass gathers those boundary values and
//! moves every one that deviates less from a neighbouring class's mean than
//! from its own. Passes repeat until one makes no move.
//!
//! A class's lowest value is weighed only against the class below it and its
//! highest value only against the class above it. A move therefore always
//! lands in the adjacent class on the value's own side, so classes stay
//! contiguous and ascending after every move. Deviation is the distance from
//! a class mean after topping the class up with the value's missing
//! occurrences.
//!
//! The dataset's global minimum and maximum never move, which keeps them
//! anchored in the first and last class respectively. The result is a local
//! optimum only.

use crate::types::StageStats;
use breaks_core::utils::topped_up_mean;
use breaks_core::{ClassPartition, Error, Result, Stage, ValueSet};

/// Local search over class boundary values
#[derive(Debug, Clone, Copy)]
pub struct BoundaryOptimizer {
    max_passes: usize,
}

/// Which side of the target class a boundary value may move towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Lower,
    Upper,
}

impl BoundaryOptimizer {
    /// Create an optimizer that gives up after `max_passes` passes
    pub fn new(max_passes: usize) -> Self {
        Self { max_passes }
    }

    /// Improve `partition` in place until a pass makes no move
    pub fn optimize(&self, values: &ValueSet, partition: &mut ClassPartition) -> Result<StageStats> {
        let mut stats = StageStats::default();
        loop {
            if stats.passes >= self.max_passes {
                log::warn!(
                    "boundary optimization hit its pass guard ({} passes, k={})",
                    stats.passes,
                    partition.class_count()
                );
                return Err(Error::IterationLimit {
                    stage: Stage::Optimize,
                    k: partition.class_count(),
                    passes: stats.passes,
                    partition: partition.sizes(),
                });
            }
            stats.passes += 1;

            let mut moved = 0;
            for value in boundary_candidates(values, partition) {
                if self.try_move(values, partition, value)? {
                    moved += 1;
                }
            }
            stats.moves += moved;
            if moved == 0 {
                break;
            }
        }

        log::debug!(
            "optimized boundaries for k={} in {} passes ({} moves)",
            partition.class_count(),
            stats.passes,
            stats.moves
        );
        Ok(stats)
    }

    /// Move `value` to a neighbouring class if it fits there better
    fn try_move(&self, values: &ValueSet, partition: &mut ClassPartition, value: f64) -> Result<bool> {
        let run = values.run(value);
        let Some(class) = partition.class_of_rank(run.start) else {
            return Ok(false);
        };
        let range = partition.range(class);

        // Earlier moves in this pass may have changed the class around it
        if values.is_uniform(&range) {
            return Ok(false);
        }
        let sorted = values.as_slice();
        let edge = if sorted[range.start] == value {
            Edge::Lower
        } else if sorted[range.end - 1] == value {
            Edge::Upper
        } else {
            return Ok(false);
        };

        let multiplicity = values.multiplicity(value);
        let deviation = |target: usize| {
            let r = partition.range(target);
            let missing = multiplicity - values.count_in(value, &r);
            let mean = topped_up_mean(values.sum(&r), r.len(), value, missing);
            (value - mean).abs()
        };

        let current = deviation(class);
        let neighbour = match edge {
            Edge::Lower if class > 0 => class - 1,
            Edge::Upper if class + 1 < partition.class_count() => class + 1,
            _ => return Ok(false),
        };
        let candidate = deviation(neighbour);
        if candidate >= current {
            return Ok(false);
        }

        let count = values.count_in(value, &range);
        log::trace!(
            "moving {count} x {value} from class {class} to class {neighbour} \
             (deviation {current:.6} -> {candidate:.6})"
        );
        partition.transfer(class, neighbour, count)?;
        Ok(true)
    }
}

/// Lowest and highest values of every class holding more than one distinct
/// value, excluding the global minimum and maximum
fn boundary_candidates(values: &ValueSet, partition: &ClassPartition) -> Vec<f64> {
    let sorted = values.as_slice();
    let (min, max) = (values.min(), values.max());
    let movable = |v: f64| v != min && v != max;

    let mut candidates = Vec::new();
    for range in partition.ranges() {
        if range.is_empty() || values.is_uniform(&range) {
            continue;
        }
        let low = sorted[range.start];
        let high = sorted[range.end - 1];
        if movable(low) {
            candidates.push(low);
        }
        if movable(high) {
            candidates.push(high);
        }
    }
    candidates
}
