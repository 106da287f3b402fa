//! Duplicate-value resolution
//!
//! A quantile split routinely cuts a run of equal values in two. Before any
//! boundary optimization can happen every distinct value must sit wholly in
//! one class. The resolver repairs one split per pass and restarts the scan
//! from the first class, until a full pass finds nothing to repair.

use crate::types::StageStats;
use breaks_core::utils::topped_up_mean;
use breaks_core::{ClassPartition, Error, Result, Stage, ValueSet};

/// Gathers each distinct value's occurrences into a single class
#[derive(Debug, Clone, Copy)]
pub struct DuplicateResolver {
    max_passes: usize,
}

impl DuplicateResolver {
    /// Create a resolver that gives up after `max_passes` passes
    pub fn new(max_passes: usize) -> Self {
        Self { max_passes }
    }

    /// Repair `partition` in place until no distinct value is split
    pub fn resolve(&self, values: &ValueSet, partition: &mut ClassPartition) -> Result<StageStats> {
        let mut stats = StageStats::default();
        loop {
            if stats.passes >= self.max_passes {
                log::warn!(
                    "duplicate resolution hit its pass guard ({} passes, k={})",
                    stats.passes,
                    partition.class_count()
                );
                return Err(Error::IterationLimit {
                    stage: Stage::Resolve,
                    k: partition.class_count(),
                    passes: stats.passes,
                    partition: partition.sizes(),
                });
            }
            stats.passes += 1;

            if !self.repair_first_split(values, partition)? {
                break;
            }
            stats.moves += 1;
        }

        log::debug!(
            "resolved duplicates for k={} in {} passes ({} repairs)",
            partition.class_count(),
            stats.passes,
            stats.moves
        );
        Ok(stats)
    }

    /// Fix the first split value found; returns whether anything changed
    fn repair_first_split(&self, values: &ValueSet, partition: &mut ClassPartition) -> Result<bool> {
        let sorted = values.as_slice();
        let k = partition.class_count();

        for class in 0..k.saturating_sub(1) {
            let range = partition.range(class);
            if range.is_empty() {
                continue;
            }

            let top = sorted[range.end - 1];
            let multiplicity = values.multiplicity(top);

            if values.is_uniform(&range) {
                if range.len() != multiplicity {
                    self.fill_uniform_class(values, partition, class, top, multiplicity - range.len())?;
                    return Ok(true);
                }
                continue;
            }

            let local = values.count_in(top, &range);
            if local != multiplicity {
                self.settle_split_maximum(values, partition, class, top, local, multiplicity)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Pull a uniform class's missing occurrences in from donor classes
    ///
    /// Donors are searched forward from the next class, wrapping past the
    /// last class but never landing on `class` itself. A donor always keeps
    /// at least one element.
    fn fill_uniform_class(
        &self,
        values: &ValueSet,
        partition: &mut ClassPartition,
        class: usize,
        value: f64,
        mut deficit: usize,
    ) -> Result<()> {
        let k = partition.class_count();
        let mut start = (class + 1) % k;

        while deficit > 0 {
            let donor = (0..k)
                .map(|step| (start + step) % k)
                .find(|&c| c != class && partition.size(c) > 1)
                .ok_or_else(|| degenerate_span(value, partition))?;

            let take = (partition.size(donor) - 1).min(deficit);
            log::trace!("moving {take} element(s) from class {donor} into uniform class {class} ({value})");
            partition.transfer(donor, class, take)?;
            deficit -= take;
            start = donor;
        }
        Ok(())
    }

    /// Settle a mixed class whose maximum also occurs in the next class
    fn settle_split_maximum(
        &self,
        values: &ValueSet,
        partition: &mut ClassPartition,
        class: usize,
        value: f64,
        local: usize,
        multiplicity: usize,
    ) -> Result<()> {
        let next = class + 1;
        let next_range = partition.range(next);
        let in_next = values.count_in(value, &next_range);
        if in_next == 0 {
            return Err(degenerate_span(value, partition));
        }

        if values.is_uniform(&next_range) {
            // The next class is nothing but this value: hand ours over
            log::trace!("shifting {local} x {value} from class {class} into uniform class {next}");
            partition.transfer(class, next, local)?;

            let gathered = partition.size(next);
            if gathered < multiplicity {
                let remaining = multiplicity - gathered;
                let donor = next + 1;
                if donor >= partition.class_count() || partition.size(donor) <= remaining {
                    return Err(degenerate_span(value, partition));
                }
                log::trace!("cascading {remaining} x {value} from class {donor} into class {next}");
                partition.transfer(donor, next, remaining)?;
            }
            return Ok(());
        }

        // Both classes are mixed: topping each up with the value's missing
        // occurrences, keep the value where it sits closest to the mean
        let range = partition.range(class);
        let add_here = multiplicity - local;
        let add_next = multiplicity - in_next;
        let mean_here = topped_up_mean(values.sum(&range), range.len(), value, add_here);
        let mean_next = topped_up_mean(values.sum(&next_range), next_range.len(), value, add_next);
        let dev_here = (value - mean_here).abs();
        let dev_next = (value - mean_next).abs();

        if dev_here < dev_next {
            log::trace!("gathering {add_here} x {value} from class {next} into class {class}");
            partition.transfer(next, class, add_here)
        } else {
            log::trace!("gathering {add_next} x {value} from class {class} into class {next}");
            partition.transfer(class, next, add_next)
        }
    }
}

fn degenerate_span(value: f64, partition: &ClassPartition) -> Error {
    log::warn!(
        "value {value} cannot be held within two adjacent classes (k={})",
        partition.class_count()
    );
    Error::DegenerateDuplicateSpan {
        value,
        k: partition.class_count(),
        partition: partition.sizes(),
    }
}
