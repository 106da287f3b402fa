//! Goodness of variance fit
//!
//! GVF = 1 - (within-class SSD / total SSD about the grand mean). A value of
//! 1 means every class is internally constant.
//!
//! The raw SSDs overflow to infinity once the spread of the data passes
//! roughly `1e154`. The ratio does not depend on scale, so GVF then falls back
//! to SSDs of the values divided by their largest magnitude.

use breaks_core::{ClassPartition, ValueSet};

/// Sum of squared deviations of the whole value set about its mean
///
/// May be infinite for extremely wide spreads.
pub fn total_ssd(values: &ValueSet) -> f64 {
    values.total_ssd()
}

/// Sum over classes of each class's squared deviations about its own mean
pub fn within_class_ssd(values: &ValueSet, partition: &ClassPartition) -> f64 {
    partition.ranges().map(|range| values.range_ssd(&range)).sum()
}

/// Goodness of variance fit of `partition`, in `[0, 1]`
///
/// A value set with zero total variance is perfectly fit by any partition
/// and scores 1.
pub fn gvf(values: &ValueSet, partition: &ClassPartition) -> f64 {
    let (within, total) = match (within_class_ssd(values, partition), total_ssd(values)) {
        (within, total) if within.is_finite() && total.is_finite() => (within, total),
        _ => (
            partition
                .ranges()
                .map(|range| values.normalized_range_ssd(&range))
                .sum(),
            values.normalized_total_ssd(),
        ),
    };
    if total <= 0.0 {
        return 1.0;
    }
    (1.0 - within / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_fit() {
        let values = ValueSet::new(&[1.0, 1.0, 1.0, 5.0, 5.0, 9.0, 9.0, 9.0]).unwrap();
        let partition = ClassPartition::from_sizes(&[3, 2, 3]).unwrap();
        assert_eq!(within_class_ssd(&values, &partition), 0.0);
        assert_eq!(gvf(&values, &partition), 1.0);
    }

    #[test]
    fn test_single_class_scores_zero() {
        let values = ValueSet::new(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        let partition = ClassPartition::from_sizes(&[5]).unwrap();
        assert_relative_eq!(gvf(&values, &partition), 0.0);
    }

    #[test]
    fn test_outlier_split() {
        let values = ValueSet::new(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        let partition = ClassPartition::from_sizes(&[4, 1]).unwrap();
        assert_relative_eq!(within_class_ssd(&values, &partition), 5.0);
        assert_relative_eq!(gvf(&values, &partition), 1.0 - 5.0 / 7610.0);
    }

    #[test]
    fn test_overflowing_spread_stays_in_range() {
        let values = ValueSet::new(&[-1e200, 0.0, 1e200]).unwrap();
        assert!(total_ssd(&values).is_infinite());

        let single = ClassPartition::from_sizes(&[3]).unwrap();
        assert_eq!(gvf(&values, &single), 0.0);

        // [-1, 0] [1] after rescaling: within 0.5 of total 2
        let split = ClassPartition::from_sizes(&[2, 1]).unwrap();
        assert_relative_eq!(gvf(&values, &split), 0.75);
    }

    #[test]
    fn test_constant_values() {
        let values = ValueSet::new(&[3.0, 3.0, 3.0]).unwrap();
        let partition = ClassPartition::from_sizes(&[3]).unwrap();
        assert_eq!(gvf(&values, &partition), 1.0);
    }
}
