//! Initial partitions for a requested class count

use breaks_core::{ClassPartition, Error, Result, ValueSet};

/// Starting point for the iterative stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialPartition {
    /// One class per distinct value; already optimal, nothing left to do
    Exact(ClassPartition),
    /// Equal-count split that may still cut through duplicate runs
    Quantile(ClassPartition),
}

impl InitialPartition {
    /// The partition, whichever kind it is
    pub fn into_partition(self) -> ClassPartition {
        match self {
            InitialPartition::Exact(p) | InitialPartition::Quantile(p) => p,
        }
    }

    /// Whether this is the exact one-class-per-value partition
    pub fn is_exact(&self) -> bool {
        matches!(self, InitialPartition::Exact(_))
    }
}

/// Build the initial partition of `values` into `k` classes
///
/// When `k` equals the number of distinct values each class is sized to one
/// value's multiplicity. Otherwise the first `k - 1` classes get
/// `floor(n / k)` elements and the last class takes the remainder.
pub fn initial_partition(values: &ValueSet, k: usize) -> Result<InitialPartition> {
    let distinct = values.distinct_count();
    if k == 0 || k > distinct {
        return Err(Error::class_count_out_of_range(k, distinct));
    }

    if k == distinct {
        let sizes: Vec<usize> = values.multiplicities().values().copied().collect();
        return Ok(InitialPartition::Exact(ClassPartition::from_sizes(&sizes)?));
    }

    let n = values.len();
    let base = n / k;
    let mut sizes = vec![base; k];
    sizes[k - 1] = n - (k - 1) * base;
    Ok(InitialPartition::Quantile(ClassPartition::from_sizes(&sizes)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_when_distinct_equals_k() {
        let values = ValueSet::new(&[1.0, 1.0, 1.0, 5.0, 5.0, 9.0, 9.0, 9.0]).unwrap();
        let initial = initial_partition(&values, 3).unwrap();
        assert!(initial.is_exact());
        assert_eq!(initial.into_partition().sizes(), vec![3, 2, 3]);
    }

    #[test]
    fn test_quantile_split_remainder_in_last_class() {
        let values = ValueSet::new(&(0..11).map(f64::from).collect::<Vec<_>>()).unwrap();
        let initial = initial_partition(&values, 3).unwrap();
        assert!(!initial.is_exact());
        assert_eq!(initial.into_partition().sizes(), vec![3, 3, 5]);
    }

    #[test]
    fn test_quantile_may_split_duplicates() {
        let values = ValueSet::new(&[1.0, 2.0, 2.0, 2.0, 3.0, 4.0]).unwrap();
        let partition = initial_partition(&values, 3).unwrap().into_partition();
        assert_eq!(partition.sizes(), vec![2, 2, 2]);
        // The run of 2s straddles classes 0 and 1
        assert_eq!(values.count_in(2.0, &partition.range(0)), 1);
        assert_eq!(values.count_in(2.0, &partition.range(1)), 2);
    }

    #[test]
    fn test_class_count_bounds() {
        let values = ValueSet::new(&[1.0, 2.0, 2.0]).unwrap();
        assert!(matches!(initial_partition(&values, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(initial_partition(&values, 3), Err(Error::InvalidInput(_))));
        assert_eq!(
            initial_partition(&values, 1).unwrap().into_partition().sizes(),
            vec![3]
        );
    }
}
