//! Partition bookkeeping under arbitrary transfers

use breaks_core::{ClassMaxima, ClassPartition, Error, ValueSet};
use proptest::prelude::*;

fn sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..20, 1..10)
}

proptest! {
    #[test]
    fn prop_transfer_preserves_total(
        sizes in sizes(),
        from in 0usize..10,
        to in 0usize..10,
        count in 0usize..25,
    ) {
        let mut partition = ClassPartition::from_sizes(&sizes).unwrap();
        let total = partition.total();
        let k = partition.class_count();

        match partition.transfer(from, to, count) {
            Ok(()) => {
                prop_assert_eq!(partition.total(), total);
                prop_assert_eq!(partition.sizes()[from], sizes[from] - count);
                prop_assert_eq!(partition.sizes()[to], sizes[to] + count);
            }
            Err(Error::InvalidParameter(_)) => {
                prop_assert!(from >= k || to >= k || from == to || sizes[from] < count);
                prop_assert_eq!(partition.sizes(), sizes);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_rank_lookup_matches_ranges(sizes in sizes()) {
        let partition = ClassPartition::from_sizes(&sizes).unwrap();
        for (class, range) in partition.ranges().enumerate() {
            for rank in range {
                prop_assert_eq!(partition.class_of_rank(rank), Some(class));
            }
        }
        prop_assert_eq!(partition.class_of_rank(partition.total()), None);
    }

    #[test]
    fn prop_maxima_round_trip_through_partition(sizes in sizes()) {
        // Strictly increasing values, one run per class
        let mut raw = Vec::new();
        for (class, &size) in sizes.iter().enumerate() {
            raw.extend(std::iter::repeat(class as f64 * 10.0).take(size));
        }
        let values = ValueSet::new(&raw).unwrap();
        let partition = ClassPartition::from_sizes(&sizes).unwrap();
        let maxima = ClassMaxima::from_partition(&values, &partition);

        prop_assert_eq!(maxima.class_count(), sizes.len());
        prop_assert_eq!(ClassPartition::from_maxima(&values, &maxima).unwrap(), partition);
    }
}
