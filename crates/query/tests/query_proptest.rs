//! Property-based tests for sequin-query using proptest.

use proptest::prelude::*;
use sequin_query::from;
use std::collections::HashSet;

proptest! {
    /// Filter keeps exactly the elements the predicate keeps, in order.
    #[test]
    fn filter_matches_reference(data in prop::collection::vec(-1000i64..1000, 0..200)) {
        let result = from(&data).filter(|x| x % 3 == 0).to_vec();
        let expected: Vec<i64> = data.iter().copied().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(&result, &expected);
        prop_assert!(result.iter().all(|x| x % 3 == 0));
        prop_assert_eq!(from(&data).count_matching(|x| x % 3 == 0), expected.len());
    }

    /// Projection preserves length and order.
    #[test]
    fn project_preserves_length_and_order(data in prop::collection::vec(-1000i64..1000, 0..200)) {
        let result = from(&data).project(|x| x * 2 + 1).to_vec();
        prop_assert_eq!(result.len(), data.len());
        for (i, value) in result.iter().enumerate() {
            prop_assert_eq!(*value, data[i] * 2 + 1);
        }
    }

    /// Distinct yields each value exactly once, in first-occurrence order,
    /// and its handle survives repeated scans.
    #[test]
    fn distinct_first_occurrence(data in prop::collection::vec(0i64..50, 0..200)) {
        let query = from(&data).distinct();
        let result = query.to_vec();

        let mut seen = HashSet::new();
        let mut expected = Vec::new();
        for &x in &data {
            if seen.insert(x) {
                expected.push(x);
            }
        }
        prop_assert_eq!(&result, &expected);
        prop_assert!(query.count() <= data.len());

        // Every pass over the same handle sees the same sequence.
        prop_assert_eq!(query.to_vec(), result);
    }

    /// order_by is non-decreasing under the key, order_by_descending
    /// non-increasing.
    #[test]
    fn order_by_monotonic(data in prop::collection::vec(-1000i64..1000, 0..200)) {
        let ascending = from(&data).order_by(|x| *x).to_vec();
        prop_assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let descending = from(&data).order_by_descending(|x| *x).to_vec();
        prop_assert!(descending.windows(2).all(|w| w[0] >= w[1]));

        // Sorting permutes, never adds or drops.
        prop_assert_eq!(ascending.len(), data.len());
    }

    /// Double reverse is the identity on the element sequence.
    #[test]
    fn reverse_reverse_is_identity(data in prop::collection::vec(-1000i64..1000, 0..200)) {
        let round_trip = from(&data).reverse().reverse().to_vec();
        prop_assert_eq!(round_trip, data);
    }

    /// Set operations produce duplicate-free output bounded by their set
    /// algebra.
    #[test]
    fn set_ops_respect_set_algebra(
        a in prop::collection::vec(0i64..30, 0..100),
        b in prop::collection::vec(0i64..30, 0..100),
    ) {
        let a_set: HashSet<i64> = a.iter().copied().collect();
        let b_set: HashSet<i64> = b.iter().copied().collect();

        let union = from(&a).union(&from(&b)).to_vec();
        let intersect = from(&a).intersect(&from(&b)).to_vec();
        let except = from(&a).except(&from(&b)).to_vec();

        for result in [&union, &intersect, &except] {
            let dedup: HashSet<i64> = result.iter().copied().collect();
            prop_assert_eq!(dedup.len(), result.len(), "output contains duplicates");
        }

        prop_assert!(intersect.iter().all(|x| a_set.contains(x) && b_set.contains(x)));
        prop_assert!(except.iter().all(|x| a_set.contains(x) && !b_set.contains(x)));
        let union_set: HashSet<i64> = union.iter().copied().collect();
        prop_assert!(a_set.union(&b_set).all(|x| union_set.contains(x)));
    }

    /// Building a query and collecting it reproduces the source exactly.
    #[test]
    fn from_to_vec_round_trip(data in prop::collection::vec(-1000i64..1000, 1..200)) {
        prop_assert_eq!(from(&data).to_vec(), data);
    }

    /// skip/take partition the sequence without reordering.
    #[test]
    fn skip_take_partition(
        data in prop::collection::vec(-1000i64..1000, 0..200),
        n in 0usize..250,
    ) {
        let query = from(&data);
        let head = query.take(n).to_vec();
        let tail = query.skip(n).to_vec();

        let mut recombined = head;
        recombined.extend(tail);
        prop_assert_eq!(recombined, data);
    }

    /// average agrees with the reference mean for 64-bit integer elements.
    #[test]
    fn average_matches_reference(data in prop::collection::vec(-1000i64..1000, 1..200)) {
        let expected = data.iter().sum::<i64>() as f64 / data.len() as f64;
        let actual = from(&data).average().unwrap();
        prop_assert!((actual - expected).abs() < 1e-9);
    }

    /// element_at agrees with direct indexing wherever both are defined.
    #[test]
    fn element_at_matches_indexing(data in prop::collection::vec(-1000i64..1000, 1..100)) {
        let query = from(&data);
        for (i, &expected) in data.iter().enumerate() {
            prop_assert_eq!(query.element_at(i), Ok(expected));
        }
        prop_assert!(query.element_at(data.len()).is_err());
    }
}
