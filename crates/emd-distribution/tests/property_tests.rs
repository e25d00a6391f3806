//! Property-based tests for distribution arithmetic and the EMD metric
//!
//! These pin down the algebraic laws the clustering pipeline relies on:
//! addition/subtraction round-trips, scalar identities, and the metric
//! axioms the closed-form EMD must satisfy.

use emd_distribution::{emd, Distribution, Error};
use proptest::prelude::*;

/// Two bucket vectors of the same arity
fn pair_same_arity() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..64).prop_flat_map(|n| {
        (
            prop::collection::vec(-1000.0..1000.0f64, n),
            prop::collection::vec(-1000.0..1000.0f64, n),
        )
    })
}

/// Two bucket vectors of different arities
fn pair_mismatched_arity() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..32, 1usize..32)
        .prop_filter("arities must differ", |(n, m)| n != m)
        .prop_flat_map(|(n, m)| {
            (
                prop::collection::vec(-10.0..10.0f64, n),
                prop::collection::vec(-10.0..10.0f64, m),
            )
        })
}

proptest! {
    // (a + b) - b == a, within float tolerance
    #[test]
    fn prop_add_sub_roundtrip((a, b) in pair_same_arity()) {
        let da = Distribution::from(a);
        let db = Distribution::from(b);

        let back = da.checked_add(&db).unwrap().checked_sub(&db).unwrap();
        for (&got, &want) in back.iter().zip(da.iter()) {
            prop_assert!(
                approx::relative_eq!(got, want, epsilon = 1e-9, max_relative = 1e-9),
                "expected {want}, got {got}"
            );
        }
    }

    // exact round-trip for integer elements
    #[test]
    fn prop_add_sub_roundtrip_integers(
        a in prop::collection::vec(-1_000_000i64..1_000_000, 1..64),
        b in prop::collection::vec(-1_000_000i64..1_000_000, 1..64)
    ) {
        let n = a.len().min(b.len());
        let da = Distribution::from(a[..n].to_vec());
        let db = Distribution::from(b[..n].to_vec());
        let back = da.checked_add(&db).unwrap().checked_sub(&db).unwrap();
        prop_assert_eq!(back, da);
    }

    // a * 1 == a and a / 1 == a, exactly
    #[test]
    fn prop_scalar_identities(a in prop::collection::vec(-1000.0..1000.0f64, 0..64)) {
        let d = Distribution::from(a);
        prop_assert_eq!(d.scale(1.0), d.clone());
        prop_assert_eq!(d.unscale(1.0).unwrap(), d);
    }

    // a - a is all zeros
    #[test]
    fn prop_self_difference_is_zero(a in prop::collection::vec(-1000.0..1000.0f64, 0..64)) {
        let d = Distribution::from(a);
        let zero = d.checked_sub(&d).unwrap();
        prop_assert!(zero.iter().all(|&x| x == 0.0));
    }

    // emd(a, a) == 0
    #[test]
    fn prop_emd_self_distance_is_zero(a in prop::collection::vec(-1000.0..1000.0f64, 0..64)) {
        let d = Distribution::from(a);
        prop_assert_eq!(emd(&d, &d).unwrap(), 0.0);
    }

    // emd(a, b) == emd(b, a)
    #[test]
    fn prop_emd_symmetric((a, b) in pair_same_arity()) {
        let da = Distribution::from(a);
        let db = Distribution::from(b);
        let d12 = emd(&da, &db).unwrap();
        let d21 = emd(&db, &da).unwrap();
        prop_assert!(
            approx::relative_eq!(d12, d21, epsilon = 1e-9, max_relative = 1e-9),
            "emd not symmetric: {d12} vs {d21}"
        );
    }

    // emd is never negative
    #[test]
    fn prop_emd_nonnegative((a, b) in pair_same_arity()) {
        let da = Distribution::from(a);
        let db = Distribution::from(b);
        prop_assert!(emd(&da, &db).unwrap() >= 0.0);
    }

    // arity mismatch always surfaces the declared error, for every
    // elementwise operation and the metric
    #[test]
    fn prop_arity_mismatch_always_errors((a, b) in pair_mismatched_arity()) {
        let da = Distribution::from(a);
        let db = Distribution::from(b);

        let results = [
            da.checked_add(&db).err(),
            da.checked_sub(&db).err(),
            da.checked_mul(&db).err(),
            da.checked_div(&db).err(),
            emd(&da, &db).err(),
        ];
        for error in results {
            prop_assert!(
                matches!(error, Some(Error::ArityMismatch { .. })),
                "expected ArityMismatch, got {:?}",
                error
            );
        }
    }

    // parse -> format reproduces the numeric content
    #[test]
    fn prop_parse_format_roundtrip(a in prop::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
        let d = Distribution::from(a);
        let line = d.to_string();
        let reparsed: Distribution<i64> = line.parse().unwrap();
        prop_assert_eq!(reparsed, d);
    }
}
