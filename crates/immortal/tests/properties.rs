use immortal::{compute, naive};
use proptest::prelude::*;

const LARGE: u64 = 40_000_000_000;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

proptest! {
    #[test]
    fn symmetric(
        rows in 1..LARGE,
        cols in 1..LARGE,
        threshold in 0u64..20_000_000,
        modulus in 1u64..,
    ) {
        prop_assert_eq!(
            compute(rows, cols, threshold, modulus).unwrap(),
            compute(cols, rows, threshold, modulus).unwrap()
        );
    }

    #[test]
    fn non_increasing_in_threshold(
        rows in 1u64..100_000,
        cols in 1u64..100_000,
        threshold in 0u64..200_000,
    ) {
        // small enough that nothing wraps
        let before = compute(rows, cols, threshold, u64::MAX).unwrap();
        let after = compute(rows, cols, threshold + 1, u64::MAX).unwrap();
        prop_assert!(after <= before, "{} > {}", after, before);
    }

    #[test]
    fn saturates(
        rows in 1..LARGE,
        cols in 1..LARGE,
        excess in 0u64..1_000_000,
        modulus in 1u64..,
    ) {
        prop_assert_eq!(compute(rows, cols, rows + cols - 2 + excess, modulus).unwrap(), 0);
    }

    #[test]
    fn single_row(cols in 1..LARGE, threshold in 0..LARGE, modulus in 1u64..) {
        let expected = if threshold >= cols - 1 {
            0
        } else {
            let span = u128::from(cols - threshold);
            (span * (span - 1) / 2 % u128::from(modulus)) as u64
        };
        prop_assert_eq!(compute(1, cols, threshold, modulus).unwrap(), expected);
        prop_assert_eq!(compute(cols, 1, threshold, modulus).unwrap(), expected);
    }

    #[test]
    fn consistent_across_moduli(
        rows in 1..LARGE,
        cols in 1..LARGE,
        threshold in 0u64..20_000_000,
        a in 1u64..1 << 31,
        b in 1u64..1 << 31,
        c in 1u64..1 << 31,
    ) {
        let (first, second) = (a * b, a * c);
        let g = gcd(first, second);
        prop_assert_eq!(
            compute(rows, cols, threshold, first).unwrap() % g,
            compute(rows, cols, threshold, second).unwrap() % g
        );
        prop_assert_eq!(
            compute(rows, cols, threshold, first).unwrap() % a,
            compute(rows, cols, threshold, a).unwrap()
        );
    }

    #[test]
    fn agrees_with_naive(
        rows in 1u64..300,
        cols in 1u64..300,
        threshold in 0u64..600,
        modulus in 1u64..,
    ) {
        prop_assert_eq!(
            compute(rows, cols, threshold, modulus).unwrap(),
            naive(rows, cols, threshold, modulus).unwrap()
        );
    }
}
