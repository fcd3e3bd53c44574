//! Exact sums for the two shapes the decomposer reduces everything to.
//!
//! Inside an `n`×`n` block aligned to a power of two `n`, every row of
//! `x ^ y` is a permutation of `0..n`. In the block to its right every row is a
//! permutation of `n..2n`. Both sums therefore only depend on `n`, the number
//! of rows and the threshold.

use crate::modint::{ModInt, Modulus};

/// Sum of `max(0, (x ^ y) - threshold)` over the `n`×`n` square at the origin.
///
/// `n` must be a power of two.
pub fn square_count(n: u64, threshold: u64, modulus: Modulus) -> ModInt {
    debug_assert!(n.is_power_of_two());

    if threshold >= n - 1 {
        return modulus.zero();
    }

    let x = modulus.int(n);
    let y = modulus.int(threshold);
    let k = modulus.int(n / 2);

    if threshold == 0 {
        return k * x * (x - 1);
    }

    // threshold * (threshold + 1) / 2, halving whichever factor is even
    let triangle = if threshold % 2 == 1 {
        y * modulus.int((threshold + 1) / 2)
    } else {
        modulus.int(threshold / 2) * (y + 1)
    };

    x * (k * (x - 1) - (x - 1 - y) * y - triangle)
}

/// Sum over a lobe: `width` rows of the `n`-wide block whose values run over
/// `n..2n`.
///
/// `n` must be a power of two of at least 2 and `width` at most `n`.
pub fn lobe_count(width: u64, n: u64, threshold: u64, modulus: Modulus) -> ModInt {
    debug_assert!(n >= 2 && n.is_power_of_two());
    debug_assert!(width <= n);

    if threshold >= 2 * n - 1 {
        return modulus.zero();
    }

    let z = modulus.int(width);

    if threshold <= n {
        let x = modulus.int(n);
        let y = modulus.int(threshold);
        let k = modulus.int(n / 2);
        return z * (k * 2 * (x * 2 - 1) - k * (x - 1)) - y * z * x;
    }

    // n < threshold < 2n - 1; exactly one of `rest` and `rest - 1` is even
    let rest = 2 * n - threshold;
    if threshold % 2 == 1 {
        z * modulus.int(rest) * modulus.int((rest - 1) / 2)
    } else {
        z * modulus.int(rest / 2) * modulus.int(rest - 1)
    }
}
