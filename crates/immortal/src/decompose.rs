use crate::{
    closed_form::{lobe_count, square_count},
    modint::{ModInt, Modulus},
};

/// Sum of `max(0, (x ^ y) - threshold)` over `0 <= x < rows`, `0 <= y < cols`.
///
/// The grid is split into the largest power-of-two square that fits, the two
/// lobes beside it and the corner diagonally across from it. Whatever is left of
/// a grid much wider than tall is covered by lobes of doubling width, and the
/// final partial strip is shifted back to the origin and solved again.
///
/// Both dimensions must be at least 1 and at most [`crate::MAX_DIMENSION`].
pub fn solve(mut rows: u64, mut cols: u64, mut threshold: u64, modulus: Modulus) -> ModInt {
    let mut total = modulus.zero();

    loop {
        if rows > cols {
            std::mem::swap(&mut rows, &mut cols);
        }
        log::trace!("solve {rows}x{cols} threshold={threshold}");

        if rows == 1 {
            return total + strip(cols, threshold, modulus);
        }

        let mut n = 1 << rows.ilog2();

        total = total + square_count(n, threshold, modulus);
        if cols > n {
            total = total + lobe_count(n.min(cols - n), n, threshold, modulus);
        }
        if rows > n {
            total = total + lobe_count(n.min(rows - n), n, threshold, modulus);
        }
        if cols > n && rows > n {
            total = total + solve(n.min(rows - n), n.min(cols - n), threshold, modulus);
        }

        if cols <= rows {
            return total;
        }

        n *= 2;
        while cols > 2 * n - 1 {
            total = total + lobe_count(rows, n, threshold, modulus);
            n *= 2;
        }

        if cols <= n || threshold >= 2 * n - 1 {
            return total;
        }

        // Columns n..cols hold n + ((y - n) ^ x): the same grid shifted by n.
        if threshold <= n {
            total = total + modulus.int(n - threshold) * rows * (cols - n);
            threshold = 0;
        } else {
            threshold -= n;
        }
        cols -= n;
    }
}

/// A single row `0..cols`.
fn strip(cols: u64, threshold: u64, modulus: Modulus) -> ModInt {
    if threshold >= cols - 1 {
        return modulus.zero();
    }

    // span * (span - 1) / 2
    let span = cols - threshold;
    if span % 2 == 0 {
        modulus.int(span / 2) * (span - 1)
    } else {
        modulus.int(span) * ((span - 1) / 2)
    }
}
