use crate::modint::Modulus;

/// Visits every cell. Rows are accumulated in `u128` and reduced once per row.
pub fn enumerate(rows: u64, cols: u64, threshold: u64, modulus: Modulus) -> u64 {
    let m = u128::from(modulus.get());
    let mut total = 0u128;
    for x in 0..rows {
        let row: u128 = (0..cols)
            .map(|y| u128::from((x ^ y).saturating_sub(threshold)))
            .sum();
        total = (total + row % m) % m;
    }
    total as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_grids() {
        let m = Modulus::new(1000).unwrap();
        assert_eq!(enumerate(4, 4, 0, m), 24);
        assert_eq!(enumerate(4, 4, 1, m), 12);
        assert_eq!(enumerate(11, 10, 5, Modulus::new(10_000).unwrap()), 284);
        assert_eq!(enumerate(3, 9, 9, m), 1);
    }

    #[test]
    fn test_reduces() {
        assert_eq!(enumerate(8, 8, 0, Modulus::new(100).unwrap()), 24);
    }
}
