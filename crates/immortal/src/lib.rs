//! Sums of `max(0, (x ^ y) - threshold)` over huge grids, modulo an arbitrary
//! modulus.
//!
//! ```
//! assert_eq!(immortal::compute(8, 5, 1, 100), Ok(5));
//! ```

use std::fmt;

pub mod closed_form;
mod decompose;
mod naive;
pub mod modint;

pub use decompose::solve;
pub use modint::{ModInt, Modulus};

/// Largest accepted row or column count.
pub const MAX_DIMENSION: u64 = 1 << 62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    ZeroModulus,
    ZeroDimension,
    DimensionTooLarge,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::ZeroModulus => write!(f, "modulus must be positive"),
            InvalidInput::ZeroDimension => write!(f, "rows and columns must be positive"),
            InvalidInput::DimensionTooLarge => {
                write!(f, "rows and columns must not exceed {MAX_DIMENSION}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

fn validate(rows: u64, cols: u64, modulus: u64) -> Result<Modulus, InvalidInput> {
    if rows == 0 || cols == 0 {
        return Err(InvalidInput::ZeroDimension);
    }
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(InvalidInput::DimensionTooLarge);
    }
    Modulus::new(modulus).ok_or(InvalidInput::ZeroModulus)
}

/// Sum of `max(0, (x ^ y) - threshold)` over `0 <= x < rows`, `0 <= y < cols`,
/// reduced modulo `modulus`.
///
/// Runs in time logarithmic in the dimensions. The modulus need not be prime.
pub fn compute(rows: u64, cols: u64, threshold: u64, modulus: u64) -> Result<u64, InvalidInput> {
    let modulus = validate(rows, cols, modulus)?;
    log::debug!("computing {rows}x{cols} threshold={threshold} modulus={modulus}");
    Ok(solve(rows, cols, threshold, modulus).value())
}

/// Same as [`compute`].
pub fn elder_age(rows: u64, cols: u64, threshold: u64, modulus: u64) -> Result<u64, InvalidInput> {
    compute(rows, cols, threshold, modulus)
}

/// Same result as [`compute`], found by visiting every cell.
pub fn naive(rows: u64, cols: u64, threshold: u64, modulus: u64) -> Result<u64, InvalidInput> {
    let modulus = validate(rows, cols, modulus)?;
    log::debug!("enumerating {rows}x{cols} threshold={threshold} modulus={modulus}");
    Ok(naive::enumerate(rows, cols, threshold, modulus))
}
