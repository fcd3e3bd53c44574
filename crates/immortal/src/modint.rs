use std::{
    fmt,
    num::NonZeroU64,
    ops::{Add, Mul, Sub},
};

/// The modulus every [`ModInt`] of one computation is reduced against.
///
/// Passed by value into every operation; there is no process-wide modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus(NonZeroU64);

impl Modulus {
    pub fn new(modulus: u64) -> Option<Modulus> {
        NonZeroU64::new(modulus).map(Modulus)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Lifts `value` into this modulus.
    pub fn int(self, value: u64) -> ModInt {
        ModInt {
            value: value % self.get(),
            modulus: self,
        }
    }

    pub fn zero(self) -> ModInt {
        self.int(0)
    }

    pub fn add(self, a: u64, b: u64) -> u64 {
        let m = u128::from(self.get());
        let sum = u128::from(a % self.get()) + u128::from(b % self.get());
        (sum % m) as u64
    }

    /// `a - b`, never negative: the modulus is added back before reducing.
    pub fn sub(self, a: u64, b: u64) -> u64 {
        let m = u128::from(self.get());
        let difference = u128::from(a % self.get()) + m - u128::from(b % self.get());
        (difference % m) as u64
    }

    pub fn mul(self, a: u64, b: u64) -> u64 {
        let m = u128::from(self.get());
        let product = u128::from(a % self.get()) * u128::from(b % self.get());
        (product % m) as u64
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An integer in `0..modulus`, tagged with the modulus it belongs to.
///
/// There is no division. Formulas that halve a quantity branch on parity and
/// halve the even factor as a plain integer before lifting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModInt {
    value: u64,
    modulus: Modulus,
}

impl ModInt {
    pub fn value(self) -> u64 {
        self.value
    }

    pub fn modulus(self) -> Modulus {
        self.modulus
    }

    fn with(self, rhs: ModInt, op: fn(Modulus, u64, u64) -> u64) -> ModInt {
        debug_assert_eq!(self.modulus, rhs.modulus, "mixed moduli");
        ModInt {
            value: op(self.modulus, self.value, rhs.value),
            modulus: self.modulus,
        }
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl Add for ModInt {
    type Output = ModInt;

    fn add(self, rhs: ModInt) -> ModInt {
        self.with(rhs, Modulus::add)
    }
}

impl Add<u64> for ModInt {
    type Output = ModInt;

    fn add(self, rhs: u64) -> ModInt {
        self + self.modulus.int(rhs)
    }
}

impl Sub for ModInt {
    type Output = ModInt;

    fn sub(self, rhs: ModInt) -> ModInt {
        self.with(rhs, Modulus::sub)
    }
}

impl Sub<u64> for ModInt {
    type Output = ModInt;

    fn sub(self, rhs: u64) -> ModInt {
        self - self.modulus.int(rhs)
    }
}

impl Mul for ModInt {
    type Output = ModInt;

    fn mul(self, rhs: ModInt) -> ModInt {
        self.with(rhs, Modulus::mul)
    }
}

impl Mul<u64> for ModInt {
    type Output = ModInt;

    fn mul(self, rhs: u64) -> ModInt {
        self * self.modulus.int(rhs)
    }
}
