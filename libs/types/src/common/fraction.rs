//! Exact rational arithmetic over arbitrary-precision integers
//!
//! `Fraction` is the foundation for prices, reserves and liquidity formulas.
//! Nothing here touches floating point: every operation is exact and integer
//! extraction always names its rounding mode.
//!
//! The denominator is kept strictly positive. A zero denominator is a
//! programming error and panics on construction.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Rounding mode for integer extraction from a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Round toward zero (integer division)
    Truncate,
    /// Round up to the next integer on any non-zero remainder
    Ceiling,
}

/// Exact numerator/denominator pair
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Create a fraction, normalizing the sign onto the numerator
    ///
    /// # Panics
    /// If `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        let numerator = numerator.into();
        let denominator = denominator.into();
        assert!(
            !denominator.is_zero(),
            "fraction denominator must be non-zero"
        );

        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Integer value `n/1`
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Same value in lowest terms
    pub fn reduced(&self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        if gcd.is_one() {
            return self.clone();
        }
        Self {
            numerator: &self.numerator / &gcd,
            denominator: &self.denominator / &gcd,
        }
    }

    /// Reciprocal `d/n`
    ///
    /// # Panics
    /// If the fraction is zero.
    pub fn invert(&self) -> Self {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn add(&self, other: &Fraction) -> Self {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn subtract(&self, other: &Fraction) -> Self {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn multiply(&self, other: &Fraction) -> Self {
        Self {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// # Panics
    /// If `other` is zero.
    pub fn divide(&self, other: &Fraction) -> Self {
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Integer part, rounded toward zero
    pub fn to_truncated_integer(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Smallest integer not below the value
    ///
    /// For non-negative `n/d` this is `(n + d - 1) / d`.
    pub fn to_ceiling_integer(&self) -> BigInt {
        if self.numerator.is_negative() {
            // truncation toward zero already rounds negatives up
            return &self.numerator / &self.denominator;
        }
        (&self.numerator + &self.denominator - BigInt::one()) / &self.denominator
    }

    /// Integer extraction with an explicit rounding mode
    pub fn quotient(&self, rounding: Rounding) -> BigInt {
        match rounding {
            Rounding::Truncate => self.to_truncated_integer(),
            Rounding::Ceiling => self.to_ceiling_integer(),
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    // denominators are positive, so cross-multiplication preserves order
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// Operators are implemented on references only so the inherent
// `add`/`subtract`/... methods stay the ones method-call syntax resolves to.
macro_rules! impl_fraction_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                Fraction::$inherent(self, rhs)
            }
        }
    };
}

impl_fraction_op!(Add, add, add);
impl_fraction_op!(Sub, sub, subtract);
impl_fraction_op!(Mul, mul, multiply);
impl_fraction_op!(Div, div, divide);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d)
    }

    #[test]
    fn test_sign_normalization() {
        let f = frac(3, -4);
        assert_eq!(f.numerator(), &BigInt::from(-3));
        assert_eq!(f.denominator(), &BigInt::from(4));
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn test_zero_denominator_panics() {
        let _ = frac(1, 0);
    }

    #[test]
    fn test_arithmetic() {
        let (a, b) = (frac(1, 10), frac(4, 12));
        assert_eq!(&a + &b, frac(13, 30));
        assert_eq!(&a - &b, frac(-7, 30));
        assert_eq!(&a * &b, frac(1, 30));
        assert_eq!(&a / &b, frac(3, 10));
        assert_eq!(frac(1, 5).add(&frac(2, 5)), frac(3, 5));
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(frac(101, 100), frac(202, 200));
        assert_ne!(frac(101, 100), frac(100, 101));
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(-1, 3));
    }

    #[test]
    fn test_reduced() {
        let r = frac(250_000, 5_500).reduced();
        assert_eq!(r.numerator(), &BigInt::from(500));
        assert_eq!(r.denominator(), &BigInt::from(11));
    }

    #[test]
    fn test_truncated_integer() {
        assert_eq!(frac(8, 3).to_truncated_integer(), BigInt::from(2));
        assert_eq!(frac(12, 4).to_truncated_integer(), BigInt::from(3));
        assert_eq!(frac(-8, 3).to_truncated_integer(), BigInt::from(-2));
    }

    #[test]
    fn test_ceiling_integer() {
        assert_eq!(frac(8, 3).to_ceiling_integer(), BigInt::from(3));
        assert_eq!(frac(12, 4).to_ceiling_integer(), BigInt::from(3));
        assert_eq!(frac(0, 7).to_ceiling_integer(), BigInt::from(0));
        assert_eq!(frac(-8, 3).to_ceiling_integer(), BigInt::from(-2));
        assert_eq!(
            frac(500_000, 545).quotient(Rounding::Ceiling),
            BigInt::from(918)
        );
        assert_eq!(
            frac(500_000, 545).quotient(Rounding::Truncate),
            BigInt::from(917)
        );
    }

    #[test]
    fn test_invert() {
        assert_eq!(frac(101, 100).invert(), frac(100, 101));
        assert_eq!(frac(-2, 3).invert(), frac(3, -2));
    }

    proptest! {
        #[test]
        fn prop_ceiling_is_truncation_plus_remainder_flag(n in 0i64..1_000_000_000, d in 1i64..1_000_000) {
            let f = frac(n, d);
            let expected = if n % d == 0 { n / d } else { n / d + 1 };
            prop_assert_eq!(f.to_ceiling_integer(), BigInt::from(expected));
            prop_assert_eq!(f.to_truncated_integer(), BigInt::from(n / d));
        }

        #[test]
        fn prop_invert_is_involution(n in 1i64..1_000_000, d in 1i64..1_000_000) {
            let f = frac(n, d);
            prop_assert_eq!(f.invert().invert(), f.clone());
            prop_assert_eq!(f.multiply(&f.invert()), Fraction::from_integer(1));
        }
    }
}
