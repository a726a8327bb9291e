//! Exact integer helpers for liquidity math

use crate::errors::{PairError, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Floor of the square root of `value`, computed with Newton's method
///
/// The result `r` always satisfies `r * r <= value < (r + 1) * (r + 1)`.
pub fn sqrt(value: &BigInt) -> Result<BigInt> {
    if value.is_negative() {
        return Err(PairError::NegativeRadicand(value.clone()));
    }

    let three = BigInt::from(3u8);
    if value <= &three {
        return Ok(if value.is_zero() {
            BigInt::zero()
        } else {
            BigInt::one()
        });
    }

    let two = BigInt::from(2u8);
    let mut root = value.clone();
    let mut next = value / &two + BigInt::one();

    // Newton: next = (value / next + next) / 2, strictly decreasing until floor(sqrt)
    while next < root {
        root = next;
        next = (value / &root + &root) / &two;
    }

    debug_assert!(&root * &root <= *value);
    debug_assert!((&root + BigInt::one()) * (&root + BigInt::one()) > *value);

    Ok(root)
}
