//! Raw token amounts
//!
//! Amounts are kept as raw integers in the token's smallest unit. Decimal
//! scaling only matters for prices and display, never for reserve math.

use crate::common::errors::AmountError;
use crate::common::fraction::Fraction;
use crate::common::token::Token;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use once_cell::sync::Lazy;
use std::fmt;

/// Largest value representable by a uint256 (`2^256 - 1`)
pub static MAX_UINT256: Lazy<BigInt> = Lazy::new(|| (BigInt::one() << 256usize) - 1);

/// Raw amount of a specific token, validated to the uint256 range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    token: Token,
    raw: BigInt,
}

impl TokenAmount {
    pub fn new(token: Token, raw: impl Into<BigInt>) -> Result<Self, AmountError> {
        let raw = raw.into();
        if raw.is_negative() || raw > *MAX_UINT256 {
            return Err(AmountError::OutOfRange { value: raw });
        }
        Ok(Self { token, raw })
    }

    /// Zero amount of `token`
    pub fn zero(token: Token) -> Self {
        Self {
            token,
            raw: BigInt::zero(),
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Amount in the token's smallest unit
    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The raw amount as `raw/1`
    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_integer(self.raw.clone())
    }

    pub fn add(&self, other: &TokenAmount) -> Result<Self, AmountError> {
        if self.token != other.token {
            return Err(AmountError::DifferentToken);
        }
        Self::new(self.token.clone(), &self.raw + &other.raw)
    }

    pub fn subtract(&self, other: &TokenAmount) -> Result<Self, AmountError> {
        if self.token != other.token {
            return Err(AmountError::DifferentToken);
        }
        Self::new(self.token.clone(), &self.raw - &other.raw)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.token.symbol().is_empty() {
            write!(f, "{} @ {}", self.raw, self.token.address())
        } else {
            write!(f, "{} {}", self.raw, self.token.symbol())
        }
    }
}
