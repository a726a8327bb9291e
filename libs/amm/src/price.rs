//! Exact prices between two tokens
//!
//! A `Price` keeps the raw reserve ratio (quote raw units per base raw unit)
//! together with the decimal scalar, so the human-facing ratio
//! `quote units per base unit` is available exactly via [`Price::adjusted`].

use crate::errors::{PairError, Result};
use num_bigint::BigInt;
use pair_types::{Fraction, Rounding, Token, TokenAmount};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Price {
    base: Token,
    quote: Token,
    /// quote raw / base raw
    raw: Fraction,
    /// 10^base.decimals / 10^quote.decimals
    scalar: Fraction,
}

fn pow10(decimals: u8) -> BigInt {
    num_traits::pow(BigInt::from(10u8), usize::from(decimals))
}

impl Price {
    /// Price of `base` in `quote` from raw amounts of each
    ///
    /// # Panics
    /// If `base_raw` is zero.
    pub fn new(
        base: Token,
        quote: Token,
        base_raw: impl Into<BigInt>,
        quote_raw: impl Into<BigInt>,
    ) -> Self {
        let raw = Fraction::new(quote_raw, base_raw);
        let scalar = Fraction::new(pow10(base.decimals()), pow10(quote.decimals()));
        Self {
            base,
            quote,
            raw,
            scalar,
        }
    }

    fn from_ratio(base: Token, quote: Token, ratio: Fraction) -> Self {
        Self::new(
            base,
            quote,
            ratio.denominator().clone(),
            ratio.numerator().clone(),
        )
    }

    pub fn base(&self) -> &Token {
        &self.base
    }

    pub fn quote(&self) -> &Token {
        &self.quote
    }

    /// Ratio of raw integer amounts
    pub fn raw(&self) -> &Fraction {
        &self.raw
    }

    pub fn scalar(&self) -> &Fraction {
        &self.scalar
    }

    /// Quote units per base unit, decimals applied
    pub fn adjusted(&self) -> Fraction {
        self.raw.multiply(&self.scalar)
    }

    /// The same price seen from the quote side
    pub fn invert(&self) -> Self {
        Self::from_ratio(self.quote.clone(), self.base.clone(), self.raw.invert())
    }

    /// Chain two prices: `base/quote × quote/other` gives `base/other`
    pub fn multiply(&self, other: &Price) -> Result<Self> {
        if self.quote != other.base {
            return Err(PairError::DifferentToken);
        }
        Ok(Self::from_ratio(
            self.base.clone(),
            other.quote.clone(),
            self.raw.multiply(&other.raw),
        ))
    }

    /// Convert an amount of the base token into the quote token (truncating)
    pub fn quote_amount(&self, amount: &TokenAmount) -> Result<TokenAmount> {
        if amount.token() != &self.base {
            return Err(PairError::DifferentToken);
        }
        let quoted = self
            .raw
            .multiply(&amount.as_fraction())
            .quotient(Rounding::Truncate);
        Ok(TokenAmount::new(self.quote.clone(), quoted)?)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.quote == other.quote && self.raw == other.raw
    }
}

impl Eq for Price {}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} per {}",
            self.adjusted().reduced(),
            self.quote.symbol(),
            self.base.symbol()
        )
    }
}
