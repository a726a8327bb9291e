//! # Pair Types Library
//!
//! Value types for constant-product pair accounting.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: amounts are raw integers, ratios are exact `Fraction`s
//! - **Byte-Order Identity**: addresses compare as raw 20-byte arrays, never as strings
//! - **Explicit Rounding**: integer extraction from a ratio always names its `Rounding`
//! - **Immutable Values**: tokens and amounts never change after construction
//!
//! ## Quick Start
//!
//! ```rust
//! use pair_types::{BigInt, ChainId, Fraction, Rounding, Token, TokenAmount};
//!
//! let usdc = Token::new(
//!     ChainId::BSC_MAINNET,
//!     "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d".parse().unwrap(),
//!     18,
//!     "USDC",
//!     "USD Coin",
//! );
//! let amount = TokenAmount::new(usdc, 1_000u64).unwrap();
//!
//! let third = Fraction::new(amount.raw().clone(), 3);
//! assert_eq!(third.quotient(Rounding::Truncate), BigInt::from(333));
//! assert_eq!(third.quotient(Rounding::Ceiling), BigInt::from(334));
//! ```

pub mod common;

pub use common::*;

/// Arbitrary-precision integer used for every raw amount
pub use num_bigint::BigInt;
