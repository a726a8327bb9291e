//! Error types for address parsing, token ordering and amount validation
//!
//! All variants are terminal validation failures: callers surface them to
//! their own caller, nothing here is retried.

use crate::common::address::Address;
use crate::common::token::ChainId;
use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while parsing a 20-byte address
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input does not decode to exactly 20 bytes
    #[error("Invalid address length: expected 40 hex digits, got {length}")]
    InvalidLength { length: usize },

    /// Input contains non-hex characters
    #[error("Invalid address hex: '{input}'")]
    InvalidHex { input: String },
}

/// Errors that can occur when ordering two tokens
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Tokens live on different chains and cannot be ordered
    #[error("Tokens are on different chains ({left} vs {right})")]
    DifferentChain { left: ChainId, right: ChainId },

    /// Both tokens share the same address
    #[error("Tokens share the same address {0}")]
    IdenticalAddresses(Address),
}

/// Errors that can occur when constructing or combining token amounts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Raw amount is negative or exceeds uint256
    #[error("Amount {value} is outside the uint256 range")]
    OutOfRange { value: BigInt },

    /// Arithmetic between amounts of different tokens
    #[error("Amounts belong to different tokens")]
    DifferentToken,
}
