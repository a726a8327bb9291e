//! Pair accounting errors
//!
//! Every failure is an immediately-returned precondition violation. No
//! formula produces a partial result.

use num_bigint::BigInt;
use pair_types::{Address, AmountError, TokenError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    /// Operands reference tokens on different chains
    #[error("Tokens are on different chains")]
    DifferentChain,

    /// Token is neither of the pair's tokens (or not its liquidity token)
    #[error("Token is not part of this pair")]
    DifferentToken,

    /// A deposit or swap input yields a non-positive result
    #[error("Insufficient input amount")]
    InsufficientInputAmount,

    /// Reserves cannot cover the requested computation
    #[error("Insufficient reserves")]
    InsufficientReserves,

    /// Both sides of the pair are the same token
    #[error("Pair tokens share the same address {0}")]
    IdenticalAddresses(Address),

    /// Redeeming more liquidity than exists
    #[error("Liquidity {liquidity} exceeds total supply {total_supply}")]
    LiquidityExceedsSupply {
        liquidity: BigInt,
        total_supply: BigInt,
    },

    /// Integer square root of a negative value
    #[error("Cannot take the square root of negative value {0}")]
    NegativeRadicand(BigInt),

    /// Swap fee at or above 100%
    #[error("Invalid swap fee: {0} bps")]
    InvalidFee(u32),

    /// Resulting amount falls outside uint256
    #[error(transparent)]
    Amount(#[from] AmountError),
}

impl From<TokenError> for PairError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::DifferentChain { .. } => PairError::DifferentChain,
            TokenError::IdenticalAddresses(address) => PairError::IdenticalAddresses(address),
        }
    }
}

pub type Result<T> = std::result::Result<T, PairError>;
