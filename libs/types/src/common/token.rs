//! Chain identifiers and token identities
//!
//! A token's identity is its (chain, address) pair. Decimals, symbol and name
//! are carried along for pricing and display but never take part in equality.

use crate::common::address::Address;
use crate::common::errors::TokenError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// EVM chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChainId(pub u64);

impl ChainId {
    /// BNB Smart Chain mainnet
    pub const BSC_MAINNET: Self = Self(56);

    /// BNB Smart Chain testnet
    pub const BSC_TESTNET: Self = Self(97);

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ERC-20 style token on a specific chain
///
/// Equality and hashing use only `chain_id` and `address`.
#[derive(Debug, Clone)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: u8,
    symbol: String,
    name: String,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `self` sorts before `other` in canonical pair order
    ///
    /// Only tokens on the same chain with distinct addresses can be ordered.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        if self.chain_id != other.chain_id {
            return Err(TokenError::DifferentChain {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        match self.address.cmp(&other.address) {
            Ordering::Less => Ok(true),
            Ordering::Greater => Ok(false),
            Ordering::Equal => Err(TokenError::IdenticalAddresses(self.address)),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "{}@{}", self.address, self.chain_id)
        } else {
            write!(f, "{} ({}@{})", self.symbol, self.address, self.chain_id)
        }
    }
}
