//! Raw 20-byte contract and token addresses
//!
//! Addresses are ordered and compared strictly by their raw bytes, never by
//! their textual form, so mixed-case (checksummed) and lowercase inputs for
//! the same account are the same `Address`.

use crate::common::errors::AddressError;
use std::fmt;
use std::str::FromStr;

/// Length of an address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// 20-byte address with byte-lexicographic ordering
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Wrap raw address bytes
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build from a byte slice that must be exactly 20 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let raw = <[u8; ADDRESS_LENGTH]>::try_from(bytes).map_err(|_| {
            AddressError::InvalidLength {
                length: bytes.len() * 2,
            }
        })?;
        Ok(Self(raw))
    }

    /// Raw bytes in network order
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Lowercase hex without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse `0x`-prefixed or bare hex, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressError::InvalidLength {
                length: digits.len(),
            });
        }

        let mut raw = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut raw).map_err(|_| AddressError::InvalidHex {
            input: s.to_string(),
        })?;
        Ok(Self(raw))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
