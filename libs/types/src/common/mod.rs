//! Common value types shared by every crate in the workspace

pub mod address;
pub mod amount;
pub mod errors;
pub mod fraction;
pub mod token;

pub use address::{Address, ADDRESS_LENGTH};
pub use amount::{TokenAmount, MAX_UINT256};
pub use errors::{AddressError, AmountError, TokenError};
pub use fraction::{Fraction, Rounding};
pub use token::{ChainId, Token};
