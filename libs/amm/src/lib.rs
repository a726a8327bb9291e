//! # Pair AMM Library - Exact Constant-Product Pair Accounting
//!
//! ## Purpose
//!
//! Off-chain model of a PancakeSwap V2 style liquidity pair: deterministic
//! CREATE2 address derivation, reserve-ratio prices, liquidity minted and
//! liquidity value (including protocol fee dilution) and swap quotes. All
//! arithmetic is exact over arbitrary-precision integers and fractions.
//!
//! ## Integration Points
//!
//! - **Input Sources**: validated [`pair_types::TokenAmount`] reserves, a
//!   [`pair_config::Deployment`] chosen from configuration
//! - **Output Destinations**: routers, position valuation, address lookups
//! - **Shared State**: [`PairAddressCache`], injected into [`Pair::new`]
//!
//! ## Architecture Role
//!
//! ```text
//! Token amounts ──► Pair::new ──► PairAddressCache ──► keccak256 (CREATE2)
//!                      │
//!                      ├──► token0_price / token1_price / price_of
//!                      ├──► get_liquidity_minted / get_liquidity_value
//!                      └──► get_output_amount / get_input_amount ──► next Pair
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pair_amm::{Pair, PairAddressCache};
//! use pair_config::networks;
//! use pair_types::{ChainId, Token, TokenAmount};
//!
//! let cache = PairAddressCache::new(networks::BSC_MAINNET);
//! let dai = Token::new(
//!     ChainId::BSC_MAINNET,
//!     "0x1af3f329e8be154074d8769d1ffa4ee058b1dbc3".parse().unwrap(),
//!     18,
//!     "DAI",
//!     "Dai Stablecoin",
//! );
//! let usdc = Token::new(
//!     ChainId::BSC_MAINNET,
//!     "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d".parse().unwrap(),
//!     18,
//!     "USDC",
//!     "USD Coin",
//! );
//!
//! let pair = Pair::new(
//!     TokenAmount::new(usdc, 101u64).unwrap(),
//!     TokenAmount::new(dai.clone(), 100u64).unwrap(),
//!     &cache,
//! )
//! .unwrap();
//!
//! assert_eq!(pair.token0(), &dai);
//! assert_eq!(
//!     pair.address().to_string(),
//!     "0xadbba1ef326a33fdb754f14e62a96d5278b942bd"
//! );
//! ```

pub mod errors;
pub mod liquidity;
pub mod math;
pub mod pair;
pub mod pair_address;
pub mod price;
pub mod v2_math;

pub use errors::{PairError, Result};
pub use liquidity::{LIQUIDITY_VALUE_ROUNDING, MINIMUM_LIQUIDITY};
pub use pair::{Pair, LIQUIDITY_TOKEN_DECIMALS, LIQUIDITY_TOKEN_NAME, LIQUIDITY_TOKEN_SYMBOL};
pub use pair_address::{compute_pair_address, sort_addresses, CacheStats, PairAddressCache};
pub use price::Price;
pub use v2_math::V2Math;
