//! # Pair Configuration
//!
//! Per-network factory deployments and configuration loading for the pair
//! accounting crates.
//!
//! ## Features
//!
//! - **Built-in Deployments**: PancakeSwap factory and init code hash for BSC mainnet/testnet
//! - **File Configuration**: extra or overriding networks from TOML
//! - **Environment Overrides**: `PAIR_`-prefixed variables on top of the file
//!
//! ## Usage
//!
//! ```rust
//! use pair_config::{networks, PairConfig};
//! use pair_types::ChainId;
//!
//! let config = PairConfig::default();
//! let deployment = config.deployment(ChainId::BSC_MAINNET).unwrap();
//! assert_eq!(deployment.factory, networks::BSC_MAINNET_FACTORY);
//! ```

pub mod networks;
pub mod pair_config;

// Re-export commonly used types
pub use networks::{Deployment, CREATE2_PREFIX, DEFAULT_FEE_BPS, FEE_BPS_DENOMINATOR};
pub use pair_config::{load_config, GlobalConfig, NetworkSettings, PairConfig};
