//! Pair Configuration Module
//!
//! Loads network deployments and logging settings from an optional TOML file
//! with `PAIR_`-prefixed environment variable overrides. Networks listed in
//! the file take precedence over the built-in table in [`crate::networks`].
//!
//! ```toml
//! [global]
//! log_level = "debug"
//! default_chain_id = 56
//!
//! [networks.bsc]
//! chain_id = 56
//! factory = "0xcA143Ce32Fe78f1f7019d7d551a6402fC5350c73"
//! init_code_hash = "0x00fb7f630766e6a796048ea87d01acd3068e8ff67d078148a3fa3f4a84f69bd5"
//! fee_bps = 25
//! ```

use crate::networks::{self, Deployment, CREATE2_PREFIX, DEFAULT_FEE_BPS};
use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use pair_types::{Address, ChainId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PairConfig {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,

    /// Network deployments keyed by a human-readable name
    #[serde(default)]
    pub networks: HashMap<String, NetworkSettings>,
}

/// Global configuration settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Chain used when a caller does not name one
    #[serde(default = "default_chain_id")]
    pub default_chain_id: u64,
}

/// One factory deployment
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NetworkSettings {
    pub chain_id: u64,
    pub factory: Address,
    /// 32-byte hex, with or without `0x`
    pub init_code_hash: String,
    pub create2_prefix: Option<u8>,
    pub fee_bps: Option<u32>,
    pub description: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_chain_id() -> u64 {
    ChainId::BSC_MAINNET.value()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_chain_id: default_chain_id(),
        }
    }
}

impl NetworkSettings {
    /// Validate and convert into a [`Deployment`]
    pub fn to_deployment(&self) -> Result<Deployment> {
        let digits = self
            .init_code_hash
            .strip_prefix("0x")
            .unwrap_or(&self.init_code_hash);

        let mut init_code_hash = [0u8; 32];
        hex::decode_to_slice(digits, &mut init_code_hash).with_context(|| {
            format!(
                "Invalid init_code_hash for chain {}: expected 32 bytes of hex",
                self.chain_id
            )
        })?;

        let fee_bps = self.fee_bps.unwrap_or(DEFAULT_FEE_BPS);
        if fee_bps >= networks::FEE_BPS_DENOMINATOR {
            bail!(
                "Invalid fee_bps {} for chain {}: must be below {}",
                fee_bps,
                self.chain_id,
                networks::FEE_BPS_DENOMINATOR
            );
        }

        Ok(Deployment::new(self.factory, init_code_hash)
            .with_create2_prefix(self.create2_prefix.unwrap_or(CREATE2_PREFIX))
            .with_fee_bps(fee_bps))
    }
}

impl PairConfig {
    /// Load configuration from an optional file with environment overrides
    ///
    /// Environment variables use the `PAIR_` prefix and `__` as the nesting
    /// separator, e.g. `PAIR_GLOBAL__LOG_LEVEL=debug`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading pair config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("PAIR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Deployment for `chain_id`: configured networks first, then built-ins
    pub fn deployment(&self, chain_id: ChainId) -> Result<Deployment> {
        if let Some((name, settings)) = self
            .networks
            .iter()
            .find(|(_, settings)| settings.chain_id == chain_id.value())
        {
            debug!("Using configured network '{}' for chain {}", name, chain_id);
            return settings.to_deployment();
        }

        match networks::builtin(chain_id) {
            Some(deployment) => {
                debug!("Using built-in deployment for chain {}", chain_id);
                Ok(deployment)
            }
            None => bail!("No pair factory deployment known for chain {}", chain_id),
        }
    }

    /// Deployment for the configured default chain
    pub fn default_deployment(&self) -> Result<Deployment> {
        self.deployment(self.default_chain_id())
    }

    pub fn default_chain_id(&self) -> ChainId {
        ChainId(self.global.default_chain_id)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Convenience function to load configuration with defaults
pub fn load_config(path: Option<&Path>) -> Result<PairConfig> {
    PairConfig::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_file_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("pairs.toml");

        let config_content = r#"
[global]
log_level = "debug"
default_chain_id = 1337

[networks.devnet]
chain_id = 1337
factory = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"
init_code_hash = "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"
fee_bps = 30
description = "local fork"
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = PairConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.global.log_level, "debug");
        assert_eq!(config.default_chain_id(), ChainId(1337));

        let deployment = config.default_deployment().unwrap();
        assert_eq!(
            deployment.factory,
            "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(
            hex::encode(deployment.init_code_hash),
            "96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"
        );
        assert_eq!(deployment.fee_bps, 30);
        assert_eq!(deployment.create2_prefix, CREATE2_PREFIX);
    }

    #[test]
    fn test_builtin_fallback() {
        let config = PairConfig::default();
        assert_eq!(
            config.deployment(ChainId::BSC_MAINNET).unwrap(),
            networks::BSC_MAINNET
        );
        assert_eq!(config.default_deployment().unwrap(), networks::BSC_MAINNET);
        assert!(config.deployment(ChainId(1)).is_err());
    }

    #[test]
    fn test_configured_network_overrides_builtin() {
        let mut config = PairConfig::default();
        config.networks.insert(
            "bsc-custom".to_string(),
            NetworkSettings {
                chain_id: 56,
                factory: networks::BSC_TESTNET_FACTORY,
                init_code_hash: hex::encode(networks::BSC_TESTNET_INIT_CODE_HASH),
                create2_prefix: None,
                fee_bps: Some(20),
                description: None,
            },
        );

        let deployment = config.deployment(ChainId::BSC_MAINNET).unwrap();
        assert_eq!(deployment.factory, networks::BSC_TESTNET_FACTORY);
        assert_eq!(deployment.fee_bps, 20);
    }

    #[test]
    fn test_invalid_network_settings() {
        let mut settings = NetworkSettings {
            chain_id: 56,
            factory: networks::BSC_MAINNET_FACTORY,
            init_code_hash: "0x1234".to_string(),
            create2_prefix: None,
            fee_bps: None,
            description: None,
        };
        assert!(settings.to_deployment().is_err());

        settings.init_code_hash = hex::encode(networks::BSC_MAINNET_INIT_CODE_HASH);
        settings.fee_bps = Some(10_000);
        assert!(settings.to_deployment().is_err());

        settings.fee_bps = None;
        assert_eq!(settings.to_deployment().unwrap(), networks::BSC_MAINNET);
    }

    #[test]
    fn test_toml_output_loads_back() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("dumped.toml");

        let mut config = PairConfig::default();
        config.networks.insert(
            "bsc-testnet".to_string(),
            NetworkSettings {
                chain_id: 97,
                factory: networks::BSC_TESTNET_FACTORY,
                init_code_hash: hex::encode(networks::BSC_TESTNET_INIT_CODE_HASH),
                create2_prefix: None,
                fee_bps: Some(25),
                description: Some("PancakeSwap V2 testnet".to_string()),
            },
        );

        fs::write(&config_path, config.to_toml().unwrap()).unwrap();
        let loaded = PairConfig::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.global.log_level, "info");
        assert_eq!(
            loaded.deployment(ChainId::BSC_TESTNET).unwrap(),
            networks::BSC_TESTNET
        );
    }

    #[test]
    fn test_missing_required_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(PairConfig::load(Some(&missing)).is_err());
    }
}
