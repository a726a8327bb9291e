//! Pair address derivation and memoization
//!
//! A pair's address is the CREATE2 address its factory deploys it at:
//!
//! ```text
//! salt    = keccak256(token0 ‖ token1)            (sorted by raw bytes)
//! address = keccak256(0xff ‖ factory ‖ salt ‖ init_code_hash)[12..32]
//! ```
//!
//! The derivation is pure, so [`PairAddressCache`] memoizes it per unordered
//! token pair for the lifetime of the cache. Entries never go stale and are
//! never evicted.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use pair_config::Deployment;
use pair_types::{Address, ADDRESS_LENGTH};
use sha3::{Digest, Keccak256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Order two addresses by raw bytes, lower first
pub fn sort_addresses(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a <= token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// CREATE2 salt for a pair: keccak256 of the two sorted addresses
pub fn pair_salt(token_a: Address, token_b: Address) -> [u8; 32] {
    let (lower, higher) = sort_addresses(token_a, token_b);
    let digest = Keccak256::new()
        .chain_update(lower)
        .chain_update(higher)
        .finalize();

    let mut salt = [0u8; 32];
    salt.copy_from_slice(&digest);
    salt
}

/// Derive the pair address for two tokens without caching
///
/// Argument order does not matter.
pub fn compute_pair_address(deployment: &Deployment, token_a: Address, token_b: Address) -> Address {
    let salt = pair_salt(token_a, token_b);
    let hash = Keccak256::new()
        .chain_update([deployment.create2_prefix])
        .chain_update(deployment.factory)
        .chain_update(salt)
        .chain_update(deployment.init_code_hash)
        .finalize();

    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&hash[32 - ADDRESS_LENGTH..]);
    Address::new(address)
}

/// Counters for cache effectiveness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub computations: u64,
}

/// Concurrent, compute-once memo of pair addresses for one deployment
///
/// Each unordered pair gets its own `Arc<OnceCell>`. The map shard lock is
/// only held to fetch or insert that cell, and the guard is dropped (the
/// `Arc` is cloned out) before `get_or_init` runs. The keccak work therefore
/// runs with no map lock held: callers for one pair block only on that pair's
/// cell, and a caller for a different pair never waits on it.
#[derive(Debug)]
pub struct PairAddressCache {
    deployment: Deployment,
    entries: DashMap<(Address, Address), Arc<OnceCell<Address>>>,
    hits: AtomicU64,
    computations: AtomicU64,
}

impl PairAddressCache {
    pub fn new(deployment: Deployment) -> Self {
        Self {
            deployment,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            computations: AtomicU64::new(0),
        }
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Pair address for two tokens, computing it at most once per pair
    pub fn get_address(&self, token_a: Address, token_b: Address) -> Address {
        let key = sort_addresses(token_a, token_b);

        let existing = self.entries.get(&key).map(|entry| Arc::clone(entry.value()));
        let cell = existing
            .unwrap_or_else(|| Arc::clone(self.entries.entry(key).or_default().value()));

        let mut computed = false;
        let address = *cell.get_or_init(|| {
            computed = true;
            self.computations.fetch_add(1, Ordering::Relaxed);
            let address = compute_pair_address(&self.deployment, key.0, key.1);
            debug!(
                token0 = %key.0,
                token1 = %key.1,
                pair = %address,
                "Computed pair address"
            );
            address
        });

        if !computed {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        address
    }

    /// Number of memoized pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
        }
    }
}
