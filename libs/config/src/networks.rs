//! Per-network pair factory deployments
//!
//! Pair addresses are CREATE2 addresses of a factory contract, so deriving
//! one needs the factory address, the keccak256 hash of the pair creation
//! code, and the CREATE2 prefix byte. These are fixed per deployment and
//! public, so the known ones are hardcoded here and anything else comes from
//! configuration (see [`crate::PairConfig`]).

use pair_types::{Address, ChainId};

/// Prefix byte of the CREATE2 address preimage (EIP-1014)
pub const CREATE2_PREFIX: u8 = 0xff;

/// PancakeSwap V2 swap fee in basis points (0.25%)
pub const DEFAULT_FEE_BPS: u32 = 25;

/// Basis point denominator for swap fees
pub const FEE_BPS_DENOMINATOR: u32 = 10_000;

/// Constants that fix a pair factory deployment on one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deployment {
    /// Factory contract that deploys pairs via CREATE2
    pub factory: Address,
    /// keccak256 of the pair contract creation code
    pub init_code_hash: [u8; 32],
    /// CREATE2 preimage prefix
    pub create2_prefix: u8,
    /// Swap fee in basis points (25 = 0.25%)
    pub fee_bps: u32,
}

impl Deployment {
    pub const fn new(factory: Address, init_code_hash: [u8; 32]) -> Self {
        Self {
            factory,
            init_code_hash,
            create2_prefix: CREATE2_PREFIX,
            fee_bps: DEFAULT_FEE_BPS,
        }
    }

    pub const fn with_fee_bps(mut self, fee_bps: u32) -> Self {
        self.fee_bps = fee_bps;
        self
    }

    pub const fn with_create2_prefix(mut self, prefix: u8) -> Self {
        self.create2_prefix = prefix;
        self
    }
}

// =============================================================================
// BNB Smart Chain
// =============================================================================

/// PancakeSwap V2 factory on BSC mainnet
/// `0xcA143Ce32Fe78f1f7019d7d551a6402fC5350c73`
pub const BSC_MAINNET_FACTORY: Address = Address::new([
    0xca, 0x14, 0x3c, 0xe3, 0x2f, 0xe7, 0x8f, 0x1f, 0x70, 0x19, 0xd7, 0xd5, 0x51, 0xa6, 0x40, 0x2f,
    0xc5, 0x35, 0x0c, 0x73,
]);

/// PancakeSwap V2 pair init code hash on BSC mainnet
pub const BSC_MAINNET_INIT_CODE_HASH: [u8; 32] = [
    0x00, 0xfb, 0x7f, 0x63, 0x07, 0x66, 0xe6, 0xa7, 0x96, 0x04, 0x8e, 0xa8, 0x7d, 0x01, 0xac, 0xd3,
    0x06, 0x8e, 0x8f, 0xf6, 0x7d, 0x07, 0x81, 0x48, 0xa3, 0xfa, 0x3f, 0x4a, 0x84, 0xf6, 0x9b, 0xd5,
];

/// PancakeSwap factory on BSC testnet
/// `0x6725F303b657a9451d8BA641348b6761A6CC7a17`
pub const BSC_TESTNET_FACTORY: Address = Address::new([
    0x67, 0x25, 0xf3, 0x03, 0xb6, 0x57, 0xa9, 0x45, 0x1d, 0x8b, 0xa6, 0x41, 0x34, 0x8b, 0x67, 0x61,
    0xa6, 0xcc, 0x7a, 0x17,
]);

/// PancakeSwap pair init code hash on BSC testnet
pub const BSC_TESTNET_INIT_CODE_HASH: [u8; 32] = [
    0xd0, 0xd4, 0xc4, 0xcd, 0x08, 0x48, 0xc9, 0x3c, 0xb4, 0xfd, 0x1f, 0x49, 0x8d, 0x70, 0x13, 0xee,
    0x6b, 0xfb, 0x25, 0x78, 0x3e, 0xa2, 0x15, 0x93, 0xd5, 0x83, 0x4f, 0x5d, 0x25, 0x0e, 0xce, 0x66,
];

pub const BSC_MAINNET: Deployment = Deployment::new(BSC_MAINNET_FACTORY, BSC_MAINNET_INIT_CODE_HASH);

pub const BSC_TESTNET: Deployment = Deployment::new(BSC_TESTNET_FACTORY, BSC_TESTNET_INIT_CODE_HASH);

/// Hardcoded deployment for a known chain
pub fn builtin(chain_id: ChainId) -> Option<Deployment> {
    match chain_id {
        ChainId::BSC_MAINNET => Some(BSC_MAINNET),
        ChainId::BSC_TESTNET => Some(BSC_TESTNET),
        _ => None,
    }
}
