//! Chain parameters and genesis verification
//!
//! This crate defines the consensus constants of every supported network
//! (main, test, regtest and the in-process unit-test network), builds and
//! verifies each network's genesis block, and tracks which network is active
//! for the running process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checkpoints;
pub mod genesis;
pub mod hash;
pub mod network;
pub mod params;
pub mod pow;
pub mod registry;
pub mod script;
pub mod seeds;

pub use checkpoints::{Checkpoint, CheckpointData};
pub use genesis::{BlockHeader, CoinbaseTransaction, GenesisBlock, GenesisTemplate};
pub use hash::{sha256d, Hash256};
pub use network::NetworkId;
pub use params::{Amount, Base58Prefixes, Base58Type, ChainParams, COIN};
pub use primitive_types::U256;
pub use registry::{
    modifiable_params, params, params_for, select_params, select_params_from_name,
    try_modifiable_params, try_params, ModifiableParams, NetworkRegistry,
};
pub use seeds::{convert_seeds, DnsSeed, SeedPeer, SeedSpec6};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network name not recognised
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Both -regtest and -testnet requested
    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworkFlags,

    /// Active parameters requested before any network was selected
    #[error("No network selected")]
    NetworkNotSelected,

    /// Mutation requested while a non unit-test network is active
    #[error("Parameters of network {0} cannot be modified")]
    NotUnitTestNetwork(NetworkId),

    /// Checkpoint not found
    #[error("No checkpoint found for height {0}")]
    CheckpointNotFound(u32),

    /// Malformed 256-bit hash literal
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    /// Malformed hex literal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Compact difficulty that is negative, zero or overflows 256 bits
    #[error("Invalid compact target: {0:#010x}")]
    InvalidCompact(u32),

    /// Genesis merkle root differs from the hard-coded value
    #[error("Genesis merkle root mismatch on {network}: expected {expected}, got {actual}")]
    GenesisMerkleMismatch {
        /// Network being built
        network: NetworkId,
        /// Hard-coded merkle root
        expected: Hash256,
        /// Computed merkle root
        actual: Hash256,
    },

    /// Genesis hash differs from the hard-coded value
    #[error("Genesis hash mismatch on {network}: expected {expected}, got {actual}")]
    GenesisHashMismatch {
        /// Network being built
        network: NetworkId,
        /// Hard-coded genesis hash
        expected: Hash256,
        /// Computed genesis hash
        actual: Hash256,
    },

    /// Hash does not satisfy its difficulty target
    #[error("Proof of work failed: {0}")]
    ProofOfWork(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
