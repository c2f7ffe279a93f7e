//! AMICoin chain parameters and network-upgrade governance
//!
//! This crate provides the per-network parameter sets (main, test, regtest),
//! the network-upgrade activation resolver, the founders-reward address
//! rotation, checkpoint trust anchors with sync-height estimation, and the
//! genesis self-check run at startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod checkpoints;
pub mod consensus;
pub mod equihash;
pub mod founders;
pub mod genesis;
pub mod hash;
pub mod network;
pub mod registry;
pub mod script;
pub mod upgrades;

pub use address::{Base58Prefixes, Base58Type, Bech32Hrps, Bech32Type, Destination};
pub use checkpoints::{Checkpoint, CheckpointStats, CheckpointStore, CheckpointVerdict};
pub use consensus::ConsensusParams;
pub use equihash::EquihashParams;
pub use founders::FoundersRewardSchedule;
pub use genesis::{GenesisBuilder, GenesisDescriptor, GenesisHashes, Sha256dGenesisBuilder};
pub use hash::{BlockHash, Uint256};
pub use network::{BehaviorFlags, ChainParams, DnsSeed, NetworkId};
pub use registry::{ParamsRegistry, SelectOptions};
pub use script::Script;
pub use upgrades::{
    ActivationHeight, NetworkUpgrade, UpgradeIndex, UpgradeTable, MAX_NETWORK_UPGRADES,
};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Height outside the window a lookup is defined for
    #[error("Height {height} outside of [1, {max}]")]
    HeightOutOfRange {
        /// Requested height
        height: u32,
        /// Largest accepted height
        max: u32,
    },

    /// Index outside of a fixed list
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries
        len: usize,
    },

    /// Destination text that does not decode for this network
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Upgrade heights that are not in deployment order
    #[error("{later} activates at {later_height}, before {earlier} at {earlier_height}")]
    NonMonotonicUpgrades {
        /// Upgrade that comes first in deployment order
        earlier: UpgradeIndex,
        /// Its activation height
        earlier_height: u32,
        /// Upgrade that comes later in deployment order
        later: UpgradeIndex,
        /// Its activation height
        later_height: u32,
    },

    /// Base era must be active from genesis
    #[error("Base era must be always active")]
    BaseEraNotAlwaysActive,

    /// Founders reward schedule without addresses
    #[error("Founders reward schedule needs at least one address")]
    EmptyFoundersAddresses,

    /// Founders reward schedule that cannot cover its own window
    #[error("{count} founders addresses exceed last reward height {last_reward_height}")]
    TooManyFoundersAddresses {
        /// Number of addresses
        count: usize,
        /// Last height paying a founders reward
        last_reward_height: u32,
    },

    /// Checkpoint list without a genesis entry
    #[error("Checkpoint list must start at genesis")]
    MissingGenesisCheckpoint,

    /// Checkpoint heights that are not strictly increasing
    #[error("Checkpoint at height {next} does not follow {previous}")]
    UnorderedCheckpoints {
        /// Preceding checkpoint height
        previous: u32,
        /// Offending checkpoint height
        next: u32,
    },

    /// Equihash parameters rejected by the acceptability check
    #[error("Unacceptable equihash parameters N={n}, K={k}")]
    InvalidEquihashParams {
        /// Equihash N
        n: u32,
        /// Equihash K
        k: u32,
    },

    /// Malformed hex value
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Selection options that fail to load
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
