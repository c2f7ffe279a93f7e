//! Consensus parameters for AMICoin

use crate::hash::{BlockHash, Uint256};
use crate::network::NetworkId;
use crate::upgrades::{NetworkUpgrade, UpgradeIndex, UpgradeTable};

/// Consensus parameters
#[derive(Debug, Clone)]
pub struct ConsensusParams {
    /// Network these rules belong to
    pub network: NetworkId,
    /// Hash of the genesis block
    pub hash_genesis_block: BlockHash,
    /// Whether coinbase outputs may only be spent to shielded addresses
    pub coinbase_must_be_protected: bool,
    /// Blocks over which the subsidy ramps up from zero
    pub subsidy_slow_start_interval: u32,
    /// Blocks between subsidy halvings
    pub subsidy_halving_interval: u32,
    /// Version-upgrade enforcement threshold
    pub majority_enforce_block_upgrade: u32,
    /// Outdated-version rejection threshold
    pub majority_reject_block_outdated: u32,
    /// Window the majority thresholds are measured over
    pub majority_window: u32,
    /// Easiest allowed proof-of-work target
    pub pow_limit: Uint256,
    /// Blocks in the difficulty averaging window
    pub pow_averaging_window: u32,
    /// Maximum downward difficulty adjustment (percent)
    pub pow_max_adjust_down: i64,
    /// Maximum upward difficulty adjustment (percent)
    pub pow_max_adjust_up: i64,
    /// Target seconds between blocks
    pub pow_target_spacing: i64,
    /// Height after which minimum-difficulty blocks are allowed
    pub pow_allow_min_difficulty_blocks_after_height: Option<u32>,
    /// Network upgrade schedule
    pub upgrades: UpgradeTable,
    /// The best chain should have at least this much work
    pub minimum_chain_work: Uint256,
}

fn hash(text: &str) -> BlockHash {
    BlockHash::from_hex(text).expect("built-in hash constant")
}

fn uint(text: &str) -> Uint256 {
    Uint256::from_hex(text).expect("built-in 256-bit constant")
}

fn upgrade_table(upgrades: [NetworkUpgrade; crate::MAX_NETWORK_UPGRADES]) -> UpgradeTable {
    UpgradeTable::new(upgrades).expect("built-in upgrade schedule must be ordered")
}

impl ConsensusParams {
    /// Create consensus params for mainnet
    pub fn mainnet() -> Self {
        Self::checked(Self {
            network: NetworkId::Main,
            hash_genesis_block: hash(
                "0003b0bd0c7e808c5d3c93949884f955a89fc22b34246fbed2193cd20bdb690b",
            ),
            coinbase_must_be_protected: true,
            subsidy_slow_start_interval: 2,
            subsidy_halving_interval: 840_000,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 4_000,
            pow_limit: uint("0007ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
            pow_averaging_window: 17,
            pow_max_adjust_down: 32,
            pow_max_adjust_up: 16,
            pow_target_spacing: 150,
            pow_allow_min_difficulty_blocks_after_height: None,
            upgrades: upgrade_table([
                NetworkUpgrade::always(170_002),
                NetworkUpgrade::never(170_002),
                NetworkUpgrade::at(170_005, 347_500),
                NetworkUpgrade::at(170_007, 419_200),
            ]),
            minimum_chain_work: uint("0x00"),
        })
    }

    /// Create consensus params for testnet
    pub fn testnet() -> Self {
        Self::checked(Self {
            network: NetworkId::Testnet,
            hash_genesis_block: hash(
                "16673b94492f6882bacf8309f627301d509c88cbb63858ddd116c586bd39c2fa",
            ),
            coinbase_must_be_protected: true,
            subsidy_slow_start_interval: 20_000,
            subsidy_halving_interval: 840_000,
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 400,
            pow_limit: uint("07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
            pow_averaging_window: 17,
            pow_max_adjust_down: 32,
            pow_max_adjust_up: 16,
            pow_target_spacing: 150,
            pow_allow_min_difficulty_blocks_after_height: Some(299_187),
            upgrades: upgrade_table([
                NetworkUpgrade::always(170_002),
                NetworkUpgrade::never(170_002),
                NetworkUpgrade::at(170_003, 207_500),
                NetworkUpgrade::at(170_007, 280_000),
            ]),
            minimum_chain_work: uint("0x00"),
        })
    }

    /// Create consensus params for regtest
    pub fn regtest() -> Self {
        Self::checked(Self {
            network: NetworkId::Regtest,
            hash_genesis_block: hash(
                "92e6771d258e6b47a678169799c89867a8d23e097c2cb8859133894b6d2ad2ad",
            ),
            coinbase_must_be_protected: false,
            subsidy_slow_start_interval: 0,
            subsidy_halving_interval: 150, // Fast halvings for testing
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1_000,
            pow_limit: uint("0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f"),
            pow_averaging_window: 17,
            pow_max_adjust_down: 0, // Turn off adjustment down
            pow_max_adjust_up: 0,   // Turn off adjustment up
            pow_target_spacing: 150,
            pow_allow_min_difficulty_blocks_after_height: Some(0),
            upgrades: upgrade_table([
                NetworkUpgrade::always(170_002),
                NetworkUpgrade::never(170_002),
                NetworkUpgrade::never(170_003),
                NetworkUpgrade::never(170_006),
            ]),
            minimum_chain_work: uint("0x00"),
        })
    }

    /// Get consensus params by network
    pub fn from_network(network: NetworkId) -> Self {
        match network {
            NetworkId::Main => Self::mainnet(),
            NetworkId::Testnet => Self::testnet(),
            NetworkId::Regtest => Self::regtest(),
        }
    }

    fn checked(params: Self) -> Self {
        assert!(
            params.pow_limit_fits_averaging_window(),
            "{} pow limit too large for its averaging window",
            params.network
        );
        params
    }

    /// Whether `MAX / pow_limit >= pow_averaging_window`, so the sum of the
    /// targets in one averaging window cannot overflow.
    pub fn pow_limit_fits_averaging_window(&self) -> bool {
        self.pow_limit
            .checked_mul_u64(u64::from(self.pow_averaging_window))
            .is_some()
    }

    /// Height offset introduced by the slow-start ramp.
    pub fn subsidy_slow_start_shift(&self) -> u32 {
        self.subsidy_slow_start_interval / 2
    }

    /// Last block height that pays a founders reward.
    ///
    /// Zero when the halving interval and slow-start shift are both zero.
    pub fn last_founders_reward_block_height(&self) -> u32 {
        self.subsidy_halving_interval
            .saturating_add(self.subsidy_slow_start_shift())
            .saturating_sub(1)
    }

    /// Seconds covered by one difficulty averaging window.
    pub fn averaging_window_timespan(&self) -> i64 {
        i64::from(self.pow_averaging_window) * self.pow_target_spacing
    }

    /// Shortest timespan the difficulty adjustment accepts.
    pub fn min_actual_timespan(&self) -> i64 {
        (self.averaging_window_timespan() * (100 - self.pow_max_adjust_up)) / 100
    }

    /// Longest timespan the difficulty adjustment accepts.
    pub fn max_actual_timespan(&self) -> i64 {
        (self.averaging_window_timespan() * (100 + self.pow_max_adjust_down)) / 100
    }

    /// Whether an upgrade is active at `height`.
    pub fn network_upgrade_active(&self, height: u32, idx: UpgradeIndex) -> bool {
        self.upgrades.is_activated(idx, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrades::ActivationHeight;

    #[test]
    fn test_mainnet_consensus() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.pow_target_spacing, 150);
        assert!(params.coinbase_must_be_protected);
        assert_eq!(params.last_founders_reward_block_height(), 840_000);
        assert_eq!(
            params.upgrades.activation_height(UpgradeIndex::Sapling),
            ActivationHeight::Height(419_200)
        );
    }

    #[test]
    fn test_last_founders_reward_height() {
        assert_eq!(ConsensusParams::testnet().last_founders_reward_block_height(), 849_999);
        assert_eq!(ConsensusParams::regtest().last_founders_reward_block_height(), 149);
    }

    #[test]
    fn test_last_founders_reward_height_without_subsidy_schedule() {
        let mut params = ConsensusParams::regtest();
        params.subsidy_halving_interval = 0;
        params.subsidy_slow_start_interval = 0;
        assert_eq!(params.last_founders_reward_block_height(), 0);

        params.subsidy_halving_interval = u32::MAX;
        params.subsidy_slow_start_interval = 20_000;
        assert_eq!(params.last_founders_reward_block_height(), u32::MAX - 1);
    }

    #[test]
    fn test_timespans() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.averaging_window_timespan(), 17 * 150);
        assert_eq!(params.min_actual_timespan(), (2550 * 84) / 100);
        assert_eq!(params.max_actual_timespan(), (2550 * 132) / 100);

        let regtest = ConsensusParams::regtest();
        assert_eq!(regtest.min_actual_timespan(), regtest.averaging_window_timespan());
    }

    #[test]
    fn test_pow_limits_fit() {
        for network in NetworkId::ALL {
            assert!(ConsensusParams::from_network(network).pow_limit_fits_averaging_window());
        }

        let mut params = ConsensusParams::regtest();
        params.pow_limit = Uint256::MAX;
        assert!(!params.pow_limit_fits_averaging_window());
    }

    #[test]
    fn test_upgrade_protocol_versions() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.upgrades.protocol_version_at(347_499), 170_002);
        assert_eq!(params.upgrades.protocol_version_at(347_500), 170_005);
        assert_eq!(params.upgrades.protocol_version_at(419_200), 170_007);
        assert!(params.network_upgrade_active(419_200, UpgradeIndex::Overwinter));
    }
}
