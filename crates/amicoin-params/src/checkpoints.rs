//! Blockchain checkpoints for reorg protection and sync progress

use serde::{Deserialize, Serialize};

use crate::hash::BlockHash;
use crate::{Error, Result};

/// Blocks whose timestamps make up a median time.
const MEDIAN_TIME_SPAN: i64 = 11;

/// Relative cost of verifying a transaction after the last checkpoint,
/// where signatures are checked, against one before it.
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// A blockchain checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Block height
    pub height: u32,
    /// Block hash
    pub hash: BlockHash,
}

/// Chain statistics recorded alongside the last checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointStats {
    /// Timestamp (Unix epoch) of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint
    pub transactions_before_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub estimated_tx_per_day: f64,
}

/// Outcome of checking a block against the checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointVerdict {
    /// Height is pinned and the hash matches
    Match,
    /// Height is pinned to a different hash
    Mismatch,
    /// Height is not pinned
    NoOpinion,
}

impl CheckpointVerdict {
    /// Whether the block may be accepted as far as checkpoints go.
    pub fn is_acceptable(self) -> bool {
        !matches!(self, CheckpointVerdict::Mismatch)
    }
}

/// Ordered checkpoints for one network
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointStore {
    checkpoints: Vec<Checkpoint>,
    stats: CheckpointStats,
}

impl CheckpointStore {
    /// Create a checkpoint store; entries must start at genesis and have
    /// strictly increasing heights.
    pub fn new(checkpoints: Vec<Checkpoint>, stats: CheckpointStats) -> Result<Self> {
        match checkpoints.first() {
            Some(first) if first.height == 0 => {}
            _ => return Err(Error::MissingGenesisCheckpoint),
        }
        for pair in checkpoints.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(Error::UnorderedCheckpoints {
                    previous: pair[0].height,
                    next: pair[1].height,
                });
            }
        }
        Ok(Self { checkpoints, stats })
    }

    /// Check a candidate block hash at `height`.
    pub fn verify(&self, height: u32, candidate: &BlockHash) -> CheckpointVerdict {
        match self.get(height) {
            None => CheckpointVerdict::NoOpinion,
            Some(pinned) if pinned == candidate => CheckpointVerdict::Match,
            Some(pinned) => {
                tracing::warn!(
                    "Checkpoint mismatch at height {}: expected {}, got {}",
                    height,
                    pinned,
                    candidate
                );
                CheckpointVerdict::Mismatch
            }
        }
    }

    /// Pinned hash at exactly `height`.
    pub fn get(&self, height: u32) -> Option<&BlockHash> {
        self.checkpoints
            .binary_search_by_key(&height, |cp| cp.height)
            .ok()
            .map(|i| &self.checkpoints[i].hash)
    }

    /// Get checkpoint at or before given height
    pub fn checkpoint_at_or_below(&self, height: u32) -> &Checkpoint {
        self.checkpoints
            .iter()
            .rev()
            .find(|cp| cp.height <= height)
            .unwrap_or(&self.checkpoints[0])
    }

    /// Get all checkpoints
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Iterate in height order
    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.checkpoints.iter()
    }

    /// Get latest checkpoint
    pub fn last_checkpoint(&self) -> &Checkpoint {
        // Construction guarantees the genesis entry.
        &self.checkpoints[self.checkpoints.len() - 1]
    }

    /// Height of the last checkpoint, the lower bound of the chain length.
    pub fn total_blocks_estimate(&self) -> u32 {
        self.last_checkpoint().height
    }

    /// Statistics recorded with the last checkpoint
    pub fn stats(&self) -> &CheckpointStats {
        &self.stats
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty; never true once constructed
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Estimate the height the network has reached, using the wall clock.
    ///
    /// For progress display only, never for consensus.
    pub fn estimate_network_height(
        &self,
        tip_height: u32,
        tip_median_time: i64,
        genesis_time: i64,
        target_spacing: i64,
    ) -> u32 {
        let now = chrono::Utc::now().timestamp();
        self.estimate_network_height_at(tip_height, tip_median_time, genesis_time, target_spacing, now)
    }

    /// Estimate the height the network has reached at time `now`.
    ///
    /// The observed block spacing around the last checkpoint is averaged with
    /// the target spacing and extrapolated from the tip's median time. The
    /// result is rounded to the nearest ten and never below `tip_height`.
    pub fn estimate_network_height_at(
        &self,
        tip_height: u32,
        tip_median_time: i64,
        genesis_time: i64,
        target_spacing: i64,
        now: i64,
    ) -> u32 {
        let last = self.last_checkpoint();
        let checkpoint_height = i64::from(last.height);
        let checkpoint_time = self.stats.last_checkpoint_time;
        let tip = i64::from(tip_height);

        // Height of the block whose time is the tip's median time.
        let median_height = if tip > MEDIAN_TIME_SPAN {
            tip - (1 + (MEDIAN_TIME_SPAN - 1) / 2)
        } else {
            tip / 2
        };

        let observed_spacing = if median_height > checkpoint_height {
            Some((tip_median_time - checkpoint_time) as f64 / (median_height - checkpoint_height) as f64)
        } else if checkpoint_height > 0 {
            Some((checkpoint_time - genesis_time) as f64 / checkpoint_height as f64)
        } else {
            None
        };

        let target = target_spacing as f64;
        let average_spacing = match observed_spacing {
            Some(spacing) if spacing > 0.0 => (target + spacing) / 2.0,
            _ => target,
        };
        if average_spacing <= 0.0 {
            return tip_height;
        }

        let estimate = (median_height as f64 + (now - tip_median_time) as f64 / average_spacing) as i64;
        let rounded = ((estimate + 5) / 10) * 10;
        tracing::debug!(
            "Estimated network height {} from tip {} (spacing {:.1}s)",
            rounded,
            tip_height,
            average_spacing
        );

        rounded.clamp(tip, i64::from(u32::MAX)) as u32
    }

    /// Fraction of total verification work done once the chain holds
    /// `chain_tx` transactions and its tip was mined at `tip_time`.
    ///
    /// Work after the last checkpoint is weighted by the cost of checking
    /// signatures.
    pub fn guess_verification_progress(&self, chain_tx: u64, tip_time: i64, now: i64) -> f64 {
        let stats = &self.stats;
        let per_day = stats.estimated_tx_per_day;

        let (work_before, work_after) = if chain_tx <= stats.transactions_before_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (stats.transactions_before_checkpoint - chain_tx) as f64;
            let expensive_after = (now - stats.last_checkpoint_time) as f64 / 86_400.0 * per_day;
            (cheap_before, cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR)
        } else {
            let cheap_before = stats.transactions_before_checkpoint as f64;
            let expensive_before = (chain_tx - stats.transactions_before_checkpoint) as f64;
            let expensive_after = (now - tip_time) as f64 / 86_400.0 * per_day;
            (
                cheap_before + expensive_before * SIGCHECK_VERIFICATION_FACTOR,
                expensive_after * SIGCHECK_VERIFICATION_FACTOR,
            )
        };

        let total = work_before + work_after.max(0.0);
        if total <= 0.0 {
            return 0.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ChainParams;

    const TESTNET_CHECKPOINT_TIME: i64 = 1_486_897_419;
    const TESTNET_GENESIS_TIME: i64 = 1_477_648_033;

    fn hash(text: &str) -> BlockHash {
        BlockHash::from_hex(text).unwrap()
    }

    fn empty_stats() -> CheckpointStats {
        CheckpointStats {
            last_checkpoint_time: 0,
            transactions_before_checkpoint: 0,
            estimated_tx_per_day: 0.0,
        }
    }

    #[test]
    fn test_testnet_checkpoints() {
        let params = ChainParams::testnet();
        let checkpoints = params.checkpoints();
        assert_eq!(checkpoints.len(), 2);
        assert_eq!(checkpoints.last_checkpoint().height, 38_000);
        assert_eq!(checkpoints.total_blocks_estimate(), 38_000);
        assert_eq!(checkpoints.get(0), Some(&params.consensus().hash_genesis_block));
        let heights: Vec<u32> = checkpoints.iter().map(|cp| cp.height).collect();
        assert_eq!(heights, vec![0, 38_000]);
    }

    #[test]
    fn test_verify() {
        let params = ChainParams::testnet();
        let checkpoints = params.checkpoints();
        let pinned = hash("001e9a2d2e2892b88e9998cf7b079b41d59dd085423a921fe8386cecc42287b8");
        let other = hash("0x01");

        assert_eq!(checkpoints.verify(38_000, &pinned), CheckpointVerdict::Match);
        assert_eq!(checkpoints.verify(38_000, &other), CheckpointVerdict::Mismatch);
        assert_eq!(checkpoints.verify(37_999, &other), CheckpointVerdict::NoOpinion);
        assert!(!CheckpointVerdict::Mismatch.is_acceptable());
        assert!(CheckpointVerdict::NoOpinion.is_acceptable());
    }

    #[test]
    fn test_checkpoint_at_or_below() {
        let checkpoints = ChainParams::testnet().checkpoints().clone();
        assert_eq!(checkpoints.checkpoint_at_or_below(37_999).height, 0);
        assert_eq!(checkpoints.checkpoint_at_or_below(38_000).height, 38_000);
        assert_eq!(checkpoints.checkpoint_at_or_below(u32::MAX).height, 38_000);
    }

    #[test]
    fn test_construction_checks() {
        let genesis = Checkpoint {
            height: 0,
            hash: hash("0x01"),
        };
        let later = Checkpoint {
            height: 10,
            hash: hash("0x02"),
        };

        assert!(matches!(
            CheckpointStore::new(vec![], empty_stats()),
            Err(Error::MissingGenesisCheckpoint)
        ));
        assert!(matches!(
            CheckpointStore::new(vec![later], empty_stats()),
            Err(Error::MissingGenesisCheckpoint)
        ));
        assert!(matches!(
            CheckpointStore::new(vec![genesis, later, later], empty_stats()),
            Err(Error::UnorderedCheckpoints {
                previous: 10,
                next: 10
            })
        ));
        assert!(CheckpointStore::new(vec![genesis, later], empty_stats()).is_ok());
    }

    #[test]
    fn test_estimate_above_checkpoint() {
        let checkpoints = ChainParams::testnet().checkpoints().clone();
        // Blocks since the checkpoint arrived exactly on the 150s target.
        let tip_median_time = TESTNET_CHECKPOINT_TIME + (99_994 - 38_000) * 150;
        let now = tip_median_time + 1_000 * 150;

        let estimate = checkpoints.estimate_network_height_at(
            100_000,
            tip_median_time,
            TESTNET_GENESIS_TIME,
            150,
            now,
        );
        assert_eq!(estimate, 100_990);
    }

    #[test]
    fn test_estimate_never_below_tip() {
        let checkpoints = ChainParams::testnet().checkpoints().clone();
        let estimate = checkpoints.estimate_network_height_at(
            1_000,
            TESTNET_GENESIS_TIME + 150_000,
            TESTNET_GENESIS_TIME,
            150,
            TESTNET_GENESIS_TIME + 150_000,
        );
        assert_eq!(estimate, 1_000);
    }

    #[test]
    fn test_estimate_with_genesis_only() {
        let checkpoints = ChainParams::regtest().checkpoints().clone();
        let estimate = checkpoints.estimate_network_height_at(0, 1_000, 1_000, 150, 1_000 + 1_500);
        assert_eq!(estimate, 10);
    }

    #[test]
    fn test_estimate_with_zero_spacing() {
        let checkpoints = ChainParams::regtest().checkpoints().clone();
        assert_eq!(checkpoints.estimate_network_height_at(7, 0, 0, 0, 10_000), 7);
    }

    #[test]
    fn test_verification_progress() {
        let checkpoints = ChainParams::testnet().checkpoints().clone();
        let day_later = TESTNET_CHECKPOINT_TIME + 86_400;

        let at_checkpoint =
            checkpoints.guess_verification_progress(47_163, TESTNET_CHECKPOINT_TIME, day_later);
        let expected = 47_163.0 / (47_163.0 + 715.0 * 5.0);
        assert!((at_checkpoint - expected).abs() < 1e-9);

        let halfway = checkpoints.guess_verification_progress(20_000, 0, day_later);
        assert!(halfway < at_checkpoint);

        let caught_up = checkpoints.guess_verification_progress(60_000, day_later, day_later);
        assert!((caught_up - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_verification_progress_without_stats() {
        let checkpoints = ChainParams::regtest().checkpoints().clone();
        assert_eq!(checkpoints.guess_verification_progress(0, 0, 0), 0.0);
    }
}
