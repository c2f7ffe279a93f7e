//! Network upgrade activation
//!
//! Maps a block height to the protocol era whose rules apply there. Each
//! network carries one [`UpgradeTable`]; queries are pure functions of the
//! height and the table contents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of known network upgrades, including the base era.
pub const MAX_NETWORK_UPGRADES: usize = 4;

/// Protocol eras in deployment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpgradeIndex {
    /// Launch rules, active from genesis
    BaseSprout = 0,
    /// Placeholder upgrade used by tests
    TestDummy = 1,
    /// Overwinter
    Overwinter = 2,
    /// Sapling
    Sapling = 3,
}

impl UpgradeIndex {
    /// Every upgrade, lowest index first.
    pub const ALL: [UpgradeIndex; MAX_NETWORK_UPGRADES] = [
        UpgradeIndex::BaseSprout,
        UpgradeIndex::TestDummy,
        UpgradeIndex::Overwinter,
        UpgradeIndex::Sapling,
    ];

    /// Position in the upgrade table.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Consensus branch id committed to by transactions in this era.
    pub const fn branch_id(self) -> u32 {
        match self {
            UpgradeIndex::BaseSprout => 0,
            UpgradeIndex::TestDummy => 0x7473_6554,
            UpgradeIndex::Overwinter => 0x5ba8_1b19,
            UpgradeIndex::Sapling => 0x76b8_09bb,
        }
    }
}

impl fmt::Display for UpgradeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UpgradeIndex::BaseSprout => "Sprout",
            UpgradeIndex::TestDummy => "Test dummy",
            UpgradeIndex::Overwinter => "Overwinter",
            UpgradeIndex::Sapling => "Sapling",
        })
    }
}

/// When an upgrade takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationHeight {
    /// Active from genesis
    Always,
    /// Active at and above this height
    Height(u32),
    /// Not scheduled
    Never,
}

impl ActivationHeight {
    /// Height the upgrade is active from, if it is ever active.
    pub const fn effective_height(self) -> Option<u32> {
        match self {
            ActivationHeight::Always => Some(0),
            ActivationHeight::Height(height) => Some(height),
            ActivationHeight::Never => None,
        }
    }
}

impl fmt::Display for ActivationHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationHeight::Always => f.write_str("always"),
            ActivationHeight::Height(height) => write!(f, "{}", height),
            ActivationHeight::Never => f.write_str("never"),
        }
    }
}

/// One entry of the upgrade table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkUpgrade {
    /// Minimum peer protocol version once active
    pub protocol_version: u32,
    /// Activation schedule
    pub activation_height: ActivationHeight,
}

impl NetworkUpgrade {
    /// Entry that is active from genesis.
    pub const fn always(protocol_version: u32) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::Always,
        }
    }

    /// Entry that activates at `height`.
    pub const fn at(protocol_version: u32, height: u32) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::Height(height),
        }
    }

    /// Entry that is not scheduled.
    pub const fn never(protocol_version: u32) -> Self {
        Self {
            protocol_version,
            activation_height: ActivationHeight::Never,
        }
    }
}

/// Activation schedule of every upgrade on one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeTable {
    upgrades: [NetworkUpgrade; MAX_NETWORK_UPGRADES],
}

impl UpgradeTable {
    /// Build a table, rejecting a base era that is not always active and
    /// scheduled heights that are out of deployment order.
    pub fn new(upgrades: [NetworkUpgrade; MAX_NETWORK_UPGRADES]) -> Result<Self> {
        validate(&upgrades)?;
        Ok(Self { upgrades })
    }

    /// Entry for an upgrade.
    pub fn get(&self, idx: UpgradeIndex) -> &NetworkUpgrade {
        &self.upgrades[idx.as_usize()]
    }

    /// Stored activation schedule for an upgrade.
    pub fn activation_height(&self, idx: UpgradeIndex) -> ActivationHeight {
        self.get(idx).activation_height
    }

    /// Whether the upgrade's rules apply at `height`.
    pub fn is_activated(&self, idx: UpgradeIndex, height: u32) -> bool {
        match self.activation_height(idx).effective_height() {
            Some(activation) => height >= activation,
            None => false,
        }
    }

    /// Whether `height` is exactly the first block of the upgrade.
    pub fn is_activation_height(&self, idx: UpgradeIndex, height: u32) -> bool {
        // Genesis never counts as an upgrade boundary.
        idx != UpgradeIndex::BaseSprout
            && self.activation_height(idx).effective_height() == Some(height)
    }

    /// Era in effect at `height`.
    pub fn current_epoch(&self, height: u32) -> UpgradeIndex {
        UpgradeIndex::ALL
            .iter()
            .rev()
            .copied()
            .find(|idx| self.is_activated(*idx, height))
            .unwrap_or(UpgradeIndex::BaseSprout)
    }

    /// Minimum protocol version in effect at `height`.
    pub fn protocol_version_at(&self, height: u32) -> u32 {
        self.get(self.current_epoch(height)).protocol_version
    }

    /// Consensus branch id in effect at `height`.
    pub fn current_epoch_branch_id(&self, height: u32) -> u32 {
        self.current_epoch(height).branch_id()
    }

    /// First scheduled era that is not yet active at `height`.
    pub fn next_epoch(&self, height: u32) -> Option<UpgradeIndex> {
        UpgradeIndex::ALL.iter().copied().skip(1).find(|idx| {
            matches!(self.activation_height(*idx), ActivationHeight::Height(h) if h > height)
        })
    }

    /// Activation height of [`next_epoch`](Self::next_epoch).
    pub fn next_activation_height(&self, height: u32) -> Option<u32> {
        self.next_epoch(height)
            .and_then(|idx| self.activation_height(idx).effective_height())
    }

    /// Iterate over every upgrade and its entry.
    pub fn iter(&self) -> impl Iterator<Item = (UpgradeIndex, &NetworkUpgrade)> {
        UpgradeIndex::ALL.iter().copied().zip(self.upgrades.iter())
    }

    /// Replace the activation heights of several upgrades as one change.
    ///
    /// The caller must hold exclusive access; this is only reachable through
    /// the regtest mutation path before any validation work starts. Touching
    /// the base era panics. A result that breaks deployment order is
    /// rejected and the table is left unchanged.
    pub(crate) fn set_activation_heights(
        &mut self,
        changes: &[(UpgradeIndex, ActivationHeight)],
    ) -> Result<()> {
        let mut updated = self.upgrades;
        for (idx, height) in changes {
            assert!(
                *idx > UpgradeIndex::BaseSprout,
                "the base era activation height cannot be changed"
            );
            updated[idx.as_usize()].activation_height = *height;
        }
        validate(&updated)?;
        self.upgrades = updated;
        Ok(())
    }
}

fn validate(upgrades: &[NetworkUpgrade; MAX_NETWORK_UPGRADES]) -> Result<()> {
    if upgrades[UpgradeIndex::BaseSprout.as_usize()].activation_height != ActivationHeight::Always {
        return Err(Error::BaseEraNotAlwaysActive);
    }

    let mut highest: Option<(UpgradeIndex, u32)> = None;
    for (idx, upgrade) in UpgradeIndex::ALL.iter().zip(upgrades.iter()) {
        if let ActivationHeight::Height(height) = upgrade.activation_height {
            if let Some((earlier, earlier_height)) = highest {
                if height < earlier_height {
                    return Err(Error::NonMonotonicUpgrades {
                        earlier,
                        earlier_height,
                        later: *idx,
                        later_height: height,
                    });
                }
            }
            highest = Some((*idx, height));
        }
    }
    Ok(())
}
