//! Founders-reward address rotation
//!
//! The founders reward is paid to a fixed, ordered list of 2-of-3 multisig
//! addresses. Over the reward window `[1, last_reward_height]` the list is
//! walked in equal steps of `(last_reward_height + n) / n` blocks; the last
//! address absorbs the remainder.

use crate::address::{Base58Prefixes, Destination};
use crate::script::Script;
use crate::{Error, Result};

/// Rotation schedule over the founders-reward addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundersRewardSchedule {
    addresses: Vec<String>,
    last_reward_height: u32,
}

impl FoundersRewardSchedule {
    /// Build a schedule; the list must be non-empty and no longer than the
    /// reward window.
    pub fn new<I, S>(addresses: I, last_reward_height: u32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses: Vec<String> = addresses.into_iter().map(Into::into).collect();
        if addresses.is_empty() {
            return Err(Error::EmptyFoundersAddresses);
        }
        if addresses.len() > last_reward_height as usize {
            return Err(Error::TooManyFoundersAddresses {
                count: addresses.len(),
                last_reward_height,
            });
        }
        Ok(Self {
            addresses,
            last_reward_height,
        })
    }

    /// Last height that pays a founders reward.
    pub fn last_reward_height(&self) -> u32 {
        self.last_reward_height
    }

    /// Number of addresses in the rotation.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Always false; construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// All addresses in rotation order.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Blocks each address serves before the next one takes over.
    ///
    /// Wider than a height: one address over a window ending at `u32::MAX`
    /// serves `2^32` blocks.
    pub fn change_interval(&self) -> u64 {
        let count = self.addresses.len() as u64;
        (u64::from(self.last_reward_height) + count) / count
    }

    /// Position in the list that receives the reward at `height`.
    pub fn index_at_height(&self, height: u32) -> Result<usize> {
        if height == 0 || height > self.last_reward_height {
            return Err(Error::HeightOutOfRange {
                height,
                max: self.last_reward_height,
            });
        }
        Ok((u64::from(height) / self.change_interval()) as usize)
    }

    /// Address that receives the reward at `height`.
    pub fn address_at_height(&self, height: u32) -> Result<&str> {
        let index = self.index_at_height(height)?;
        Ok(&self.addresses[index])
    }

    /// Address at a position in the list.
    pub fn address_at_index(&self, index: usize) -> Result<&str> {
        self.addresses
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.addresses.len(),
            })
    }

    /// Output script that must receive the reward at `height`.
    ///
    /// A height outside the reward window is an error. An address that does
    /// not decode to a pay-to-script-hash destination means the built-in
    /// list is corrupt, and panics.
    pub fn script_at_height(&self, height: u32, prefixes: &Base58Prefixes) -> Result<Script> {
        let address = self.address_at_height(height)?;
        let destination = match Destination::decode(address, prefixes) {
            Ok(destination) => destination,
            Err(e) => {
                tracing::error!("Founders reward address {} does not decode: {}", address, e);
                panic!("invalid founders reward address {}: {}", address, e);
            }
        };
        match destination.p2sh_script() {
            Some(script) => Ok(script),
            None => {
                tracing::error!("Founders reward address {} is not pay-to-script-hash", address);
                panic!("founders reward address {} is not a script hash", address);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ChainParams;

    fn four() -> FoundersRewardSchedule {
        FoundersRewardSchedule::new(["A0", "A1", "A2", "A3"], 100).unwrap()
    }

    #[test]
    fn test_rotation_cadence() {
        let schedule = four();
        assert_eq!(schedule.change_interval(), 26);
        assert_eq!(schedule.address_at_height(1).unwrap(), "A0");
        assert_eq!(schedule.address_at_height(25).unwrap(), "A0");
        assert_eq!(schedule.address_at_height(26).unwrap(), "A1");
        assert_eq!(schedule.address_at_height(78).unwrap(), "A3");
        assert_eq!(schedule.address_at_height(99).unwrap(), "A3");
        assert_eq!(schedule.address_at_height(100).unwrap(), "A3");
    }

    #[test]
    fn test_height_out_of_range() {
        let schedule = four();
        assert!(matches!(
            schedule.address_at_height(0),
            Err(Error::HeightOutOfRange { height: 0, max: 100 })
        ));
        assert!(matches!(
            schedule.address_at_height(101),
            Err(Error::HeightOutOfRange { height: 101, max: 100 })
        ));
    }

    #[test]
    fn test_address_at_index() {
        let schedule = four();
        assert_eq!(schedule.address_at_index(0).unwrap(), "A0");
        assert_eq!(schedule.address_at_index(3).unwrap(), "A3");
        assert!(matches!(
            schedule.address_at_index(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_construction_checks() {
        assert!(matches!(
            FoundersRewardSchedule::new(Vec::<String>::new(), 100),
            Err(Error::EmptyFoundersAddresses)
        ));
        assert!(matches!(
            FoundersRewardSchedule::new(["A0", "A1", "A2"], 2),
            Err(Error::TooManyFoundersAddresses {
                count: 3,
                last_reward_height: 2
            })
        ));
        assert!(FoundersRewardSchedule::new(["A0", "A1"], 2).is_ok());
    }

    #[test]
    fn test_single_address_covers_window() {
        let schedule = FoundersRewardSchedule::new(["only"], 149).unwrap();
        assert_eq!(schedule.change_interval(), 150);
        assert_eq!(schedule.address_at_height(149).unwrap(), "only");
    }

    #[test]
    fn test_window_ending_at_max_height() {
        let single = FoundersRewardSchedule::new(["only"], u32::MAX).unwrap();
        assert_eq!(single.change_interval(), 1 << 32);
        assert_eq!(single.address_at_height(1).unwrap(), "only");
        assert_eq!(single.address_at_height(u32::MAX).unwrap(), "only");

        let pair = FoundersRewardSchedule::new(["A0", "A1"], u32::MAX).unwrap();
        assert_eq!(pair.change_interval(), 1 << 31);
        assert_eq!(pair.index_at_height((1 << 31) - 1).unwrap(), 0);
        assert_eq!(pair.index_at_height(1 << 31).unwrap(), 1);
        assert_eq!(pair.index_at_height(u32::MAX).unwrap(), 1);
    }

    #[test]
    fn test_testnet_script() {
        let params = ChainParams::testnet();
        let script = params
            .founders_reward()
            .script_at_height(1, params.base58_prefixes())
            .unwrap();
        assert!(script.is_p2sh());
        assert_eq!(
            hex::encode(script.as_bytes()),
            "a914ef775f1f997f122a062fff1a2d7443abd1f9c64287"
        );
    }

    #[test]
    #[should_panic(expected = "not a script hash")]
    fn test_pubkey_hash_founders_address_is_fatal() {
        let params = ChainParams::testnet();
        let schedule =
            FoundersRewardSchedule::new(["tm9iNYCVAhLLa4rJtfqqHauR5xL1REdpiDs"], 10).unwrap();
        let _ = schedule.script_at_height(5, params.base58_prefixes());
    }

    #[test]
    fn test_script_height_out_of_range_is_recoverable() {
        let params = ChainParams::regtest();
        let result = params
            .founders_reward()
            .script_at_height(150, params.base58_prefixes());
        assert!(matches!(result, Err(Error::HeightOutOfRange { .. })));
    }
}
