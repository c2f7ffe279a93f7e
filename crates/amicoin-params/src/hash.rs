//! 256-bit hash and integer values
//!
//! Values are stored in internal (little-endian) byte order and written in
//! the reversed big-endian hex that node tooling prints, so a hash read from
//! `"0003b0bd..."` displays as the same string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Double SHA-256 of `data`, in internal byte order.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

fn parse_reversed_hex(input: &str) -> Result<[u8; 32]> {
    let mut digits = input.trim();
    if let Some(stripped) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        digits = stripped;
    }
    if digits.is_empty() || digits.len() > 64 {
        return Err(Error::InvalidHex(input.to_string()));
    }

    let padded = format!("{:0>64}", digits);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|_| Error::InvalidHex(input.to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

fn write_reversed_hex(bytes: &[u8; 32], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for byte in bytes.iter().rev() {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// A block (or transaction) hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    /// The all-zero hash used as the genesis block's parent.
    pub const ZERO: BlockHash = BlockHash([0u8; 32]);

    /// Wrap bytes given in internal order.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse display-order hex, accepting a `0x` prefix and short values.
    pub fn from_hex(input: &str) -> Result<Self> {
        parse_reversed_hex(input).map(Self)
    }

    /// Bytes in internal order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reversed_hex(&self.0, f)
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self)
    }
}

impl FromStr for BlockHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        BlockHash::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// Unsigned 256-bit integer, used for the proof-of-work limit and the
/// minimum chain work.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// Zero.
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    /// `2^256 - 1`.
    pub const MAX: Uint256 = Uint256([0xff; 32]);

    /// Parse big-endian hex, accepting a `0x` prefix and short values.
    pub fn from_hex(input: &str) -> Result<Self> {
        parse_reversed_hex(input).map(Self)
    }

    /// Little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// `self * rhs`, or `None` when the product does not fit in 256 bits.
    pub fn checked_mul_u64(&self, rhs: u64) -> Option<Uint256> {
        let mut out = [0u8; 32];
        let mut carry: u128 = 0;
        for (i, byte) in self.0.iter().enumerate() {
            let product = (*byte as u128) * (rhs as u128) + carry;
            out[i] = (product & 0xff) as u8;
            carry = product >> 8;
        }
        if carry == 0 {
            Some(Uint256(out))
        } else {
            None
        }
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reversed_hex(&self.0, f)
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", self)
    }
}
