//! Genesis block reconstruction
//!
//! Every network's genesis block is rebuilt from a handful of values at
//! startup and its hashes compared against the pinned constants. Only the
//! serialization needed for hashing lives here.

use crate::hash::{sha256d, BlockHash};
use crate::script::{Script, OP_CHECKSIG};

/// Headline embedded in the genesis coinbase.
pub const GENESIS_TIMESTAMP: &str =
    "AMICoin39457390876347628943763094645096870782348718746528354309546801";

/// Uncompressed public key paid by the genesis coinbase.
pub const GENESIS_OUTPUT_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Leading number pushed by the genesis coinbase script.
const GENESIS_SCRIPT_SIG_NUMBER: i64 = 520_617_983;

/// Values the genesis block of one network is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisDescriptor {
    /// Block timestamp
    pub time: u32,
    /// 256-bit equihash nonce
    pub nonce: BlockHash,
    /// Equihash solution bytes
    pub solution: Vec<u8>,
    /// Compact difficulty target
    pub bits: u32,
    /// Block version
    pub version: i32,
    /// Coinbase output value
    pub reward: i64,
}

/// Hashes produced by building a genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisHashes {
    /// Block hash
    pub hash: BlockHash,
    /// Merkle root (the coinbase txid)
    pub merkle_root: BlockHash,
}

/// Builds a genesis block from its descriptor.
pub trait GenesisBuilder {
    /// Hash the block described by `descriptor`.
    fn build(&self, descriptor: &GenesisDescriptor) -> GenesisHashes;
}

/// Builder using double SHA-256 over the block serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256dGenesisBuilder;

impl Sha256dGenesisBuilder {
    fn coinbase_script_sig() -> Script {
        Script::new()
            .push_scriptnum(GENESIS_SCRIPT_SIG_NUMBER)
            .push_slice(&[4])
            .push_slice(GENESIS_TIMESTAMP.as_bytes())
    }

    fn coinbase_script_pubkey() -> Script {
        let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY).expect("built-in genesis pubkey");
        Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG)
    }

    fn coinbase_transaction(reward: i64) -> Vec<u8> {
        let script_sig = Self::coinbase_script_sig();
        let script_pubkey = Self::coinbase_script_pubkey();

        let mut tx = Vec::with_capacity(256);
        tx.extend_from_slice(&1i32.to_le_bytes());
        write_compact_size(&mut tx, 1);
        // Null prevout
        tx.extend_from_slice(&[0u8; 32]);
        tx.extend_from_slice(&u32::MAX.to_le_bytes());
        write_compact_size(&mut tx, script_sig.len() as u64);
        tx.extend_from_slice(script_sig.as_bytes());
        tx.extend_from_slice(&u32::MAX.to_le_bytes());
        write_compact_size(&mut tx, 1);
        tx.extend_from_slice(&reward.to_le_bytes());
        write_compact_size(&mut tx, script_pubkey.len() as u64);
        tx.extend_from_slice(script_pubkey.as_bytes());
        // Lock time
        tx.extend_from_slice(&0u32.to_le_bytes());
        tx
    }
}

impl GenesisBuilder for Sha256dGenesisBuilder {
    fn build(&self, descriptor: &GenesisDescriptor) -> GenesisHashes {
        let merkle_root = BlockHash::from_bytes(sha256d(&Self::coinbase_transaction(
            descriptor.reward,
        )));

        let mut header = Vec::with_capacity(140 + 3 + descriptor.solution.len());
        header.extend_from_slice(&descriptor.version.to_le_bytes());
        header.extend_from_slice(BlockHash::ZERO.as_bytes());
        header.extend_from_slice(merkle_root.as_bytes());
        // Reserved field
        header.extend_from_slice(&[0u8; 32]);
        header.extend_from_slice(&descriptor.time.to_le_bytes());
        header.extend_from_slice(&descriptor.bits.to_le_bytes());
        header.extend_from_slice(descriptor.nonce.as_bytes());
        write_compact_size(&mut header, descriptor.solution.len() as u64);
        header.extend_from_slice(&descriptor.solution);

        GenesisHashes {
            hash: BlockHash::from_bytes(sha256d(&header)),
            merkle_root,
        }
    }
}

fn write_compact_size(out: &mut Vec<u8>, value: u64) {
    match value {
        0..=0xfc => out.push(value as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}
