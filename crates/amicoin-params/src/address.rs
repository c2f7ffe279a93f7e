//! Address-encoding prefixes and transparent destinations
//!
//! The text codecs themselves live outside this crate; the parameter set only
//! stores the per-network prefixes and decodes transparent base58check
//! destinations far enough to build the founders-reward script.

use serde::{Deserialize, Serialize};

use crate::script::Script;
use crate::{Error, Result};

/// Kinds of base58check-encoded values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    /// Transparent pay-to-pubkey-hash address
    PubkeyAddress,
    /// Transparent pay-to-script-hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP-32 extended public key
    ExtPublicKey,
    /// BIP-32 extended private key
    ExtSecretKey,
    /// Sprout payment address
    ZcPaymentAddress,
    /// Sprout viewing key
    ZcViewingKey,
    /// Sprout spending key
    ZcSpendingKey,
}

/// Base58check version prefixes for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    /// "t1"/"tm" addresses
    pub pubkey_address: &'static [u8],
    /// "t3"/"t2" addresses
    pub script_address: &'static [u8],
    /// Private keys
    pub secret_key: &'static [u8],
    /// Extended public keys
    pub ext_public_key: &'static [u8],
    /// Extended private keys
    pub ext_secret_key: &'static [u8],
    /// "zc"/"zt" addresses
    pub zc_payment_address: &'static [u8],
    /// "ZiVK"/"ZiVt" viewing keys
    pub zc_viewing_key: &'static [u8],
    /// "SK"/"ST" spending keys
    pub zc_spending_key: &'static [u8],
}

impl Base58Prefixes {
    /// Prefix for a kind of value.
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
            Base58Type::ZcPaymentAddress => self.zc_payment_address,
            Base58Type::ZcViewingKey => self.zc_viewing_key,
            Base58Type::ZcSpendingKey => self.zc_spending_key,
        }
    }
}

/// Kinds of bech32-encoded Sapling values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bech32Type {
    /// Sapling payment address
    SaplingPaymentAddress,
    /// Sapling full viewing key
    SaplingFullViewingKey,
    /// Sapling incoming viewing key
    SaplingIncomingViewingKey,
    /// Sapling extended spending key
    SaplingExtendedSpendKey,
}

/// Bech32 human-readable parts for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Hrps {
    /// Payment address HRP
    pub sapling_payment_address: &'static str,
    /// Full viewing key HRP
    pub sapling_full_viewing_key: &'static str,
    /// Incoming viewing key HRP
    pub sapling_incoming_viewing_key: &'static str,
    /// Extended spending key HRP
    pub sapling_extended_spend_key: &'static str,
}

impl Bech32Hrps {
    /// HRP for a kind of value.
    pub fn get(&self, kind: Bech32Type) -> &'static str {
        match kind {
            Bech32Type::SaplingPaymentAddress => self.sapling_payment_address,
            Bech32Type::SaplingFullViewingKey => self.sapling_full_viewing_key,
            Bech32Type::SaplingIncomingViewingKey => self.sapling_incoming_viewing_key,
            Bech32Type::SaplingExtendedSpendKey => self.sapling_extended_spend_key,
        }
    }
}

/// A decoded transparent destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Pay to the hash of a public key
    PubkeyHash([u8; 20]),
    /// Pay to the hash of a script
    ScriptHash([u8; 20]),
}

impl Destination {
    /// Decode base58check text using a network's prefixes.
    pub fn decode(text: &str, prefixes: &Base58Prefixes) -> Result<Self> {
        let payload = bs58::decode(text)
            .with_check(None)
            .into_vec()
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", text, e)))?;

        let split = |prefix: &[u8]| -> Option<[u8; 20]> {
            let hash = payload.strip_prefix(prefix)?;
            hash.try_into().ok()
        };

        if let Some(hash) = split(prefixes.script_address) {
            Ok(Destination::ScriptHash(hash))
        } else if let Some(hash) = split(prefixes.pubkey_address) {
            Ok(Destination::PubkeyHash(hash))
        } else {
            Err(Error::InvalidAddress(format!(
                "{}: unknown prefix for this network",
                text
            )))
        }
    }

    /// Encode as base58check text using a network's prefixes.
    pub fn encode(&self, prefixes: &Base58Prefixes) -> String {
        let (prefix, hash) = match self {
            Destination::PubkeyHash(hash) => (prefixes.pubkey_address, hash),
            Destination::ScriptHash(hash) => (prefixes.script_address, hash),
        };
        let mut payload = Vec::with_capacity(prefix.len() + hash.len());
        payload.extend_from_slice(prefix);
        payload.extend_from_slice(hash);
        bs58::encode(payload).with_check().into_string()
    }

    /// Script hash, when this is a pay-to-script-hash destination.
    pub fn script_hash(&self) -> Option<&[u8; 20]> {
        match self {
            Destination::ScriptHash(hash) => Some(hash),
            Destination::PubkeyHash(_) => None,
        }
    }

    /// Output script paying to a script-hash destination.
    pub fn p2sh_script(&self) -> Option<Script> {
        self.script_hash().map(Script::p2sh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ChainParams;

    #[test]
    fn test_decode_script_address() {
        let params = ChainParams::testnet();
        let dest =
            Destination::decode("t2UNzUUx8mWBCRYPRezvA363EYXyEpHokyi", params.base58_prefixes())
                .unwrap();
        let expected = hex::decode("ef775f1f997f122a062fff1a2d7443abd1f9c642").unwrap();
        assert_eq!(dest.script_hash().map(|h| h.to_vec()), Some(expected));
    }

    #[test]
    fn test_decode_pubkey_address() {
        let params = ChainParams::testnet();
        let dest =
            Destination::decode("tm9iNYCVAhLLa4rJtfqqHauR5xL1REdpiDs", params.base58_prefixes())
                .unwrap();
        let mut expected = [0u8; 20];
        for (i, b) in expected.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(dest, Destination::PubkeyHash(expected));
        assert!(dest.p2sh_script().is_none());
    }

    #[test]
    fn test_wrong_network_prefix() {
        let main = ChainParams::main();
        let result = Destination::decode("t2UNzUUx8mWBCRYPRezvA363EYXyEpHokyi", main.base58_prefixes());
        assert!(matches!(result, Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_bad_checksum() {
        let params = ChainParams::testnet();
        let result = Destination::decode("t2UNzUUx8mWBCRYPRezvA363EYXyEpHokyj", params.base58_prefixes());
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_matches_decode() {
        let params = ChainParams::testnet();
        let dest = Destination::ScriptHash([0x11; 20]);
        let text = dest.encode(params.base58_prefixes());
        assert_eq!(text, "t2873udJLJhQopbsYPZZv558cRNKmTQoqTa");
    }
}
