//! AMICoin network definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::address::{Base58Prefixes, Base58Type, Bech32Hrps, Bech32Type, Destination};
use crate::checkpoints::{Checkpoint, CheckpointStats, CheckpointStore};
use crate::consensus::ConsensusParams;
use crate::equihash::EquihashParams;
use crate::founders::FoundersRewardSchedule;
use crate::genesis::{GenesisBuilder, GenesisDescriptor, GenesisHashes};
use crate::hash::BlockHash;
use crate::script::Script;
use crate::upgrades::{ActivationHeight, UpgradeIndex};
use crate::{Error, Result};

/// Network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NetworkId {
    /// Production network
    #[serde(rename = "main")]
    Main,
    /// Public test network
    #[serde(rename = "test")]
    Testnet,
    /// Local regression-test network
    #[serde(rename = "regtest")]
    Regtest,
}

impl NetworkId {
    /// Every network, in declaration order.
    pub const ALL: [NetworkId; 3] = [NetworkId::Main, NetworkId::Testnet, NetworkId::Regtest];

    /// Identifier string accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" => Ok(NetworkId::Main),
            "test" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

/// DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Operator label
    pub name: &'static str,
    /// Seeder host
    pub host: &'static str,
}

/// Node behavior defaults that differ between networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BehaviorFlags {
    /// Refuse to mine without connected peers
    pub mining_requires_peers: bool,
    /// Run expensive consistency checks by default
    pub default_consistency_checks: bool,
    /// Only relay and mine standard transactions
    pub require_standard: bool,
    /// Blocks are mined on request instead of continuously
    pub mine_blocks_on_demand: bool,
    /// Report the deprecated `testnet` field over RPC
    pub testnet_to_be_deprecated_field_rpc: bool,
}

/// Complete parameter set for one network
#[derive(Debug, Clone)]
pub struct ChainParams {
    id: NetworkId,
    currency_units: &'static str,
    bip44_coin_type: u32,
    message_start: [u8; 4],
    alert_pubkey: Vec<u8>,
    default_port: u16,
    prune_after_height: u64,
    equihash: EquihashParams,
    genesis: GenesisDescriptor,
    genesis_merkle_root: BlockHash,
    consensus: ConsensusParams,
    founders_reward: FoundersRewardSchedule,
    checkpoints: CheckpointStore,
    base58_prefixes: Base58Prefixes,
    bech32_hrps: Bech32Hrps,
    dns_seeds: Vec<DnsSeed>,
    behavior: BehaviorFlags,
}

const GENESIS_MERKLE_ROOT: &str = "612ec8fb3918ca92b067049c53869fc751c200c636afe2fd86f297580fba1b19";

const MAIN_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[0x1C, 0xB8],
    script_address: &[0x1C, 0xBD],
    secret_key: &[0x80],
    ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
    zc_payment_address: &[0x16, 0x9A],
    zc_viewing_key: &[0xA8, 0xAB, 0xD3],
    zc_spending_key: &[0xAB, 0x36],
};

// Regtest shares the test network prefixes.
const TEST_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[0x1D, 0x25],
    script_address: &[0x1C, 0xBA],
    secret_key: &[0xEF],
    ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
    zc_payment_address: &[0x16, 0xB6],
    zc_viewing_key: &[0xA8, 0xAC, 0x0C],
    zc_spending_key: &[0xAC, 0x08],
};

fn hash(text: &str) -> BlockHash {
    BlockHash::from_hex(text).expect("built-in hash constant")
}

fn bytes(text: &str) -> Vec<u8> {
    hex::decode(text).expect("built-in hex constant")
}

fn equihash(n: u32, k: u32) -> EquihashParams {
    EquihashParams::new(n, k).expect("built-in equihash parameters must be acceptable")
}

fn founders(addresses: &[&str], consensus: &ConsensusParams) -> FoundersRewardSchedule {
    FoundersRewardSchedule::new(
        addresses.iter().copied(),
        consensus.last_founders_reward_block_height(),
    )
    .expect("built-in founders addresses must fit the reward window")
}

fn checkpoints(entries: &[(u32, BlockHash)], stats: CheckpointStats) -> CheckpointStore {
    let entries = entries
        .iter()
        .map(|&(height, hash)| Checkpoint { height, hash })
        .collect();
    CheckpointStore::new(entries, stats).expect("built-in checkpoints must be ordered")
}

impl ChainParams {
    /// Get mainnet parameters
    pub fn main() -> Self {
        let consensus = ConsensusParams::mainnet();
        let genesis_hash = consensus.hash_genesis_block;
        Self {
            id: NetworkId::Main,
            currency_units: "AMI",
            bip44_coin_type: 133,
            message_start: [0x24, 0xe9, 0x27, 0x64],
            alert_pubkey: bytes("04b7ecf0baa90495ceb4e4090f6b2fd37eec1e9c85fac68a487f3ce11589692e4a317479316ee814e066638e1db54e37a10689b70286e6315b1087b6615d179264"),
            default_port: 8343,
            prune_after_height: 100_000,
            equihash: equihash(200, 9),
            genesis: GenesisDescriptor {
                time: 1_548_806_400,
                nonce: hash("0x1b35"),
                solution: bytes(MAIN_GENESIS_SOLUTION),
                bits: 0x1f07ffff,
                version: 4,
                reward: 0,
            },
            genesis_merkle_root: hash(GENESIS_MERKLE_ROOT),
            founders_reward: founders(&MAIN_FOUNDERS_ADDRESSES, &consensus),
            checkpoints: checkpoints(
                &[(0, genesis_hash)],
                CheckpointStats {
                    last_checkpoint_time: 1_548_806_400,
                    transactions_before_checkpoint: 0,
                    estimated_tx_per_day: 0.0,
                },
            ),
            consensus,
            base58_prefixes: MAIN_BASE58_PREFIXES,
            bech32_hrps: Bech32Hrps {
                sapling_payment_address: "zs",
                sapling_full_viewing_key: "zviews",
                sapling_incoming_viewing_key: "zivks",
                sapling_extended_spend_key: "secret-extended-key-main",
            },
            dns_seeds: Vec::new(),
            behavior: BehaviorFlags {
                mining_requires_peers: true,
                default_consistency_checks: false,
                require_standard: true,
                mine_blocks_on_demand: false,
                testnet_to_be_deprecated_field_rpc: false,
            },
        }
    }

    /// Get testnet parameters
    pub fn testnet() -> Self {
        let consensus = ConsensusParams::testnet();
        let genesis_hash = consensus.hash_genesis_block;
        Self {
            id: NetworkId::Testnet,
            currency_units: "TAZ",
            bip44_coin_type: 1,
            message_start: [0xfa, 0x1a, 0xf9, 0xbf],
            alert_pubkey: bytes("044e7a1553392325c871c5ace5d6ad73501c66f4c185d6b0453cf45dec5a1322e705c672ac1a27ef7cdaf588c10effdf50ed5f95f85f2f54a5f6159fca394ed0c6"),
            default_port: 18122,
            prune_after_height: 1_000,
            equihash: equihash(200, 9),
            genesis: GenesisDescriptor {
                time: 1_477_648_033,
                nonce: hash("0x06"),
                solution: bytes(TESTNET_GENESIS_SOLUTION),
                bits: 0x2007ffff,
                version: 4,
                reward: 0,
            },
            genesis_merkle_root: hash(GENESIS_MERKLE_ROOT),
            founders_reward: founders(&TESTNET_FOUNDERS_ADDRESSES, &consensus),
            checkpoints: checkpoints(
                &[
                    (0, genesis_hash),
                    (
                        38_000,
                        hash("001e9a2d2e2892b88e9998cf7b079b41d59dd085423a921fe8386cecc42287b8"),
                    ),
                ],
                CheckpointStats {
                    last_checkpoint_time: 1_486_897_419,
                    transactions_before_checkpoint: 47_163,
                    estimated_tx_per_day: 715.0,
                },
            ),
            consensus,
            base58_prefixes: TEST_BASE58_PREFIXES,
            bech32_hrps: Bech32Hrps {
                sapling_payment_address: "ztestsapling",
                sapling_full_viewing_key: "zviewtestsapling",
                sapling_incoming_viewing_key: "zivktestsapling",
                sapling_extended_spend_key: "secret-extended-key-test",
            },
            dns_seeds: vec![DnsSeed {
                name: "z.cash",
                host: "dnsseed.testnet.z.cash",
            }],
            behavior: BehaviorFlags {
                mining_requires_peers: true,
                default_consistency_checks: false,
                require_standard: true,
                mine_blocks_on_demand: false,
                testnet_to_be_deprecated_field_rpc: true,
            },
        }
    }

    /// Get regtest parameters
    pub fn regtest() -> Self {
        let consensus = ConsensusParams::regtest();
        Self {
            id: NetworkId::Regtest,
            currency_units: "REG",
            bip44_coin_type: 1,
            message_start: [0xaa, 0xe8, 0x3f, 0x5f],
            alert_pubkey: Vec::new(),
            default_port: 18211,
            prune_after_height: 1_000,
            equihash: equihash(48, 5),
            genesis: GenesisDescriptor {
                time: 1_296_688_602,
                nonce: hash("0x09"),
                solution: bytes(REGTEST_GENESIS_SOLUTION),
                bits: 0x200f0f0f,
                version: 4,
                reward: 0,
            },
            genesis_merkle_root: hash(GENESIS_MERKLE_ROOT),
            founders_reward: founders(&REGTEST_FOUNDERS_ADDRESSES, &consensus),
            // Pinned to a foreign genesis, so the regtest genesis itself
            // verifies as a mismatch at height 0. Regtest chains are never
            // checked against it.
            checkpoints: checkpoints(
                &[(
                    0,
                    hash("0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206"),
                )],
                CheckpointStats {
                    last_checkpoint_time: 0,
                    transactions_before_checkpoint: 0,
                    estimated_tx_per_day: 0.0,
                },
            ),
            consensus,
            base58_prefixes: TEST_BASE58_PREFIXES,
            bech32_hrps: Bech32Hrps {
                sapling_payment_address: "zregtestsapling",
                sapling_full_viewing_key: "zviewregtestsapling",
                sapling_incoming_viewing_key: "zivkregtestsapling",
                sapling_extended_spend_key: "secret-extended-key-regtest",
            },
            dns_seeds: Vec::new(),
            behavior: BehaviorFlags {
                mining_requires_peers: false,
                default_consistency_checks: true,
                require_standard: false,
                mine_blocks_on_demand: true,
                testnet_to_be_deprecated_field_rpc: false,
            },
        }
    }

    /// Get parameters by network
    pub fn for_network(id: NetworkId) -> Self {
        match id {
            NetworkId::Main => Self::main(),
            NetworkId::Testnet => Self::testnet(),
            NetworkId::Regtest => Self::regtest(),
        }
    }

    /// Network identifier
    pub fn id(&self) -> NetworkId {
        self.id
    }

    /// Ticker shown next to amounts
    pub fn currency_units(&self) -> &'static str {
        self.currency_units
    }

    /// BIP-44 coin type
    pub fn bip44_coin_type(&self) -> u32 {
        self.bip44_coin_type
    }

    /// Magic bytes framing every P2P message
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Key that signs network alerts; empty on regtest
    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    /// Default P2P port
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Height below which block files are never pruned
    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Equihash (N, K)
    pub fn equihash(&self) -> EquihashParams {
        self.equihash
    }

    /// Genesis block inputs
    pub fn genesis(&self) -> &GenesisDescriptor {
        &self.genesis
    }

    /// Expected genesis merkle root
    pub fn genesis_merkle_root(&self) -> &BlockHash {
        &self.genesis_merkle_root
    }

    /// Consensus rules
    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    /// Founders reward rotation
    pub fn founders_reward(&self) -> &FoundersRewardSchedule {
        &self.founders_reward
    }

    /// Checkpoints
    pub fn checkpoints(&self) -> &CheckpointStore {
        &self.checkpoints
    }

    /// All base58 prefixes
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Base58 prefix for one kind of value
    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    /// All bech32 HRPs
    pub fn bech32_hrps(&self) -> &Bech32Hrps {
        &self.bech32_hrps
    }

    /// Bech32 HRP for one kind of value
    pub fn bech32_hrp(&self, kind: Bech32Type) -> &'static str {
        self.bech32_hrps.get(kind)
    }

    /// DNS seeds
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Node behavior defaults
    pub fn behavior(&self) -> &BehaviorFlags {
        &self.behavior
    }

    /// Decode a transparent destination with this network's prefixes.
    pub fn decode_destination(&self, text: &str) -> Result<Destination> {
        Destination::decode(text, &self.base58_prefixes)
    }

    /// Founders reward address paid at `height`
    pub fn founders_reward_address_at_height(&self, height: u32) -> Result<&str> {
        self.founders_reward.address_at_height(height)
    }

    /// Founders reward output script required at `height`
    pub fn founders_reward_script_at_height(&self, height: u32) -> Result<Script> {
        self.founders_reward
            .script_at_height(height, &self.base58_prefixes)
    }

    /// Founders reward address at a list position
    pub fn founders_reward_address_at_index(&self, index: usize) -> Result<&str> {
        self.founders_reward.address_at_index(index)
    }

    /// Rebuild the genesis block and compare it against the pinned hashes.
    ///
    /// A mismatch means the binary carries corrupt parameters and panics.
    pub fn check_genesis<B: GenesisBuilder + ?Sized>(&self, builder: &B) -> GenesisHashes {
        let built = builder.build(&self.genesis);
        if built.hash != self.consensus.hash_genesis_block {
            tracing::error!(
                "{} genesis hash mismatch: built {}, expected {}",
                self.id,
                built.hash,
                self.consensus.hash_genesis_block
            );
            panic!("{} genesis hash mismatch", self.id);
        }
        if built.merkle_root != self.genesis_merkle_root {
            tracing::error!(
                "{} genesis merkle root mismatch: built {}, expected {}",
                self.id,
                built.merkle_root,
                self.genesis_merkle_root
            );
            panic!("{} genesis merkle root mismatch", self.id);
        }
        tracing::debug!("{} genesis verified: {}", self.id, built.hash);
        built
    }

    pub(crate) fn set_coinbase_must_be_protected(&mut self, protect: bool) {
        self.consensus.coinbase_must_be_protected = protect;
    }

    /// Replace upgrade activation heights. Only regtest may be changed.
    pub(crate) fn update_network_upgrades(
        &mut self,
        changes: &[(UpgradeIndex, ActivationHeight)],
    ) -> Result<()> {
        if self.id != NetworkId::Regtest {
            tracing::error!("Refusing to change upgrade heights on {}", self.id);
            panic!("network upgrades can only be changed on regtest, not {}", self.id);
        }
        self.consensus.upgrades.set_activation_heights(changes)?;
        for (idx, height) in changes {
            tracing::info!("Regtest {} activation set to {}", idx, height);
        }
        Ok(())
    }
}

// Equihash solutions of each genesis block.

const MAIN_GENESIS_SOLUTION: &str = concat!(
    "001be1a5188decdeeba093a7a4e0d1ed4dd35ff1c0194d79afdf6d3a898938830f6c20575729a479df1a0a59a3f9f6a1",
    "08a918dcf23c5095e690c74b9adf121e2a61fd5a701ff3999ae23f09f32ccddf4e79568b02ce784720948b219798503d",
    "64498cb18f2ed7aad129c31d46cb977bf76cabc92e3c68b5278376fcd23614da4b645e0e5ff2f2b1f28a6b610a7df244",
    "bbbeac1a56fadf648d21e5ae53e599aef04141e518afffbc03bad5e29a4c002df957b2ee75c946dae4ca5f7dba06b2e7",
    "7a820f4e755c4ce155edd099d1346e9e29840e5ddd879fda1160dd8df4e42a712e5d6170726b0e5ad8fb23b497530d7f",
    "ae9624e46f42126cbd7afffc0457a54df7d9489b74b9037cedb98c8e0950be80731632c8d6fdb0f5b19288072cb3797b",
    "36cc5c3e5520075c596d44d62f0dcfca048aa36fcba29977fe562819d402a89dc96e83f49d82a1ae2e46f305579c8e2a",
    "0559620a858acf8ed64165d3e5f10f530b1f79c3a6193a47ff8d0a402eb24492f0866d81f4ddaa6f879311d1bca5fd28",
    "24ddfb3b51591e44fe9624bcdec17d28d8717904db7dd73b7b62d5591f808b0989be34c808022925971bb741f8266305",
    "bc50c75a450d5d880c088e69be20fc4731f159f2ab267a00c62c8cf4b8fa083c32549d0a7637861803c978d7845aecea",
    "dd1c680adfbf91c7d47fcbfcf021140d16dd61fe20159b4105fe796608e5d7179711d250fb3ea545d486f84814137745",
    "844e4d746bd061735a1e24a234f424befda30921d52422c9ac531d0ff0b98b991ef0a1f5b861840f215a01d6adf89791",
    "e184282de1faa60bf137e67e07b1220a9298f11d3502635ddc591f75d1bcb84ca808382328dd8bbea479add19bbedf23",
    "2092f175d8d02e415c61aff1430dc8e405c42eb40895e57bb61ecf344895a496517777803084afc6a89cdaea3d7a84bc",
    "0130112e024d0de8eee83305f221f4f0f7463b9b4c0543dfc8102dd285cc0c51115d09a2358ecb1f04b127d381eb7f90",
    "6a5ee5a9b38a725cca450cf50be38248a6f68f8071c9dfec83150407d889a640a9b445130c819cc9f5d469baeb1ea13f",
    "03924dc05ec9bf9bbb376bc40636a2c8137c02b58c6776d00b269eb962f82e7f1c152de7f503802dc763d252fca6b3b8",
    "35c82d2f410450f38cba18ec1d1730d5775225e2d698d06d02f5e3d2d1921b7b8375c55ed27f2e02c915dd8ef01af06c",
    "4ee251e77c988b23cd0d3c5995adedd27aad0706719566caab34f7d0314fb2435c4a22dc956c331b7567a9611105a7df",
    "69d30bda5cf8963a843741ab032eb7c48fb5ee33cf94e75b94ced8027a67de860711ec1b6951d1a7bac65e081e054ef0",
    "52282cf475a5046650c12f29b3e95878617ea4f593c709eefebde31b584c41d934bd25b65c51d560b3aa951812e98cb3",
    "03b0a868e1c103dcf01d33b515c97369cd7cd9e74e25772f8e7fd02005ca45f6077d3b869df07ff30d3107937922df68",
    "1285b3f3a26f9377c91a1f261ee8bc08a21d7b1f4a5ffda5f1e4c324b7287dca5091eb4a045dfe1f3f427e82c2b910d9",
    "b65a3cdd135f4a37d116090740af2a1f6be0c7d313a1727426237ffa3bcd13351e67149a9c559caf423d0b41dab6b4c5",
    "d894191c57da3c2d2090ef9748b3367ecbe78f15317ed7dd047b6d431f179f16c1f6e1ef97d04891db739504a71841ad",
    "17cc571e53d7c4a3480031897935b66c50b91b1defa4379aa2ff304ed253c5f04ae5f76dbe86c34566da89c49b7df9a2",
    "f80490cfd45b46a5ce5b63a806765ddedea9583f8991e0b8daf8d886c0ec98bc9031baddb96ed60c3de20707e1d7ecfd",
    "ca61877962d51ab1bfade92f483993fc5660b97f13be5b5ad86dc43563db45fb2fa557dd2aa686ca7dec5da9846e63ce",
);

const TESTNET_GENESIS_SOLUTION: &str = concat!(
    "00a6a51259c3f6732481e2d035197218b7a69504461d04335503cd69759b2d02bd2b53a9653f42cb33c608511c953673",
    "fa9da76170958115fe92157ad3bb5720d927f18e09459bf5c6072973e143e20f9bdf0584058c96b7c2234c7565f100d5",
    "eea083ba5d3dbaff9f0681799a113e7beff4a611d2b49590563109962baa149b628aae869af791f2f70bb041bd7ebfa6",
    "58570917f6654a142b05e7ec0289a4f46470be7be5f693b90173eaaa6e84907170f32602204f1f4e1c04b1830116ffd0",
    "c54f0b1caa9a5698357bd8aa1f5ac8fc93b405265d824ba0e49f69dab5446653927298e6b7bdc61ee86ff31c07bde863",
    "31b4e500d42e4e50417e285502684b7966184505b885b42819a88469d1e9cf55072d7f3510f85580db689302eab377e4",
    "e11b14a91fdd0df7627efc048934f0aff8e7eb77eb17b3a95de13678004f2512293891d8baf8dde0ef69be520a58bbd6",
    "038ce899c9594cf3e30b8c3d9c7ecc832d4c19a6212747b50724e6f70f6451f78fd27b58ce43ca33b1641304a916186c",
    "fbe7dbca224f55d08530ba851e4df22baf7ab7078e9cbea46c0798b35a750f54103b0cdd08c81a6505c4932f6bfbd492",
    "a9fced31d54e98b6370d4c96600552fcf5b37780ed18c8787d03200963600db297a8f05dfa551321d17b9917edadcda5",
    "1e274830749d133ad226f8bb6b94f13b4f77e67b35b71f52112ce9ba5da706ad9573584a2570a4ff25d29ab9761a06bd",
    "cf2c33638bf9baf2054825037881c14adf3816ba0cbd0fca689aad3ce16f2fe362c98f48134a9221765d939f0b49677d",
    "1c2447e56b46859f1810e2cf23e82a53e0d44f34dae932581b3b7f49eaec59af872cf9de757a964f7b33d143a36c2701",
    "89508fcafe19398e4d2966948164d40556b05b7ff532f66f5d1edc41334ef742f78221dfe0c7ae2275bb3f24c89ae35f",
    "00afeea4e6ed187b866b209dc6e83b660593fce7c40e143beb07ac86c56f39e895385924667efe3a3f031938753c7764",
    "a2dbeb0a643fd359c46e614873fd0424e435fa7fac083b9a41a9d6bf7e284eee537ea7c50dd239f359941a43dc982745",
    "184bf3ee31a8dc850316aa9c6b66d6985acee814373be3458550659e1a06287c3b3b76a185c5cb93e38c1eebcf34ff07",
    "2894b6430aed8d34122dafd925c46a515cca79b0269c92b301890ca6b0dc8b679cdac0f23318c105de73d7a46d16d2da",
    "d988d49c22e9963c117960bdc70ef0db6b091cf09445a516176b7f6d58ec29539166cc8a38bbff387acefffab2ea5faa",
    "d0e8bb70625716ef0edf61940733c25993ea3de9f0be23d36e7cb8da10505f9dc426cd0e6e5b173ab4fff8c37e1f1fb5",
    "6d1ea372013d075e0934c6919393cfc21395eea20718fad03542a4162a9ded66c814ad8320b2d7c2da3ecaf206da34c5",
    "02db2096d1c46699a91dd1c432f019ad434e2c1ce507f91104f66f491fed37b225b8e0b2888c37276cfa0468fc13b8d5",
    "93fd9a2675f0f5b20b8a15f8fa7558176a530d6865738ddb25d3426dab905221681cf9da0e0200eea5b2eba3ad3a5237",
    "d2a391f9074bf1779a2005cee43eec2b058511532635e0fea61664f531ac2b356f40db5c5d275a4cf5c82d468976455a",
    "f4e3362cc8f71aa95e71d394aff3ead6f7101279f95bcd8a0fedce1d21cb3c9f6dd3b182fce0db5d6712981b651f2917",
    "8a24119968b14783cafa713bc5f2a65205a42e4ce9dc7ba462bdb1f3e4553afc15f5f39998fdb53e7e231e3e520a4694",
    "3734a007c2daa1eda9f495791657eefcac5c32833936e568d06187857ed04d7b97167ae207c5c5ae54e528c36016a984",
    "235e9c5b2f0718d7b3aa93c7822ccc772580b6599671b3c02ece8a21399abd33cfd3028790133167d0a97e7de53dc8ff",
);

const REGTEST_GENESIS_SOLUTION: &str = concat!(
    "01936b7db1eb4ac39f151b8704642d0a8bda13ec547d54cd5e43ba142fc6d8877cab07b3",
);

const MAIN_FOUNDERS_ADDRESSES: [&str; 55] = [
    "t3Vz22vK5z2LcKEdg16Yv4FFneEL1zg9ojd",
    "t3cL9AucCajm3HXDhb5jBnJK2vapVoXsop3",
    "t3fqvkzrrNaMcamkQMwAyHRjfDdM2xQvDTR",
    "t3TgZ9ZT2CTSK44AnUPi6qeNaHa2eC7pUyF",
    "t3SpkcPQPfuRYHsP5vz3Pv86PgKo5m9KVmx",
    "t3Xt4oQMRPagwbpQqkgAViQgtST4VoSWR6S",
    "t3ayBkZ4w6kKXynwoHZFUSSgXRKtogTXNgb",
    "t3adJBQuaa21u7NxbR8YMzp3km3TbSZ4MGB",
    "t3K4aLYagSSBySdrfAGGeUd5H9z5Qvz88t2",
    "t3RYnsc5nhEvKiva3ZPhfRSk7eyh1CrA6Rk",
    "t3Ut4KUq2ZSMTPNE67pBU5LqYCi2q36KpXQ",
    "t3ZnCNAvgu6CSyHm1vWtrx3aiN98dSAGpnD",
    "t3fB9cB3eSYim64BS9xfwAHQUKLgQQroBDG",
    "t3cwZfKNNj2vXMAHBQeewm6pXhKFdhk18kD",
    "t3YcoujXfspWy7rbNUsGKxFEWZqNstGpeG4",
    "t3bLvCLigc6rbNrUTS5NwkgyVrZcZumTRa4",
    "t3VvHWa7r3oy67YtU4LZKGCWa2J6eGHvShi",
    "t3eF9X6X2dSo7MCvTjfZEzwWrVzquxRLNeY",
    "t3esCNwwmcyc8i9qQfyTbYhTqmYXZ9AwK3X",
    "t3M4jN7hYE2e27yLsuQPPjuVek81WV3VbBj",
    "t3gGWxdC67CYNoBbPjNvrrWLAWxPqZLxrVY",
    "t3LTWeoxeWPbmdkUD3NWBquk4WkazhFBmvU",
    "t3P5KKX97gXYFSaSjJPiruQEX84yF5z3Tjq",
    "t3f3T3nCWsEpzmD35VK62JgQfFig74dV8C9",
    "t3Rqonuzz7afkF7156ZA4vi4iimRSEn41hj",
    "t3fJZ5jYsyxDtvNrWBeoMbvJaQCj4JJgbgX",
    "t3Pnbg7XjP7FGPBUuz75H65aczphHgkpoJW",
    "t3WeKQDxCijL5X7rwFem1MTL9ZwVJkUFhpF",
    "t3Y9FNi26J7UtAUC4moaETLbMo8KS1Be6ME",
    "t3aNRLLsL2y8xcjPheZZwFy3Pcv7CsTwBec",
    "t3gQDEavk5VzAAHK8TrQu2BWDLxEiF1unBm",
    "t3Rbykhx1TUFrgXrmBYrAJe2STxRKFL7G9r",
    "t3aaW4aTdP7a8d1VTE1Bod2yhbeggHgMajR",
    "t3YEiAa6uEjXwFL2v5ztU1fn3yKgzMQqNyo",
    "t3g1yUUwt2PbmDvMDevTCPWUcbDatL2iQGP",
    "t3dPWnep6YqGPuY1CecgbeZrY9iUwH8Yd4z",
    "t3QRZXHDPh2hwU46iQs2776kRuuWfwFp4dV",
    "t3enhACRxi1ZD7e8ePomVGKn7wp7N9fFJ3r",
    "t3PkLgT71TnF112nSwBToXsD77yNbx2gJJY",
    "t3LQtHUDoe7ZhhvddRv4vnaoNAhCr2f4oFN",
    "t3fNcdBUbycvbCtsD2n9q3LuxG7jVPvFB8L",
    "t3dKojUU2EMjs28nHV84TvkVEUDu1M1FaEx",
    "t3aKH6NiWN1ofGd8c19rZiqgYpkJ3n679ME",
    "t3MEXDF9Wsi63KwpPuQdD6by32Mw2bNTbEa",
    "t3WDhPfik343yNmPTqtkZAoQZeqA83K7Y3f",
    "t3PSn5TbMMAEw7Eu36DYctFezRzpX1hzf3M",
    "t3R3Y5vnBLrEn8L6wFjPjBLnxSUQsKnmFpv",
    "t3Pcm737EsVkGTbhsu2NekKtJeG92mvYyoN",
    "t3PZ9PPcLzgL57XRSG5ND4WNBC9UTFb8DXv",
    "t3L1WgcyQ95vtpSgjHfgANHyVYvffJZ9iGb",
    "t3JtoXqsv3FuS7SznYCd5pZJGU9di15mdd7",
    "t3hLJHrHs3ytDgExxr1mD8DYSrk1TowGV25",
    "t3fmYHU2DnVaQgPhDs6TMFVmyC3qbWEWgXN",
    "t3T4WmAp6nrLkJ24iPpGeCe1fSWTPv47ASG",
    "t3fP6GrDM4QVwdjFhmCxGNbe7jXXXSDQ5dv",
];

const TESTNET_FOUNDERS_ADDRESSES: [&str; 48] = [
    "t2UNzUUx8mWBCRYPRezvA363EYXyEpHokyi",
    "t2N9PH9Wk9xjqYg9iin1Ua3aekJqfAtE543",
    "t2NGQjYMQhFndDHguvUw4wZdNdsssA6K7x2",
    "t2ENg7hHVqqs9JwU5cgjvSbxnT2a9USNfhy",
    "t2BkYdVCHzvTJJUTx4yZB8qeegD8QsPx8bo",
    "t2J8q1xH1EuigJ52MfExyyjYtN3VgvshKDf",
    "t2Crq9mydTm37kZokC68HzT6yez3t2FBnFj",
    "t2EaMPUiQ1kthqcP5UEkF42CAFKJqXCkXC9",
    "t2F9dtQc63JDDyrhnfpzvVYTJcr57MkqA12",
    "t2LPirmnfYSZc481GgZBa6xUGcoovfytBnC",
    "t26xfxoSw2UV9Pe5o3C8V4YybQD4SESfxtp",
    "t2D3k4fNdErd66YxtvXEdft9xuLoKD7CcVo",
    "t2DWYBkxKNivdmsMiivNJzutaQGqmoRjRnL",
    "t2C3kFF9iQRxfc4B9zgbWo4dQLLqzqjpuGQ",
    "t2MnT5tzu9HSKcppRyUNwoTp8MUueuSGNaB",
    "t2AREsWdoW1F8EQYsScsjkgqobmgrkKeUkK",
    "t2Vf4wKcJ3ZFtLj4jezUUKkwYR92BLHn5UT",
    "t2K3fdViH6R5tRuXLphKyoYXyZhyWGghDNY",
    "t2VEn3KiKyHSGyzd3nDw6ESWtaCQHwuv9WC",
    "t2F8XouqdNMq6zzEvxQXHV1TjwZRHwRg8gC",
    "t2BS7Mrbaef3fA4xrmkvDisFVXVrRBnZ6Qj",
    "t2FuSwoLCdBVPwdZuYoHrEzxAb9qy4qjbnL",
    "t2SX3U8NtrT6gz5Db1AtQCSGjrpptr8JC6h",
    "t2V51gZNSoJ5kRL74bf9YTtbZuv8Fcqx2FH",
    "t2FyTsLjjdm4jeVwir4xzj7FAkUidbr1b4R",
    "t2EYbGLekmpqHyn8UBF6kqpahrYm7D6N1Le",
    "t2NQTrStZHtJECNFT3dUBLYA9AErxPCmkka",
    "t2GSWZZJzoesYxfPTWXkFn5UaxjiYxGBU2a",
    "t2RpffkzyLRevGM3w9aWdqMX6bd8uuAK3vn",
    "t2JzjoQqnuXtTGSN7k7yk5keURBGvYofh1d",
    "t2AEefc72ieTnsXKmgK2bZNckiwvZe3oPNL",
    "t2NNs3ZGZFsNj2wvmVd8BSwSfvETgiLrD8J",
    "t2ECCQPVcxUCSSQopdNquguEPE14HsVfcUn",
    "t2JabDUkG8TaqVKYfqDJ3rqkVdHKp6hwXvG",
    "t2FGzW5Zdc8Cy98ZKmRygsVGi6oKcmYir9n",
    "t2DUD8a21FtEFn42oVLp5NGbogY13uyjy9t",
    "t2UjVSd3zheHPgAkuX8WQW2CiC9xHQ8EvWp",
    "t2TBUAhELyHUn8i6SXYsXz5Lmy7kDzA1uT5",
    "t2Tz3uCyhP6eizUWDc3bGH7XUC9GQsEyQNc",
    "t2NysJSZtLwMLWEJ6MH3BsxRh6h27mNcsSy",
    "t2KXJVVyyrjVxxSeazbY9ksGyft4qsXUNm9",
    "t2J9YYtH31cveiLZzjaE4AcuwVho6qjTNzp",
    "t2QgvW4sP9zaGpPMH1GRzy7cpydmuRfB4AZ",
    "t2NDTJP9MosKpyFPHJmfjc5pGCvAU58XGa4",
    "t29pHDBWq7qN4EjwSEHg8wEqYe9pkmVrtRP",
    "t2Ez9KM8VJLuArcxuEkNRAkhNvidKkzXcjJ",
    "t2D5y7J5fpXajLbGrMBQkFg2mFN8fo3n8cX",
    "t2UV2wr1PTaUiybpkV3FdSdGxUJeZdZztyt",
];

const REGTEST_FOUNDERS_ADDRESSES: [&str; 1] = ["t2FwcEhFdNXuFMv1tcYwaBJtYVtMj8b1uTg"];
