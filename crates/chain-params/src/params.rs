//! Per-network parameter sets
//!
//! Each network is built by one function that fills in every field from
//! literals. Values shared between networks are named constants, not
//! inherited state, so a network's complete definition is readable in one
//! place.

use crate::checkpoints::CheckpointData;
use crate::genesis::{GenesisBlock, GenesisTemplate};
use crate::seeds::{convert_seeds, DnsSeed, SeedPeer, MAIN_FIXED_SEEDS, TEST_FIXED_SEEDS};
use crate::{Error, Hash256, NetworkId, Result};
use primitive_types::U256;
use serde::Serialize;
use tracing::debug;

/// Amount in base units
pub type Amount = i64;

/// Base units per coin
pub const COIN: Amount = 100_000_000;

/// Merkle root shared by every network's genesis block
pub const GENESIS_MERKLE_ROOT: &str =
    "bb3193bb82478557f89d99095a94f504c6a31ec29e761e4b5e7f20ae5e4d704c";
/// Main network genesis hash
pub const MAIN_GENESIS_HASH: &str =
    "0000071b91325dbc34178b8e20a233a70226690edca16c6a1d79e4924fc31485";
/// Test network genesis hash
pub const TEST_GENESIS_HASH: &str =
    "00000dd0eebeeb47417e7ee8254773a399fb469953b206f8e89de63081eb67fa";
/// Regression test network genesis hash
pub const REGTEST_GENESIS_HASH: &str =
    "999a69dc53a544572d923a5ef93fe36046063acd6b4be3084db76f0563a419bd";

const GENESIS_BLOCK_VERSION: i32 = 112;
const GENESIS_COINBASE_MESSAGE: &str =
    "21 July 2013, The Guardian, Tesco boss says cheap food era is over";
const GENESIS_OUTPUT_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// Compact form of the main proof-of-work limit (`U256::MAX >> 20`)
const MAIN_POW_LIMIT_BITS: u32 = 0x1e0f_ffff;
/// Compact form of the regtest proof-of-work limit (`U256::MAX`)
const REGTEST_POW_LIMIT_BITS: u32 = 0x2100_ffff;

const GENESIS_BLOCK_REWARD: Amount = COIN;
const BLOCK_REWARD_START: Amount = 2048 * COIN;
const BLOCK_REWARD_MINIMUM: Amount = COIN;

const TARGET_TIMESPAN: i64 = 10 * 60;
const TARGET_SPACING: i64 = 30;
const ONE_DAY: i64 = 24 * 60 * 60;

const MAIN_SUBSIDY_HALVING_INTERVAL: u32 = 60_480;
const MASTERNODE_PAYMENTS_DISABLED: u32 = 999_999_999;
const START_MASTERNODE_PAYMENTS: i64 = 2_145_916_800;

const MAIN_ALERT_KEY: &str = "0493e6dc310a0e444cfb20f3234a238f77699806d47909a42481010c5ce68ff04d3babc959cd037bd3aa6ded929f2b9b4aa2f626786cd7f8495e5bb61e9cfebbc4";
const TEST_ALERT_KEY: &str = "04218bc3f08237baa077cb1b0e5a81695fcf3f5b4e220b4ad274d05a31d762dd4e191efa7b736a24a32d6fd9ac1b5ebb2787c70e9dfad0016a8b32f7bd2520dbd5";
const MAIN_SPORK_KEY: &str = "044B4A273C4B3E0DB2B0953402D94335C636BA5517D2ACDC7AB7609DC0B86D1861698524A6305024A42318D4B46389EBEEB43CF26A255B0F86AC40F1D757E67527";
const TEST_SPORK_KEY: &str = "046C0C49800E806FAC756EAC67C2A55196805589D30A54B2BF4129DCA75EFC0CBA5527E694BD1ED5606ADD47CE8A8C4A41984178EE38BA091604CD69FFCC77A2BD";
const OBFUSCATION_POOL_DUMMY_ADDRESS: &str = "y57cqfGRkekRyDRNeJiLtYVEbvhXrNbmox";

/// Kinds of base58-encoded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// Exported private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

/// Version prefixes prepended before base58check encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash address prefix (1 byte)
    #[serde(serialize_with = "hex::serde::serialize")]
    pub pubkey_address: &'static [u8],
    /// Pay-to-script-hash address prefix (1 byte)
    #[serde(serialize_with = "hex::serde::serialize")]
    pub script_address: &'static [u8],
    /// Private key prefix (1 byte)
    #[serde(serialize_with = "hex::serde::serialize")]
    pub secret_key: &'static [u8],
    /// Extended public key prefix (4 bytes)
    #[serde(serialize_with = "hex::serde::serialize")]
    pub ext_public_key: &'static [u8],
    /// Extended private key prefix (4 bytes)
    #[serde(serialize_with = "hex::serde::serialize")]
    pub ext_secret_key: &'static [u8],
}

impl Base58Prefixes {
    /// Prefix for `kind`
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }
}

const MAIN_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[58],
    script_address: &[9],
    secret_key: &[186],
    ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
};

const TEST_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[119],
    script_address: &[199],
    secret_key: &[247],
    ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
};

const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("seed1.ddns.net"),
    DnsSeed::new("seed2.ddns.net"),
    DnsSeed::new("seed3.ddns.net"),
];

const TEST_DNS_SEEDS: &[DnsSeed] = &[DnsSeed::new("testseed1.ddns.net")];

/// Genesis template of the main network, also used by the unit-test network
pub const fn main_genesis_template() -> GenesisTemplate {
    GenesisTemplate {
        version: GENESIS_BLOCK_VERSION,
        timestamp: 1_374_408_079,
        bits: MAIN_POW_LIMIT_BITS,
        nonce: 1_727_069,
        coinbase_message: GENESIS_COINBASE_MESSAGE,
        output_pubkey: GENESIS_OUTPUT_PUBKEY,
        reward: GENESIS_BLOCK_REWARD,
    }
}

/// Genesis template of the test network
pub const fn testnet_genesis_template() -> GenesisTemplate {
    GenesisTemplate {
        timestamp: 1_373_481_000,
        nonce: 332_398,
        ..main_genesis_template()
    }
}

/// Genesis template of the regression test network
pub const fn regtest_genesis_template() -> GenesisTemplate {
    GenesisTemplate {
        timestamp: 1_296_688_602,
        bits: REGTEST_POW_LIMIT_BITS,
        nonce: 3,
        ..main_genesis_template()
    }
}

/// Easiest target allowed on main, test and unit-test networks
pub fn main_pow_limit() -> U256 {
    U256::MAX >> 20usize
}

/// Easiest target allowed on the regression test network
pub fn regtest_pow_limit() -> U256 {
    U256::MAX
}

/// Consensus parameters of one network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    /// Network identifier
    pub network_id: NetworkId,
    /// Short network name
    pub network_name: &'static str,
    /// Wire message start bytes
    #[serde(serialize_with = "hex::serde::serialize")]
    pub magic_bytes: [u8; 4],
    /// Alert signing public key
    #[serde(serialize_with = "hex::serde::serialize")]
    pub alert_public_key: Vec<u8>,
    /// Default P2P port
    pub default_port: u16,
    /// Easiest valid proof-of-work target
    pub proof_of_work_limit: U256,
    /// Blocks between subsidy halvings
    pub subsidy_halving_interval: u32,
    /// Upgraded blocks in the window before new-version rules are enforced
    pub enforce_block_upgrade_majority: u32,
    /// Upgraded blocks in the window before old-version blocks are rejected
    pub reject_block_outdated_majority: u32,
    /// Size of the supermajority window
    pub to_check_block_upgrade_majority: u32,
    /// Default internal miner threads (0 = one per core)
    pub miner_threads: u32,
    /// Difficulty retarget timespan in seconds
    pub target_timespan: i64,
    /// Target block spacing in seconds
    pub target_spacing: i64,
    /// Tip age after which the node considers itself out of sync
    pub max_tip_age: i64,
    /// Height at which the stake modifier computation changes
    pub modifier_update_block: u32,
    /// First proof-of-stake block height
    pub first_pos_block: u32,
    /// First height paying masternodes
    pub first_masternode_payment_block: u32,
    /// Time from which masternode payments are enforced (Unix epoch)
    pub start_masternode_payments: i64,
    /// Reward paid by the genesis coinbase
    pub genesis_block_reward: Amount,
    /// Block reward before the first halving
    pub block_reward_start: Amount,
    /// Floor the block reward never drops below
    pub block_reward_minimum: Amount,
    /// Inputs the genesis block was built from
    pub genesis_template: GenesisTemplate,
    /// Verified genesis block
    pub genesis: GenesisBlock,
    /// Base58 version prefixes
    pub base58_prefixes: Base58Prefixes,
    /// DNS seeds
    pub dns_seeds: Vec<DnsSeed>,
    /// Fixed bootstrap peers
    pub fixed_seeds: Vec<SeedPeer>,
    /// Checkpoint data
    pub checkpoints: &'static CheckpointData,
    /// RPC server refuses to start without a password
    pub require_rpc_password: bool,
    /// Internal miner waits for peers
    pub mining_requires_peers: bool,
    /// Minimum-difficulty blocks allowed after a long gap
    pub allow_min_difficulty_blocks: bool,
    /// Expensive consistency checks on by default
    pub default_consistency_checks: bool,
    /// Only standard transactions are relayed and mined
    pub require_standard_tx: bool,
    /// Blocks are produced on request rather than by mining
    pub mine_blocks_on_demand: bool,
    /// Proof-of-work checks skipped
    pub skip_proof_of_work_check: bool,
    /// Keep the deprecated `testnet` field in RPC output
    pub testnet_deprecated_rpc_field: bool,
    /// Maximum transactions in an obfuscation pool
    pub pool_max_transactions: u32,
    /// Spork signing public key (hex)
    pub spork_public_key: &'static str,
    /// Placeholder address used by the obfuscation pool
    pub obfuscation_pool_dummy_address: &'static str,
}

impl ChainParams {
    /// Build and verify the parameter set of `network`
    pub fn build(network: NetworkId) -> Result<Self> {
        match network {
            NetworkId::Main => main_params(),
            NetworkId::Test => testnet_params(),
            NetworkId::RegTest => regtest_params(),
            NetworkId::UnitTest => unittest_params(),
        }
    }

    /// Genesis block hash
    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash
    }

    /// Wire message start bytes
    pub fn message_start(&self) -> &[u8; 4] {
        &self.magic_bytes
    }

    /// Base58 prefix for `kind`
    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    /// Blocks between difficulty retargets
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Block subsidy at `height`: the start reward halved once per interval,
    /// never below the minimum
    pub fn block_subsidy(&self, height: u32) -> Amount {
        let halvings = height / self.subsidy_halving_interval.max(1);
        let subsidy = if halvings >= 63 {
            0
        } else {
            self.block_reward_start >> halvings
        };
        subsidy.max(self.block_reward_minimum)
    }
}

fn verified_genesis(
    network: NetworkId,
    template: &GenesisTemplate,
    expected_hash: &str,
    pow_limit: U256,
) -> Result<GenesisBlock> {
    let genesis = GenesisBlock::build(template)?;
    genesis.verify(
        network,
        GENESIS_MERKLE_ROOT.parse()?,
        expected_hash.parse()?,
        pow_limit,
    )?;
    Ok(genesis)
}

fn decode_key(hex_key: &str) -> Result<Vec<u8>> {
    hex::decode(hex_key).map_err(|e| Error::InvalidHex(format!("alert key: {}", e)))
}

fn main_params() -> Result<ChainParams> {
    let template = main_genesis_template();
    let pow_limit = main_pow_limit();
    let genesis = verified_genesis(NetworkId::Main, &template, MAIN_GENESIS_HASH, pow_limit)?;
    debug!("Built main parameters");

    Ok(ChainParams {
        network_id: NetworkId::Main,
        network_name: NetworkId::Main.name(),
        // Rarely used upper ASCII, not valid UTF-8, and a large 4-byte int at
        // any alignment.
        magic_bytes: [0xbd, 0x9e, 0xa5, 0x88],
        alert_public_key: decode_key(MAIN_ALERT_KEY)?,
        default_port: 14821,
        proof_of_work_limit: pow_limit,
        subsidy_halving_interval: MAIN_SUBSIDY_HALVING_INTERVAL,
        enforce_block_upgrade_majority: 7500,
        reject_block_outdated_majority: 9000,
        to_check_block_upgrade_majority: 10000,
        miner_threads: 0,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        max_tip_age: ONE_DAY,
        modifier_update_block: 615_800,
        first_pos_block: 4_937_000,
        first_masternode_payment_block: MASTERNODE_PAYMENTS_DISABLED,
        start_masternode_payments: START_MASTERNODE_PAYMENTS,
        genesis_block_reward: GENESIS_BLOCK_REWARD,
        block_reward_start: BLOCK_REWARD_START,
        block_reward_minimum: BLOCK_REWARD_MINIMUM,
        genesis_template: template,
        genesis,
        base58_prefixes: MAIN_BASE58_PREFIXES,
        dns_seeds: MAIN_DNS_SEEDS.to_vec(),
        fixed_seeds: convert_seeds(MAIN_FIXED_SEEDS),
        checkpoints: CheckpointData::mainnet(),
        require_rpc_password: true,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard_tx: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_deprecated_rpc_field: false,
        pool_max_transactions: 3,
        spork_public_key: MAIN_SPORK_KEY,
        obfuscation_pool_dummy_address: OBFUSCATION_POOL_DUMMY_ADDRESS,
    })
}

fn testnet_params() -> Result<ChainParams> {
    let template = testnet_genesis_template();
    let pow_limit = main_pow_limit();
    let genesis = verified_genesis(NetworkId::Test, &template, TEST_GENESIS_HASH, pow_limit)?;
    debug!("Built test parameters");

    Ok(ChainParams {
        network_id: NetworkId::Test,
        network_name: NetworkId::Test.name(),
        magic_bytes: [0xf9, 0xfa, 0xa1, 0x85],
        alert_public_key: decode_key(TEST_ALERT_KEY)?,
        default_port: 24821,
        proof_of_work_limit: pow_limit,
        subsidy_halving_interval: MAIN_SUBSIDY_HALVING_INTERVAL,
        enforce_block_upgrade_majority: 51,
        reject_block_outdated_majority: 75,
        to_check_block_upgrade_majority: 100,
        miner_threads: 0,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        max_tip_age: 0x7fff_ffff,
        modifier_update_block: 51_197,
        first_pos_block: 110,
        first_masternode_payment_block: MASTERNODE_PAYMENTS_DISABLED,
        start_masternode_payments: START_MASTERNODE_PAYMENTS,
        genesis_block_reward: GENESIS_BLOCK_REWARD,
        block_reward_start: BLOCK_REWARD_START,
        block_reward_minimum: BLOCK_REWARD_MINIMUM,
        genesis_template: template,
        genesis,
        base58_prefixes: TEST_BASE58_PREFIXES,
        dns_seeds: TEST_DNS_SEEDS.to_vec(),
        fixed_seeds: convert_seeds(TEST_FIXED_SEEDS),
        checkpoints: CheckpointData::testnet(),
        require_rpc_password: true,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: false,
        require_standard_tx: false,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_deprecated_rpc_field: true,
        pool_max_transactions: 2,
        spork_public_key: TEST_SPORK_KEY,
        obfuscation_pool_dummy_address: OBFUSCATION_POOL_DUMMY_ADDRESS,
    })
}

fn regtest_params() -> Result<ChainParams> {
    let template = regtest_genesis_template();
    let pow_limit = regtest_pow_limit();
    let genesis = verified_genesis(NetworkId::RegTest, &template, REGTEST_GENESIS_HASH, pow_limit)?;
    debug!("Built regtest parameters");

    Ok(ChainParams {
        network_id: NetworkId::RegTest,
        network_name: NetworkId::RegTest.name(),
        magic_bytes: [0xdd, 0xc7, 0xa1, 0xc5],
        alert_public_key: decode_key(TEST_ALERT_KEY)?,
        default_port: 34821,
        proof_of_work_limit: pow_limit,
        subsidy_halving_interval: 150,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 1,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        max_tip_age: ONE_DAY,
        modifier_update_block: 51_197,
        first_pos_block: 20,
        first_masternode_payment_block: 20,
        start_masternode_payments: START_MASTERNODE_PAYMENTS,
        genesis_block_reward: GENESIS_BLOCK_REWARD,
        block_reward_start: BLOCK_REWARD_START,
        block_reward_minimum: BLOCK_REWARD_MINIMUM,
        genesis_template: template,
        genesis,
        base58_prefixes: TEST_BASE58_PREFIXES,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        checkpoints: CheckpointData::regtest(),
        require_rpc_password: false,
        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: true,
        require_standard_tx: false,
        mine_blocks_on_demand: true,
        skip_proof_of_work_check: false,
        testnet_deprecated_rpc_field: false,
        pool_max_transactions: 2,
        spork_public_key: TEST_SPORK_KEY,
        obfuscation_pool_dummy_address: OBFUSCATION_POOL_DUMMY_ADDRESS,
    })
}

fn unittest_params() -> Result<ChainParams> {
    let template = main_genesis_template();
    let pow_limit = main_pow_limit();
    let genesis = verified_genesis(NetworkId::UnitTest, &template, MAIN_GENESIS_HASH, pow_limit)?;
    debug!("Built unittest parameters");

    Ok(ChainParams {
        network_id: NetworkId::UnitTest,
        network_name: NetworkId::UnitTest.name(),
        magic_bytes: [0xbd, 0x9e, 0xa5, 0x88],
        alert_public_key: decode_key(MAIN_ALERT_KEY)?,
        default_port: 35821,
        proof_of_work_limit: pow_limit,
        subsidy_halving_interval: MAIN_SUBSIDY_HALVING_INTERVAL,
        enforce_block_upgrade_majority: 7500,
        reject_block_outdated_majority: 9000,
        to_check_block_upgrade_majority: 10000,
        miner_threads: 0,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        max_tip_age: ONE_DAY,
        modifier_update_block: 615_800,
        first_pos_block: 4_937_000,
        first_masternode_payment_block: MASTERNODE_PAYMENTS_DISABLED,
        start_masternode_payments: START_MASTERNODE_PAYMENTS,
        genesis_block_reward: GENESIS_BLOCK_REWARD,
        block_reward_start: BLOCK_REWARD_START,
        block_reward_minimum: BLOCK_REWARD_MINIMUM,
        genesis_template: template,
        genesis,
        base58_prefixes: MAIN_BASE58_PREFIXES,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        // Shares the main checkpoints
        checkpoints: CheckpointData::mainnet(),
        require_rpc_password: false,
        mining_requires_peers: false,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: true,
        require_standard_tx: true,
        mine_blocks_on_demand: true,
        skip_proof_of_work_check: false,
        testnet_deprecated_rpc_field: false,
        pool_max_transactions: 3,
        spork_public_key: MAIN_SPORK_KEY,
        obfuscation_pool_dummy_address: OBFUSCATION_POOL_DUMMY_ADDRESS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pow::target_to_compact;

    fn build(network: NetworkId) -> ChainParams {
        ChainParams::build(network).unwrap()
    }

    #[test]
    fn test_compact_limits_match_literals() {
        assert_eq!(target_to_compact(main_pow_limit()), MAIN_POW_LIMIT_BITS);
        assert_eq!(target_to_compact(regtest_pow_limit()), REGTEST_POW_LIMIT_BITS);
    }

    #[test]
    fn test_mainnet_params() {
        let params = build(NetworkId::Main);
        assert_eq!(params.network_name, "main");
        assert_eq!(params.magic_bytes, [0xbd, 0x9e, 0xa5, 0x88]);
        assert_eq!(params.default_port, 14821);
        assert_eq!(params.alert_public_key.len(), 65);
        assert_eq!(params.dns_seeds.len(), 3);
        assert_eq!(params.fixed_seeds.len(), MAIN_FIXED_SEEDS.len());
        assert!(params.require_rpc_password);
        assert!(params.require_standard_tx);
        assert!(!params.allow_min_difficulty_blocks);
        assert_eq!(params.difficulty_adjustment_interval(), 20);
        assert_eq!(params.genesis_hash(), MAIN_GENESIS_HASH.parse().unwrap());
    }

    #[test]
    fn test_testnet_params() {
        let params = build(NetworkId::Test);
        assert_eq!(params.default_port, 24821);
        assert_eq!(
            (
                params.enforce_block_upgrade_majority,
                params.reject_block_outdated_majority,
                params.to_check_block_upgrade_majority
            ),
            (51, 75, 100)
        );
        assert!(params.allow_min_difficulty_blocks);
        assert!(!params.require_standard_tx);
        assert!(params.testnet_deprecated_rpc_field);
        assert_eq!(params.dns_seeds.len(), 1);
        assert_eq!(params.fixed_seeds.len(), TEST_FIXED_SEEDS.len());
        assert_eq!(params.genesis.header.nonce, 332_398);
    }

    #[test]
    fn test_regtest_params() {
        let params = build(NetworkId::RegTest);
        assert_eq!(params.default_port, 34821);
        assert_eq!(params.proof_of_work_limit, U256::MAX);
        assert_eq!(params.genesis.header.nonce, 3);
        assert_eq!(params.genesis.header.time, 1_296_688_602);
        assert!(params.dns_seeds.is_empty());
        assert!(params.fixed_seeds.is_empty());
        assert!(!params.require_rpc_password);
        assert!(!params.mining_requires_peers);
        assert!(params.mine_blocks_on_demand);
        assert!(params.default_consistency_checks);
        assert_eq!(params.miner_threads, 1);
    }

    #[test]
    fn test_unittest_params() {
        let main = build(NetworkId::Main);
        let params = build(NetworkId::UnitTest);
        assert_eq!(params.network_name, "unittest");
        assert_eq!(params.default_port, 35821);
        assert_eq!(params.genesis, main.genesis);
        assert!(std::ptr::eq(params.checkpoints, main.checkpoints));
        assert!(params.dns_seeds.is_empty());
        assert!(params.fixed_seeds.is_empty());
        assert!(!params.require_rpc_password);
        assert!(params.mine_blocks_on_demand);
        assert!(params.default_consistency_checks);
    }

    #[test]
    fn test_prefix_lengths() {
        for net in NetworkId::ALL {
            let params = build(net);
            for kind in [
                Base58Type::PubkeyAddress,
                Base58Type::ScriptAddress,
                Base58Type::SecretKey,
            ] {
                assert_eq!(params.base58_prefix(kind).len(), 1);
            }
            assert_eq!(params.base58_prefix(Base58Type::ExtPublicKey).len(), 4);
            assert_eq!(params.base58_prefix(Base58Type::ExtSecretKey).len(), 4);
        }
    }

    #[test]
    fn test_block_subsidy() {
        let params = build(NetworkId::Main);

        assert_eq!(params.block_subsidy(0), 2048 * COIN);
        assert_eq!(params.block_subsidy(60_479), 2048 * COIN);
        assert_eq!(params.block_subsidy(60_480), 1024 * COIN);
        assert_eq!(params.block_subsidy(60_480 * 11), COIN);

        // Floors at the minimum reward
        assert_eq!(params.block_subsidy(60_480 * 12), COIN);
        assert_eq!(params.block_subsidy(u32::MAX), COIN);
    }
}
