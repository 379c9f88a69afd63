//! Blockchain checkpoints
//!
//! A checkpoint pins the block hash at a given height. Chains that disagree
//! with a checkpoint are rejected by the validation engine; this module only
//! supplies the data.

use crate::{Error, Hash256, Result};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Slowdown applied to blocks verified past the last checkpoint
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// A blockchain checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    /// Block height
    pub height: u32,
    /// Block hash
    pub hash: Hash256,
}

/// Checkpoints of one network plus the statistics used for progress estimates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointData {
    checkpoints: Vec<Checkpoint>,
    /// Timestamp of the last checkpoint block (Unix epoch)
    pub last_checkpoint_timestamp: i64,
    /// Transactions between genesis and the last checkpoint
    pub total_transactions_to_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub estimated_transactions_per_day: f64,
}

impl CheckpointData {
    /// Create checkpoint data from `(height, hash)` literals.
    ///
    /// Entries are kept in declaration order, which must be ascending.
    pub fn new(
        entries: &[(u32, &str)],
        last_checkpoint_timestamp: i64,
        total_transactions_to_checkpoint: u64,
        estimated_transactions_per_day: f64,
    ) -> Result<Self> {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| {
                Ok(Checkpoint {
                    height: *height,
                    hash: hash.parse()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            checkpoints,
            last_checkpoint_timestamp,
            total_transactions_to_checkpoint,
            estimated_transactions_per_day,
        })
    }

    /// Get mainnet checkpoints
    pub fn mainnet() -> &'static Self {
        &MAIN
    }

    /// Get testnet checkpoints
    pub fn testnet() -> &'static Self {
        &TEST
    }

    /// Get regtest checkpoints
    pub fn regtest() -> &'static Self {
        &REGTEST
    }

    /// Hash pinned at exactly `height`
    pub fn lookup(&self, height: u32) -> Option<Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |cp| cp.height)
            .ok()
            .map(|idx| self.checkpoints[idx].hash)
    }

    /// False only when a checkpoint exists at `height` with another hash
    pub fn check_block(&self, height: u32, hash: &Hash256) -> bool {
        self.lookup(height).map_or(true, |pinned| pinned == *hash)
    }

    /// Get checkpoint at or before given height
    pub fn checkpoint_at_or_before(&self, height: u32) -> Result<&Checkpoint> {
        self.checkpoints
            .iter()
            .rev()
            .find(|cp| cp.height <= height)
            .ok_or(Error::CheckpointNotFound(height))
    }

    /// Get all checkpoints
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Get latest checkpoint
    pub fn last_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// Height of the latest checkpoint, 0 when there is none
    pub fn last_height(&self) -> u32 {
        self.last_checkpoint().map_or(0, |cp| cp.height)
    }

    /// Heights strictly increase in declaration order
    pub fn is_strictly_ascending(&self) -> bool {
        self.checkpoints.windows(2).all(|w| w[0].height < w[1].height)
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Estimate verification progress in `[0, 1]` for a tip that has
    /// `chain_tx` transactions and timestamp `block_time`.
    ///
    /// Work up to the last checkpoint counts as cheap; work after it is
    /// weighted by the signature-check factor when `sigchecks` is set.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        block_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let per_day = self.estimated_transactions_per_day;
        let checkpoint_tx = self.total_transactions_to_checkpoint;

        let (work_before, work_after) = if chain_tx <= checkpoint_tx {
            let cheap_before = chain_tx as f64;
            let cheap_after = (checkpoint_tx - chain_tx) as f64;
            let expensive_after =
                (now - self.last_checkpoint_timestamp) as f64 / 86_400.0 * per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = checkpoint_tx as f64;
            let expensive_before = (chain_tx - checkpoint_tx) as f64;
            let expensive_after = (now - block_time) as f64 / 86_400.0 * per_day;
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

const MAIN_CHECKPOINTS: &[(u32, &str)] = &[
    (0, crate::params::MAIN_GENESIS_HASH),
    (41_056, "000000001f12305bf0443551030d9f18c5d7b1a6b7eb8e899b1b26fc45924ade"),
    (81_847, "00000000c164428877cd4d46e2facc881b6b0a803e44a02c1f3b279ae7d58c32"),
    (308_484, "000000016bd2ef95ae4a456c6114cd7736a4219de5b75b2139c840650144e143"),
    (380_481, "00000003064d1fdbe86f35bfce8c54f88a80ef773e820ca86ae820ed6c4defcc"),
    (404_998, "000000004a815d04f437dd83d84866a8a07865f5b47030668a8096df0615361f"),
    (411_932, "000000001f3c7ec7251ebc1670fb3f772b42e25356fa02468c02c89199617cd5"),
    (423_094, "0000000007001e561197a35026b7c9bbaf0b9a1c918a41d9e7d638e44459f116"),
    (443_157, "000000000b103e119485969439ab2203b5578be3fb8b3aab512ebebaca1bce81"),
    (458_433, "000000000318a428560180bb8166321a6b20ae78fc0a9b3c560d30476859b2b5"),
    (464_836, "00000000079e9a16f173bf610f2ceddc5659aa7e9df2366dea01e346c37f9692"),
    (467_282, "0000000004a17401913be0aa29af7ace3335d58a846938d4fee0c749e4828d1d"),
    (473_033, "000000000515c71eb7c3de0574d5f6c632d8de9053c626aba22ae3a9eff67e9c"),
    (538_178, "000000000a13e56dc5d7962d4e3a852ff24055aa15096085d8173faf95172f4d"),
    (621_138, "0000000016a7d31cabbc6257c53d3b58f82f1a897d79066dabcb5ce5b031f8ca"),
    (714_001, "000000001d2b41db149991d5e01aee448042de6ac94e12c5ae6299e4fb129f5a"),
    (797_370, "000000001b24a2f70ce1e50c19d5f3dd77fbd6e0f0a3eb61b95ceaafb8435636"),
    (895_901, "0000000016db7c64fb4bb6475fbb06dca656d32b7864a2d045612660106d411c"),
    (972_235, "000000004e92bead093b946351cd2e7125d23e36042687497561db00a77b6ae8"),
    (1_161_321, "000000001f0e7c685ceaf5c5b04b1ebed2a1d8d588715ef6f6877af0015a6f2c"),
    (1_620_970, "0000000091dd05190ee8abb2fd4a946938ccd6401d16406e417546e19d2165ab"),
    (2_046_709, "000000007f6f146dbe428b0e277847889921d362844d52ade87049839711e026"),
    (2_356_006, "00000000f6b58b63543b61032c677fa133e6d6783b2096c587068a233377e91a"),
    (2_434_772, "0000000017564063a7ceec746f5cfb95d8f7803b1309a505a617d82ba2d3abbd"),
    (2_437_394, "00000000dfcafbaa8c160fd07ab80e44660ceccd12d760b8b5fe6ab1aeec52d6"),
    (3_235_865, "000000010f18f93a614a12dfe936319f52aa447f752836f4fa896310741dd32b"),
    (4_101_607, "00000000228a00758187ef66622ca31893c2614a053e2e46efd955222d7fdf57"),
    (4_223_071, "000000010f385d545029761683a3063c554e5f127a44e1cda99c9909ea4ff549"),
    (4_256_000, "0000000024cfefc26f5c55f04e78a27816081b29b3fd0cb4ff812032bf95befd"),
    (5_320_861, "0000000001ba15cfd8f3cc6bbde4f6fa0ecdd5b0eb503587565b24330cfef280"),
    (5_726_754, "00000000009210cf1ebe325a15b7beba268d6e860ad74d916b89be2e41f094f6"),
    (6_128_520, "0000000000b7722e920a6c48e55b49551586955d4acf212bf408194ac403b383"),
    (6_581_324, "000000000044a93c4676050318c71bed95e25320f684a95195eadf613062fa9e"),
    (7_212_542, "00000000000a65f3b88cc5e34d53cd65137d0979b887242b81c065a1393eb209"),
    (7_695_122, "0000000000365925f33c0e0d3a80d257fe2c0505527dd6ab1bebcc73129517e0"),
    (8_847_099, "00000000001f2df77d72e91a280e8f76f2a6d0d06784d25440f8ee7871fe090d"),
    (8_972_995, "00000000003fb40d2d5bad8ffe10edc38e3199e9d853e2d5233927a95274d71d"),
    (9_647_674, "00000000001c8dca3a8ee9066fb9c331e0c2c94ed84147ab66403a9a6db6652a"),
    (9_805_010, "000000000016a73a0a6b368c1b9ca4d23478448c014bb686df6b84748c92b488"),
    (10_334_292, "00000000009009fc8b17a8e72be8b707f4f46e51a409e2fea240280f8cf31f6d"),
    (10_774_018, "00000000002b93ce063829f6c0fcc8b4199d49d78e252ef8b1b456a557c97b33"),
    (11_637_799, "00000000003c25d0be1ec2a6474c3a95d6ba33946177f5bdd7b010be5192f291"),
    (11_739_375, "000003ee6666750dd0ad49899b879bea6f618fc26c848d57f33d02664aabaf1c"),
];

const TEST_CHECKPOINTS: &[(u32, &str)] = &[(0, crate::params::TEST_GENESIS_HASH)];

const REGTEST_CHECKPOINTS: &[(u32, &str)] = &[(0, crate::params::REGTEST_GENESIS_HASH)];

// Literal tables; every entry is parsed by the tests below.
static MAIN: Lazy<CheckpointData> = Lazy::new(|| {
    CheckpointData::new(MAIN_CHECKPOINTS, 1_704_474_839, 5_076_713, 2880.0)
        .expect("main checkpoint table is well formed")
});

static TEST: Lazy<CheckpointData> = Lazy::new(|| {
    CheckpointData::new(TEST_CHECKPOINTS, 1_373_481_000, 0, 2880.0)
        .expect("test checkpoint table is well formed")
});

static REGTEST: Lazy<CheckpointData> = Lazy::new(|| {
    CheckpointData::new(REGTEST_CHECKPOINTS, 0, 0, 0.0)
        .expect("regtest checkpoint table is well formed")
});
