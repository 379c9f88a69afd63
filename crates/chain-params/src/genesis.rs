//! Genesis block construction and verification
//!
//! Every network's genesis block is rebuilt from a literal template and
//! checked against its hard-coded merkle root and hash. The template values
//! (timestamp, nonce, bits) were chosen up front so that the resulting hash
//! meets the network's proof-of-work limit; nothing here depends on the clock
//! or on randomness.

use crate::params::Amount;
use crate::pow::check_proof_of_work;
use crate::script::{Script, OP_CHECKSIG};
use crate::{sha256d, Error, Hash256, NetworkId, Result};
use primitive_types::U256;
use serde::Serialize;
use tracing::debug;

/// First push of the genesis coinbase scriptSig
pub const COINBASE_SCRIPT_BITS: i64 = 486_604_799;

/// Second push of the genesis coinbase scriptSig
pub const COINBASE_SCRIPT_EXTRA: i64 = 4;

/// Inputs needed to build a genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisTemplate {
    /// Block format version
    pub version: i32,
    /// Block timestamp (Unix epoch)
    pub timestamp: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Nonce that makes the hash meet `bits`
    pub nonce: u32,
    /// Headline embedded in the coinbase scriptSig
    pub coinbase_message: &'static str,
    /// Hex public key paid by the coinbase output
    pub output_pubkey: &'static str,
    /// Coinbase output value
    pub reward: Amount,
}

/// The genesis coinbase: one null-prevout input, one pay-to-pubkey output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinbaseTransaction {
    /// Transaction format version
    pub version: i32,
    /// Input script
    pub script_sig: Script,
    /// Input sequence
    pub sequence: u32,
    /// Output value
    pub value: Amount,
    /// Output script
    pub script_pubkey: Script,
    /// Lock time
    pub lock_time: u32,
}

impl CoinbaseTransaction {
    /// Assemble the coinbase for a template
    pub fn from_template(template: &GenesisTemplate) -> Result<Self> {
        let pubkey = hex::decode(template.output_pubkey)
            .map_err(|e| Error::InvalidHex(format!("genesis output key: {}", e)))?;

        let script_sig = Script::new()
            .push_int(COINBASE_SCRIPT_BITS)
            .push_num(COINBASE_SCRIPT_EXTRA)
            .push_slice(template.coinbase_message.as_bytes());
        let script_pubkey = Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG);

        Ok(Self {
            version: 1,
            script_sig,
            sequence: u32::MAX,
            value: template.reward,
            script_pubkey,
            lock_time: 0,
        })
    }

    /// Legacy wire serialization
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64 + self.script_sig.len() + self.script_pubkey.len());
        out.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut out, 1);
        out.extend_from_slice(Hash256::ZERO.as_bytes());
        out.extend_from_slice(&u32::MAX.to_le_bytes());
        write_compact_size(&mut out, self.script_sig.len() as u64);
        out.extend_from_slice(self.script_sig.as_bytes());
        out.extend_from_slice(&self.sequence.to_le_bytes());

        write_compact_size(&mut out, 1);
        out.extend_from_slice(&self.value.to_le_bytes());
        write_compact_size(&mut out, self.script_pubkey.len() as u64);
        out.extend_from_slice(self.script_pubkey.as_bytes());

        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    /// Transaction id
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.serialize())
    }
}

/// 80-byte block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    /// Block format version
    pub version: i32,
    /// Parent hash, zero for genesis
    pub prev_block: Hash256,
    /// Merkle root of the block's transactions
    pub merkle_root: Hash256,
    /// Timestamp (Unix epoch)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Nonce
    pub nonce: u32,
}

impl BlockHeader {
    /// Size of the serialized header
    pub const SIZE: usize = 80;

    /// Wire serialization
    pub fn serialize(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_block.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Block hash
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.serialize())
    }
}

/// A built genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisBlock {
    /// Header
    pub header: BlockHeader,
    /// The only transaction
    pub coinbase: CoinbaseTransaction,
    /// Hash of `header`
    pub hash: Hash256,
}

impl GenesisBlock {
    /// Build the genesis block described by `template`
    pub fn build(template: &GenesisTemplate) -> Result<Self> {
        let coinbase = CoinbaseTransaction::from_template(template)?;
        let merkle_root = merkle_root(&[coinbase.txid()]);

        let header = BlockHeader {
            version: template.version,
            prev_block: Hash256::ZERO,
            merkle_root,
            time: template.timestamp,
            bits: template.bits,
            nonce: template.nonce,
        };
        let hash = header.hash();

        Ok(Self {
            header,
            coinbase,
            hash,
        })
    }

    /// Merkle root
    pub fn merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }

    /// Check the block against the network's hard-coded constants and its
    /// own proof of work.
    pub fn verify(
        &self,
        network: NetworkId,
        expected_merkle_root: Hash256,
        expected_hash: Hash256,
        pow_limit: U256,
    ) -> Result<()> {
        if self.header.merkle_root != expected_merkle_root {
            return Err(Error::GenesisMerkleMismatch {
                network,
                expected: expected_merkle_root,
                actual: self.header.merkle_root,
            });
        }
        if self.hash != expected_hash {
            return Err(Error::GenesisHashMismatch {
                network,
                expected: expected_hash,
                actual: self.hash,
            });
        }
        check_proof_of_work(&self.hash, self.header.bits, pow_limit)?;

        debug!("Verified {} genesis {}", network, self.hash);
        Ok(())
    }
}

/// Merkle root over transaction ids, duplicating the last entry of odd levels
pub fn merkle_root(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return Hash256::ZERO;
    }

    let mut level = txids.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let right = pair.get(1).unwrap_or(&pair[0]);
                let mut buf = [0u8; 64];
                buf[..32].copy_from_slice(pair[0].as_bytes());
                buf[32..].copy_from_slice(right.as_bytes());
                sha256d(&buf)
            })
            .collect();
    }
    level[0]
}

fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{main_genesis_template, GENESIS_MERKLE_ROOT, MAIN_GENESIS_HASH};
    use crate::COIN;

    fn main_genesis() -> GenesisBlock {
        GenesisBlock::build(&main_genesis_template()).unwrap()
    }

    #[test]
    fn test_coinbase_layout() {
        let tx = main_genesis().coinbase;
        let raw = tx.serialize();
        assert_eq!(raw.len(), 201);

        // version, one input, null prevout
        assert_eq!(&raw[..5], &[1, 0, 0, 0, 1]);
        assert!(raw[5..37].iter().all(|b| *b == 0));
        assert_eq!(&raw[37..41], &[0xff; 4]);

        // scriptSig starts with the bits push and the extra-nonce push
        assert_eq!(raw[41] as usize, tx.script_sig.len());
        assert_eq!(&raw[42..49], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);

        assert_eq!(tx.value, COIN);
        assert_eq!(tx.script_pubkey.len(), 67);
        assert_eq!(*tx.script_pubkey.as_bytes().last().unwrap(), OP_CHECKSIG);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(main_genesis(), main_genesis());
    }

    #[test]
    fn test_main_genesis_matches_constants() {
        let block = main_genesis();
        assert_eq!(block.merkle_root(), GENESIS_MERKLE_ROOT.parse().unwrap());
        assert_eq!(block.hash, MAIN_GENESIS_HASH.parse().unwrap());
        assert_eq!(block.header.prev_block, Hash256::ZERO);
        assert_eq!(block.header.version, 112);
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let block = main_genesis();
        let merkle: Hash256 = GENESIS_MERKLE_ROOT.parse().unwrap();
        let limit = U256::MAX >> 20;

        assert!(block.verify(NetworkId::Main, merkle, block.hash, limit).is_ok());

        let err = block
            .verify(NetworkId::Main, Hash256::ZERO, block.hash, limit)
            .unwrap_err();
        assert!(matches!(err, Error::GenesisMerkleMismatch { .. }));

        let err = block
            .verify(NetworkId::Main, merkle, Hash256::ZERO, limit)
            .unwrap_err();
        assert!(matches!(err, Error::GenesisHashMismatch { .. }));
    }

    #[test]
    fn test_changed_nonce_changes_hash() {
        let mut template = main_genesis_template();
        template.nonce += 1;
        let other = GenesisBlock::build(&template).unwrap();
        let block = main_genesis();
        assert_eq!(other.merkle_root(), block.merkle_root());
        assert_ne!(other.hash, block.hash);
    }

    #[test]
    fn test_bad_pubkey_hex() {
        let mut template = main_genesis_template();
        template.output_pubkey = "not hex";
        assert!(matches!(
            GenesisBlock::build(&template),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn test_merkle_root_pairs() {
        let a = sha256d(b"a");
        let b = sha256d(b"b");
        let c = sha256d(b"c");
        assert_eq!(merkle_root(&[a]), a);

        let mut buf = Vec::new();
        buf.extend_from_slice(a.as_bytes());
        buf.extend_from_slice(b.as_bytes());
        let ab = sha256d(&buf);
        assert_eq!(merkle_root(&[a, b]), ab);

        // odd levels pair the last hash with itself
        assert_eq!(merkle_root(&[a, b, c]), merkle_root(&[a, b, c, c]));
    }

    #[test]
    fn test_compact_size() {
        let mut out = Vec::new();
        write_compact_size(&mut out, 0xfc);
        write_compact_size(&mut out, 0xfd);
        write_compact_size(&mut out, 0x1_0000);
        assert_eq!(out, vec![0xfc, 0xfd, 0xfd, 0x00, 0xfe, 0x00, 0x00, 0x01, 0x00]);
    }
}
