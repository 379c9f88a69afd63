//! Compact difficulty encoding
//!
//! Difficulty targets travel in block headers as a 32-bit "compact" value:
//! one size byte followed by a 23-bit mantissa and a sign bit.

use crate::{Error, Hash256, Result};
use primitive_types::U256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Encode a target in compact form
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        target.low_u64() << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3))).low_u64()
    };

    // The mantissa is signed; keep it positive by growing the exponent.
    if compact & u64::from(SIGN_BIT) != 0 {
        compact >>= 8;
        size += 1;
    }

    (compact as u32) | ((size as u32) << 24)
}

/// Decode a compact target.
///
/// Negative values and values that do not fit in 256 bits are rejected.
pub fn compact_to_target(bits: u32) -> Result<U256> {
    let size = bits >> 24;
    let mut word = bits & MANTISSA_MASK;

    let negative = word != 0 && bits & SIGN_BIT != 0;
    let overflow =
        word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return Err(Error::InvalidCompact(bits));
    }

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else {
        U256::from(word) << (8 * (size as usize - 3))
    };
    Ok(target)
}

/// Check that `hash` satisfies the target encoded in `bits` and that the
/// target itself is no easier than `limit`.
pub fn check_proof_of_work(hash: &Hash256, bits: u32, limit: U256) -> Result<()> {
    let target = compact_to_target(bits)?;
    if target.is_zero() {
        return Err(Error::InvalidCompact(bits));
    }
    if target > limit {
        return Err(Error::ProofOfWork(format!(
            "target {:#010x} above proof-of-work limit {:#010x}",
            bits,
            target_to_compact(limit)
        )));
    }
    if hash.to_u256() > target {
        return Err(Error::ProofOfWork(format!(
            "hash {} does not meet target {:#010x}",
            hash, bits
        )));
    }
    Ok(())
}
