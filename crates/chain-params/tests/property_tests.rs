//! Property-based tests for chain-params
//!
//! Uses proptest to verify invariants across randomized inputs

use chain_params::pow::{compact_to_target, target_to_compact};
use chain_params::seeds::{convert_seeds_at, SeedSpec6, ONE_WEEK};
use chain_params::{ChainParams, Hash256, NetworkId, U256};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate a fixed-seed table of up to 32 entries
fn seed_table_strategy() -> impl Strategy<Value = Vec<SeedSpec6>> {
    prop::collection::vec(
        (any::<[u8; 16]>(), any::<u16>()).prop_map(|(addr, port)| SeedSpec6 { addr, port }),
        0..32,
    )
}

/// Generate a 256-bit target from four random limbs
fn target_strategy() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256)
}

// ============================================================================
// Seed Properties
// ============================================================================

proptest! {
    /// Property: every converted seed is stamped between one and two weeks ago
    #[test]
    fn prop_seed_last_seen_window(
        table in seed_table_strategy(),
        now in 2 * ONE_WEEK..4_000_000_000i64,
        rng_seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let peers = convert_seeds_at(&table, now, &mut rng);

        prop_assert_eq!(peers.len(), table.len());
        for (peer, seed) in peers.iter().zip(&table) {
            prop_assert_eq!(peer.address, seed.addr);
            prop_assert_eq!(peer.port, seed.port);
            prop_assert!(peer.last_seen_timestamp <= now - ONE_WEEK);
            prop_assert!(peer.last_seen_timestamp > now - 2 * ONE_WEEK);
        }
    }
}

// ============================================================================
// Compact Encoding Properties
// ============================================================================

proptest! {
    /// Property: decoding an encoded target loses only low-order bits
    #[test]
    fn prop_compact_truncates_target(target in target_strategy()) {
        let decoded = compact_to_target(target_to_compact(target)).unwrap();
        prop_assert!(decoded <= target);

        // Re-encoding a decoded target is stable
        prop_assert_eq!(target_to_compact(decoded), target_to_compact(target));
    }

    /// Property: encoded targets never carry the sign bit
    #[test]
    fn prop_compact_is_positive(target in target_strategy()) {
        prop_assert_eq!(target_to_compact(target) & 0x0080_0000, 0);
    }
}

// ============================================================================
// Parameter Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the subsidy never increases with height and never drops below the minimum
    #[test]
    fn prop_subsidy_monotonic(a in any::<u32>(), b in any::<u32>()) {
        let params = ChainParams::build(NetworkId::Main).unwrap();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(params.block_subsidy(low) >= params.block_subsidy(high));
        prop_assert!(params.block_subsidy(high) >= params.block_reward_minimum);
    }

    /// Property: hash hex rendering parses back to the same hash
    #[test]
    fn prop_hash_hex_parses(bytes in any::<[u8; 32]>()) {
        let hash = Hash256::from_bytes(bytes);
        prop_assert_eq!(hash.to_hex().parse::<Hash256>().unwrap(), hash);
    }
}
