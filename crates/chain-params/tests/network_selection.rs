//! Process-wide network selection
//!
//! The global registry is shared by every test in this binary, so the whole
//! selection sequence runs inside a single test.

use chain_params::{
    modifiable_params, params, params_for, select_params, select_params_from_name,
    try_modifiable_params, try_params, Error, NetworkId,
};
use std::sync::Arc;

#[test]
fn test_global_selection_sequence() {
    assert!(matches!(try_params(), Err(Error::NetworkNotSelected)));

    for (network, port) in [
        (NetworkId::Main, 14821),
        (NetworkId::Test, 24821),
        (NetworkId::RegTest, 34821),
        (NetworkId::UnitTest, 35821),
    ] {
        select_params(network);
        let active = params();
        assert_eq!(active.network_id, network);
        assert_eq!(active.default_port, port);
        assert_eq!(active.checkpoints.lookup(0), Some(active.genesis_hash()));

        if network == NetworkId::UnitTest {
            assert!(try_modifiable_params().is_ok());
        } else {
            assert!(matches!(
                try_modifiable_params(),
                Err(Error::NotUnitTestNetwork(n)) if n == network
            ));
        }
    }

    // Selecting twice hands back the same parameter set
    select_params(NetworkId::Main);
    let first = params();
    select_params(NetworkId::Main);
    assert!(Arc::ptr_eq(&first, &params()));

    // Unknown names keep the current selection
    assert!(select_params_from_name("mainnet2").is_err());
    assert_eq!(params().network_id, NetworkId::Main);
    assert_eq!(select_params_from_name("REGTEST").unwrap(), NetworkId::RegTest);
    assert_eq!(params().network_id, NetworkId::RegTest);

    // Unit-test overrides are visible through both entry points
    select_params(NetworkId::UnitTest);
    modifiable_params().set_subsidy_halving_interval(100);
    modifiable_params().set_skip_proof_of_work_check(true);
    assert_eq!(params().subsidy_halving_interval, 100);
    assert!(params_for(NetworkId::UnitTest).skip_proof_of_work_check);
    assert_eq!(params_for(NetworkId::Main).subsidy_halving_interval, 60_480);
    assert!(!params_for(NetworkId::Main).skip_proof_of_work_check);
}
