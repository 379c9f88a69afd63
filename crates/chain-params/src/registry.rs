//! Active network selection
//!
//! A [`NetworkRegistry`] owns the parameter sets of all four networks, built
//! and verified together when the registry is created, and remembers which one
//! is active. The process-wide registry behind [`select_params`] and
//! [`params`] is created on first use.
//!
//! Selection is expected to happen during single-threaded startup. Switching
//! networks while other threads read the active parameters is not
//! synchronised beyond the individual lock operations.

use crate::{ChainParams, Error, NetworkId, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Parameter sets of every network plus the active selection
pub struct NetworkRegistry {
    main: Arc<ChainParams>,
    test: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    unit_test: RwLock<Arc<ChainParams>>,
    active: RwLock<Option<NetworkId>>,
}

impl NetworkRegistry {
    /// Build and verify all four parameter sets; nothing is selected yet
    pub fn new() -> Result<Self> {
        Ok(Self {
            main: Arc::new(ChainParams::build(NetworkId::Main)?),
            test: Arc::new(ChainParams::build(NetworkId::Test)?),
            regtest: Arc::new(ChainParams::build(NetworkId::RegTest)?),
            unit_test: RwLock::new(Arc::new(ChainParams::build(NetworkId::UnitTest)?)),
            active: RwLock::new(None),
        })
    }

    /// Make `network` the active network
    pub fn select(&self, network: NetworkId) {
        let previous = self.active.write().replace(network);
        match previous {
            Some(prev) if prev != network => {
                info!("Switching active network from {} to {}", prev, network)
            }
            Some(_) => {}
            None => info!("Selected network {}", network),
        }
    }

    /// Select a network named by user input.
    ///
    /// Unknown names leave the current selection untouched.
    pub fn select_by_name(&self, name: &str) -> Result<NetworkId> {
        let network = name.parse::<NetworkId>().map_err(|e| {
            warn!("Refusing network selection: {}", e);
            e
        })?;
        self.select(network);
        Ok(network)
    }

    /// Currently selected network
    pub fn active_network(&self) -> Option<NetworkId> {
        *self.active.read()
    }

    /// Parameters of the active network
    pub fn try_active(&self) -> Result<Arc<ChainParams>> {
        self.active_network()
            .map(|network| self.parameters_for(network))
            .ok_or(Error::NetworkNotSelected)
    }

    /// Parameters of the active network.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected.
    pub fn active(&self) -> Arc<ChainParams> {
        self.try_active().unwrap_or_else(|err| fatal(err))
    }

    /// Parameters of `network`, whether or not it is active
    pub fn parameters_for(&self, network: NetworkId) -> Arc<ChainParams> {
        match network {
            NetworkId::Main => Arc::clone(&self.main),
            NetworkId::Test => Arc::clone(&self.test),
            NetworkId::RegTest => Arc::clone(&self.regtest),
            NetworkId::UnitTest => Arc::clone(&self.unit_test.read()),
        }
    }

    /// Setter handle for the unit-test parameters, available only while the
    /// unit-test network is active
    pub fn try_modifiable_active(&self) -> Result<ModifiableParams<'_>> {
        match self.active_network() {
            Some(NetworkId::UnitTest) => Ok(ModifiableParams {
                params: &self.unit_test,
            }),
            Some(other) => Err(Error::NotUnitTestNetwork(other)),
            None => Err(Error::NetworkNotSelected),
        }
    }

    /// Setter handle for the unit-test parameters.
    ///
    /// # Panics
    ///
    /// Panics unless the unit-test network is active.
    pub fn modifiable_active(&self) -> ModifiableParams<'_> {
        self.try_modifiable_active().unwrap_or_else(|err| fatal(err))
    }
}

/// Setters for the unit-test network's tunable parameters.
///
/// Each call replaces the shared parameter set; `Arc`s handed out earlier
/// keep the values they were taken with.
pub struct ModifiableParams<'a> {
    params: &'a RwLock<Arc<ChainParams>>,
}

impl ModifiableParams<'_> {
    fn update(&self, f: impl FnOnce(&mut ChainParams)) {
        let mut guard = self.params.write();
        f(Arc::make_mut(&mut guard));
    }

    /// Set blocks between subsidy halvings
    pub fn set_subsidy_halving_interval(&self, value: u32) {
        self.update(|p| p.subsidy_halving_interval = value);
    }

    /// Set the enforce-upgrade supermajority
    pub fn set_enforce_block_upgrade_majority(&self, value: u32) {
        self.update(|p| p.enforce_block_upgrade_majority = value);
    }

    /// Set the reject-outdated supermajority
    pub fn set_reject_block_outdated_majority(&self, value: u32) {
        self.update(|p| p.reject_block_outdated_majority = value);
    }

    /// Set the supermajority window
    pub fn set_to_check_block_upgrade_majority(&self, value: u32) {
        self.update(|p| p.to_check_block_upgrade_majority = value);
    }

    /// Toggle default consistency checks
    pub fn set_default_consistency_checks(&self, value: bool) {
        self.update(|p| p.default_consistency_checks = value);
    }

    /// Toggle minimum-difficulty blocks
    pub fn set_allow_min_difficulty_blocks(&self, value: bool) {
        self.update(|p| p.allow_min_difficulty_blocks = value);
    }

    /// Toggle proof-of-work checks
    pub fn set_skip_proof_of_work_check(&self, value: bool) {
        self.update(|p| p.skip_proof_of_work_check = value);
    }
}

fn fatal(err: Error) -> ! {
    error!("{}", err);
    panic!("{}", err);
}

static REGISTRY: Lazy<NetworkRegistry> =
    Lazy::new(|| NetworkRegistry::new().unwrap_or_else(|err| fatal(err)));

/// The process-wide registry.
///
/// # Panics
///
/// The first call panics if any genesis block fails verification.
pub fn global_registry() -> &'static NetworkRegistry {
    &REGISTRY
}

/// Select the process-wide active network
pub fn select_params(network: NetworkId) {
    global_registry().select(network);
}

/// Select the process-wide active network from user input
pub fn select_params_from_name(name: &str) -> Result<NetworkId> {
    global_registry().select_by_name(name)
}

/// Parameters of the process-wide active network.
///
/// # Panics
///
/// Panics if no network has been selected.
pub fn params() -> Arc<ChainParams> {
    global_registry().active()
}

/// Parameters of the process-wide active network, if one is selected
pub fn try_params() -> Result<Arc<ChainParams>> {
    global_registry().try_active()
}

/// Parameters of `network` from the process-wide registry
pub fn params_for(network: NetworkId) -> Arc<ChainParams> {
    global_registry().parameters_for(network)
}

/// Unit-test setters on the process-wide registry.
///
/// # Panics
///
/// Panics unless the unit-test network is active.
pub fn modifiable_params() -> ModifiableParams<'static> {
    global_registry().modifiable_active()
}

/// Unit-test setters on the process-wide registry, if the unit-test network
/// is active
pub fn try_modifiable_params() -> Result<ModifiableParams<'static>> {
    global_registry().try_modifiable_active()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> NetworkRegistry {
        NetworkRegistry::new().unwrap()
    }

    #[test]
    fn test_nothing_selected() {
        let registry = registry();
        assert_eq!(registry.active_network(), None);
        assert!(matches!(registry.try_active(), Err(Error::NetworkNotSelected)));
        assert!(matches!(
            registry.try_modifiable_active(),
            Err(Error::NetworkNotSelected)
        ));
    }

    #[test]
    #[should_panic(expected = "No network selected")]
    fn test_active_before_select_panics() {
        registry().active();
    }

    #[test]
    fn test_select_each_network() {
        let registry = registry();
        for network in NetworkId::ALL {
            registry.select(network);
            assert_eq!(registry.active().network_id, network);
        }
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let registry = registry();
        registry.select(NetworkId::Main);
        let first = registry.active();
        registry.select(NetworkId::Main);
        let second = registry.active();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_select_by_name() {
        let registry = registry();
        assert_eq!(registry.select_by_name("testnet").unwrap(), NetworkId::Test);
        assert_eq!(registry.active().default_port, 24821);

        assert!(matches!(
            registry.select_by_name("nonsense"),
            Err(Error::InvalidNetwork(_))
        ));
        assert_eq!(registry.active_network(), Some(NetworkId::Test));
    }

    #[test]
    fn test_parameters_for_ignores_selection() {
        let registry = registry();
        registry.select(NetworkId::RegTest);
        assert_eq!(registry.parameters_for(NetworkId::Main).default_port, 14821);
        assert_eq!(registry.active().default_port, 34821);
    }

    #[test]
    fn test_modifiable_only_for_unittest() {
        let registry = registry();
        for network in [NetworkId::Main, NetworkId::Test, NetworkId::RegTest] {
            registry.select(network);
            assert!(matches!(
                registry.try_modifiable_active(),
                Err(Error::NotUnitTestNetwork(n)) if n == network
            ));
        }

        registry.select(NetworkId::UnitTest);
        assert!(registry.try_modifiable_active().is_ok());
    }

    #[test]
    #[should_panic(expected = "cannot be modified")]
    fn test_modifiable_on_main_panics() {
        let registry = registry();
        registry.select(NetworkId::Main);
        registry.modifiable_active();
    }

    #[test]
    fn test_setters_update_unittest() {
        let registry = registry();
        registry.select(NetworkId::UnitTest);
        let before = registry.active();

        let handle = registry.modifiable_active();
        handle.set_subsidy_halving_interval(10);
        handle.set_enforce_block_upgrade_majority(1);
        handle.set_reject_block_outdated_majority(2);
        handle.set_to_check_block_upgrade_majority(3);
        handle.set_default_consistency_checks(false);
        handle.set_allow_min_difficulty_blocks(true);
        handle.set_skip_proof_of_work_check(true);

        let after = registry.active();
        assert_eq!(after.subsidy_halving_interval, 10);
        assert_eq!(after.enforce_block_upgrade_majority, 1);
        assert_eq!(after.reject_block_outdated_majority, 2);
        assert_eq!(after.to_check_block_upgrade_majority, 3);
        assert!(!after.default_consistency_checks);
        assert!(after.allow_min_difficulty_blocks);
        assert!(after.skip_proof_of_work_check);

        // earlier snapshot unchanged, main untouched
        assert_eq!(before.subsidy_halving_interval, 60_480);
        assert_eq!(
            registry.parameters_for(NetworkId::Main).subsidy_halving_interval,
            60_480
        );
    }
}
