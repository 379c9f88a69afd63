//! Network identifiers

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Networks with a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression test network
    RegTest,
    /// In-process unit test network
    UnitTest,
}

impl NetworkId {
    /// Every network, in declaration order
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Test,
        NetworkId::RegTest,
        NetworkId::UnitTest,
    ];

    /// Short identifier used in logs and data directories
    pub const fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::RegTest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }

    /// Resolve the `-regtest` / `-testnet` switches to a network.
    ///
    /// Setting both is rejected; neither selects main.
    pub fn from_flags(regtest: bool, testnet: bool) -> Result<Self> {
        match (regtest, testnet) {
            (true, true) => Err(Error::ConflictingNetworkFlags),
            (true, false) => Ok(NetworkId::RegTest),
            (false, true) => Ok(NetworkId::Test),
            (false, false) => Ok(NetworkId::Main),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::RegTest),
            "unittest" => Ok(NetworkId::UnitTest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}
