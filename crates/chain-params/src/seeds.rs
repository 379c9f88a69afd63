//! Bootstrap peers
//!
//! DNS seeds are resolved by the peer-discovery layer. Fixed seeds are a
//! compiled-in table of addresses used when DNS seeding yields nothing; they
//! are handed out with a last-seen time one to two weeks in the past so that
//! freshly gossiped addresses quickly take priority over them.

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use tracing::debug;

/// One week in seconds
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A DNS seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Display name
    pub name: &'static str,
    /// Host queried for peer addresses
    pub host: &'static str,
}

impl DnsSeed {
    /// Seed whose name and host are the same
    pub const fn new(host: &'static str) -> Self {
        Self { name: host, host }
    }
}

/// Compact fixed-seed record: IPv6 (or IPv4-mapped) address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    /// Address in network byte order
    pub addr: [u8; 16],
    /// TCP port
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 address mapped into IPv6 space
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }
}

/// A bootstrap peer address with its advertised last-seen time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedPeer {
    /// Address in network byte order
    pub address: [u8; 16],
    /// TCP port
    pub port: u16,
    /// Last-seen time (Unix epoch)
    pub last_seen_timestamp: i64,
}

impl SeedPeer {
    /// Socket address, unmapping IPv4-mapped addresses
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.address);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Convert a fixed-seed table into peer addresses stamped relative to now
pub fn convert_seeds(table: &[SeedSpec6]) -> Vec<SeedPeer> {
    convert_seeds_at(table, Utc::now().timestamp(), &mut rand::thread_rng())
}

/// Convert a fixed-seed table using an explicit clock and random source.
///
/// Each peer's last-seen time is `now - ONE_WEEK - r` with `r` uniform in
/// `[0, ONE_WEEK)`.
pub fn convert_seeds_at<R: Rng>(table: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<SeedPeer> {
    let peers: Vec<SeedPeer> = table
        .iter()
        .map(|seed| SeedPeer {
            address: seed.addr,
            port: seed.port,
            last_seen_timestamp: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect();

    debug!("Converted {} fixed seeds", peers.len());
    peers
}

/// Main network fixed seeds
pub const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[
    SeedSpec6::ipv4(198, 51, 100, 17, 14821),
    SeedSpec6::ipv4(198, 51, 100, 42, 14821),
    SeedSpec6::ipv4(203, 0, 113, 8, 14821),
    SeedSpec6::ipv4(203, 0, 113, 77, 14821),
    SeedSpec6 {
        addr: [
            0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x21,
        ],
        port: 14821,
    },
];

/// Test network fixed seeds
pub const TEST_FIXED_SEEDS: &[SeedSpec6] = &[
    SeedSpec6::ipv4(198, 51, 100, 90, 24821),
    SeedSpec6::ipv4(203, 0, 113, 90, 24821),
];
