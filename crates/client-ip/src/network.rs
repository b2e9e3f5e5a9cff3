//! IPv4 address classification.
//!
//! Decides whether a candidate token is a globally routable IPv4 address.
//! The blocked ranges follow the IANA IPv4 Special-Purpose Address Registry
//! (every block not marked globally reachable), plus multicast.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::AddressError;

/// A block from the special-purpose address registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialRange {
    pub network: Ipv4Addr,
    pub prefix_len: u8,
    pub name: &'static str,
}

impl SpecialRange {
    const fn new(a: u8, b: u8, c: u8, d: u8, prefix_len: u8, name: &'static str) -> Self {
        Self {
            network: Ipv4Addr::new(a, b, c, d),
            prefix_len,
            name,
        }
    }

    fn mask(&self) -> u32 {
        u32::MAX
            .checked_shl(32 - u32::from(self.prefix_len))
            .unwrap_or(0)
    }

    /// Whether `ip` falls inside this block.
    pub fn contains(&self, ip: &Ipv4Addr) -> bool {
        let mask = self.mask();
        u32::from(*ip) & mask == u32::from(self.network) & mask
    }
}

impl fmt::Display for SpecialRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.network, self.prefix_len, self.name)
    }
}

/// Non-public IPv4 blocks. More specific blocks come before the blocks that
/// enclose them so lookups report the narrowest name.
pub const SPECIAL_RANGES: &[SpecialRange] = &[
    SpecialRange::new(0, 0, 0, 0, 8, "this network"),
    SpecialRange::new(10, 0, 0, 0, 8, "private-use"),
    SpecialRange::new(100, 64, 0, 0, 10, "shared address space"),
    SpecialRange::new(127, 0, 0, 0, 8, "loopback"),
    SpecialRange::new(169, 254, 0, 0, 16, "link local"),
    SpecialRange::new(172, 16, 0, 0, 12, "private-use"),
    SpecialRange::new(192, 0, 0, 0, 24, "IETF protocol assignments"),
    SpecialRange::new(192, 0, 2, 0, 24, "documentation (TEST-NET-1)"),
    SpecialRange::new(192, 88, 99, 0, 24, "6to4 relay anycast"),
    SpecialRange::new(192, 168, 0, 0, 16, "private-use"),
    SpecialRange::new(198, 18, 0, 0, 15, "benchmarking"),
    SpecialRange::new(198, 51, 100, 0, 24, "documentation (TEST-NET-2)"),
    SpecialRange::new(203, 0, 113, 0, 24, "documentation (TEST-NET-3)"),
    SpecialRange::new(224, 0, 0, 0, 4, "multicast"),
    SpecialRange::new(255, 255, 255, 255, 32, "limited broadcast"),
    SpecialRange::new(240, 0, 0, 0, 4, "reserved"),
];

/// Anycast services inside 192.0.0.0/24 that the registry marks globally
/// reachable (PCP and TURN anycast).
const GLOBAL_EXCEPTIONS: [Ipv4Addr; 2] = [Ipv4Addr::new(192, 0, 0, 9), Ipv4Addr::new(192, 0, 0, 10)];

/// The special-purpose block `ip` belongs to, if any.
pub fn reserved_range(ip: &Ipv4Addr) -> Option<&'static SpecialRange> {
    if GLOBAL_EXCEPTIONS.contains(ip) {
        return None;
    }
    SPECIAL_RANGES.iter().find(|range| range.contains(ip))
}

/// Parse `candidate` as a public IPv4 address, explaining any rejection.
///
/// Only strict dotted-quad notation is accepted: four decimal octets, no
/// leading zeros, no surrounding whitespace.
pub fn parse_public_ipv4(candidate: &str) -> Result<Ipv4Addr, AddressError> {
    if candidate.is_empty() {
        return Err(AddressError::Empty);
    }

    let address = match candidate.parse::<Ipv4Addr>() {
        Ok(address) => address,
        Err(_) if candidate.parse::<Ipv6Addr>().is_ok() => {
            return Err(AddressError::Ipv6(candidate.to_string()));
        }
        Err(_) => return Err(AddressError::Malformed(candidate.to_string())),
    };

    match reserved_range(&address) {
        Some(range) => Err(AddressError::Reserved {
            address,
            range: range.name,
        }),
        None => Ok(address),
    }
}

/// Check if `candidate` is a valid IPv4 address outside every private and
/// reserved range. Never fails: anything else is `false`.
pub fn is_public_ipv4(candidate: &str) -> bool {
    parse_public_ipv4(candidate).is_ok()
}
