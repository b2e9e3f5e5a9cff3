use std::net::Ipv4Addr;

use crate::network::parse_public_ipv4;

/// Big-endian `u32` form of a public IPv4 address string.
///
/// Returns `None` for anything [`is_public_ipv4`](crate::is_public_ipv4)
/// rejects. The result is unsigned, so addresses at or above 128.0.0.0 never
/// come out negative.
pub fn ipv4_to_u32(candidate: &str) -> Option<u32> {
    parse_public_ipv4(candidate).ok().map(u32::from)
}

/// Inverse of [`ipv4_to_u32`], without the public-range check.
pub fn u32_to_ipv4(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value)
}
