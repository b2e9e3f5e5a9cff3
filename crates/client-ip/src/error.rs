use std::net::Ipv4Addr;

use thiserror::Error;

/// Reasons a candidate token is not a public IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty candidate")]
    Empty,

    #[error("not an IPv4 address: {0:?}")]
    Malformed(String),

    #[error("IPv6 address not accepted: {0}")]
    Ipv6(String),

    #[error("{address} is in reserved range {range}")]
    Reserved {
        address: Ipv4Addr,
        range: &'static str,
    },
}
