//! Priority scan over the recognized headers.

use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::constants::{RECOGNIZED_HEADERS, TOKEN_SEPARATOR};
use crate::headers::{select_headers, FilteredHeaders, RawHeaders};
use crate::network::parse_public_ipv4;

/// The resolved client address and the header it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClientIp {
    address: Ipv4Addr,
    numeric: u32,
    header: &'static str,
}

impl ClientIp {
    fn new(address: Ipv4Addr, header: &'static str) -> Self {
        Self {
            address,
            numeric: u32::from(address),
            header,
        }
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Unsigned big-endian integer form of the address.
    pub fn as_u32(&self) -> u32 {
        self.numeric
    }

    /// Name of the recognized header that produced the address.
    pub fn header(&self) -> &'static str {
        self.header
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.address.fmt(f)
    }
}

impl From<ClientIp> for Ipv4Addr {
    fn from(ip: ClientIp) -> Self {
        ip.address
    }
}

/// Split a header value into candidate tokens, trimming whitespace and NUL
/// bytes from each.
pub fn candidate_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(TOKEN_SEPARATOR)
        .map(|token| token.trim_matches(|c: char| c.is_whitespace() || c == '\0'))
}

/// First public IPv4 token, scanning headers by priority and each header's
/// tokens left to right. `None` when no header holds one.
pub fn extract_client_ip(headers: &FilteredHeaders) -> Option<ClientIp> {
    for name in RECOGNIZED_HEADERS {
        let Some(value) = headers.get(name) else {
            continue;
        };

        for token in candidate_tokens(value) {
            match parse_public_ipv4(token) {
                Ok(address) => {
                    tracing::debug!(header = name, client_ip = %address, "resolved client ip");
                    return Some(ClientIp::new(address, name));
                }
                Err(reason) => {
                    tracing::trace!(header = name, %reason, "skipping candidate");
                }
            }
        }
    }

    tracing::debug!(headers = headers.len(), "no public client ip found");
    None
}

/// Select and extract in one step.
pub fn client_ip(raw: &RawHeaders) -> Option<ClientIp> {
    extract_client_ip(&select_headers(raw))
}
