//! Real client IP detection behind proxies.
//!
//! Scans a fixed, prioritized list of forwarding headers and returns the
//! first publicly routable IPv4 address found, skipping private, reserved,
//! malformed and IPv6 candidates.
//!
//! # Layers
//!
//! - **Stateless core**: [`select_headers`], [`extract_client_ip`],
//!   [`client_ip`], [`is_public_ipv4`], [`ipv4_to_u32`]
//! - **Stateful wrapper** ([`ClientIpResolver`]): caches the filtered
//!   headers and the last resolved address
//! - **Ambient sources** ([`AmbientHeaders`]): where headers come from when
//!   the caller supplies none
//!
//! # Quick example
//!
//! ```
//! use client_ip::{client_ip, RawHeaders};
//!
//! let headers = RawHeaders::from([
//!     ("REMOTE_ADDR".to_string(), "8.8.4.4".to_string()),
//!     ("X_FORWARDED_FOR".to_string(), "127.0.0.1, 8.8.8.8".to_string()),
//! ]);
//!
//! let ip = client_ip(&headers).unwrap();
//! assert_eq!(ip.to_string(), "8.8.8.8");
//! assert_eq!(ip.header(), "X_FORWARDED_FOR");
//! assert_eq!(ip.as_u32(), 134_744_072);
//! ```

pub mod constants;
pub mod error;
pub mod extract;
pub mod headers;
pub mod network;
pub mod numeric;
pub mod resolver;
pub mod source;

#[cfg(feature = "actix")]
pub mod actix;

pub use constants::{recognized_headers, version, RECOGNIZED_HEADERS, VERSION};
pub use error::AddressError;
pub use extract::{candidate_tokens, client_ip, extract_client_ip, ClientIp};
pub use headers::{select_headers, select_headers_or, FilteredHeaders, RawHeaders};
pub use network::{is_public_ipv4, parse_public_ipv4, reserved_range, SpecialRange};
pub use numeric::{ipv4_to_u32, u32_to_ipv4};
pub use resolver::ClientIpResolver;
pub use source::{AmbientHeaders, NoAmbient, ProcessEnv};
