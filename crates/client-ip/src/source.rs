//! Ambient header sources.
//!
//! When a caller supplies no headers, the resolver reads them from an
//! injected [`AmbientHeaders`] implementation instead of any global state.

use std::env;

use crate::headers::RawHeaders;

/// Supplies the request's header map on demand.
pub trait AmbientHeaders {
    /// Take one synchronous snapshot of the current headers.
    fn headers(&self) -> RawHeaders;
}

/// No ambient context: always an empty map.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmbient;

impl AmbientHeaders for NoAmbient {
    fn headers(&self) -> RawHeaders {
        RawHeaders::new()
    }
}

/// Reads the process environment, where CGI-style servers publish request
/// headers as `HTTP_*` variables and the peer address as `REMOTE_ADDR`.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl AmbientHeaders for ProcessEnv {
    fn headers(&self) -> RawHeaders {
        env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

impl<F> AmbientHeaders for F
where
    F: Fn() -> RawHeaders,
{
    fn headers(&self) -> RawHeaders {
        self()
    }
}
