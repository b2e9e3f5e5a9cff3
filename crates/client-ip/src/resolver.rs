use crate::extract::{extract_client_ip, ClientIp};
use crate::headers::{select_headers_or, FilteredHeaders, RawHeaders};
use crate::source::{AmbientHeaders, NoAmbient};

/// Caches the filtered headers and the client address resolved from them.
///
/// A thin layer over [`select_headers_or`] and [`extract_client_ip`]: both
/// cached fields are rewritten together on every update and only read in
/// between.
#[derive(Debug, Clone)]
pub struct ClientIpResolver<A = NoAmbient> {
    ambient: A,
    headers: FilteredHeaders,
    resolved: Option<ClientIp>,
}

impl ClientIpResolver<NoAmbient> {
    /// Resolver without an ambient source; empty input resolves nothing.
    pub fn new() -> Self {
        Self::with_ambient(NoAmbient)
    }
}

impl Default for ClientIpResolver<NoAmbient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AmbientHeaders> ClientIpResolver<A> {
    /// Empty resolver that falls back to `ambient` whenever it is given no
    /// headers.
    pub fn with_ambient(ambient: A) -> Self {
        Self {
            ambient,
            headers: FilteredHeaders::default(),
            resolved: None,
        }
    }

    /// Filter `raw` and resolve immediately.
    pub fn from_headers(raw: &RawHeaders, ambient: A) -> Self {
        let mut resolver = Self::with_ambient(ambient);
        resolver.set_headers(raw);
        resolver
    }

    /// Replace the stored headers with the recognized subset of `raw`, or of
    /// the ambient source when `raw` is empty, and re-resolve.
    pub fn set_headers(&mut self, raw: &RawHeaders) {
        self.store(Some(raw));
    }

    /// Re-read the ambient source and re-resolve.
    pub fn refresh(&mut self) {
        self.store(None);
    }

    fn store(&mut self, raw: Option<&RawHeaders>) {
        self.headers = select_headers_or(raw, &self.ambient);
        self.resolved = extract_client_ip(&self.headers);
    }

    /// The currently stored recognized headers.
    pub fn headers(&self) -> &FilteredHeaders {
        &self.headers
    }

    /// Resolve the client address. Non-empty `raw` replaces the stored
    /// headers first; `None` or an empty map keeps them.
    pub fn resolve(&mut self, raw: Option<&RawHeaders>) -> Option<&ClientIp> {
        if let Some(raw) = raw.filter(|raw| !raw.is_empty()) {
            self.set_headers(raw);
        }
        self.resolved.as_ref()
    }

    /// The last resolved client address.
    pub fn client_ip(&self) -> Option<&ClientIp> {
        self.resolved.as_ref()
    }

    /// The last resolved client address as an unsigned integer.
    pub fn client_ip_numeric(&self) -> Option<u32> {
        self.resolved.map(|ip| ip.as_u32())
    }

    pub fn ambient(&self) -> &A {
        &self.ambient
    }
}
