//! actix-web integration.
//!
//! Translates an [`HttpRequest`] into the CGI-style names the resolver
//! understands: every header becomes `HTTP_<NAME>` (upper case, `-` as `_`)
//! and the peer address becomes `REMOTE_ADDR`.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::extract::{client_ip, ClientIp};
use crate::headers::RawHeaders;
use crate::source::AmbientHeaders;

/// CGI variable name for an HTTP header name.
pub fn cgi_name(header: &str) -> String {
    let mut name = String::with_capacity(header.len() + 5);
    name.push_str("HTTP_");
    name.extend(header.chars().map(|c| match c {
        '-' => '_',
        c => c.to_ascii_uppercase(),
    }));
    name
}

/// CGI-style header map for `req`. Repeated headers are joined with `", "`;
/// values that are not visible ASCII are skipped.
pub fn cgi_headers(req: &HttpRequest) -> RawHeaders {
    let mut headers = RawHeaders::new();

    for (name, value) in req.headers() {
        let Ok(value) = value.to_str() else {
            continue;
        };
        headers
            .entry(cgi_name(name.as_str()))
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    if let Some(peer) = req.peer_addr() {
        headers.insert("REMOTE_ADDR".to_string(), peer.ip().to_string());
    }

    headers
}

/// Ambient header source backed by the request being served.
#[derive(Debug, Clone)]
pub struct RequestHeaders(pub HttpRequest);

impl AmbientHeaders for RequestHeaders {
    fn headers(&self) -> RawHeaders {
        cgi_headers(&self.0)
    }
}

/// Extractor yielding the public client address of the request, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientAddr(pub Option<ClientIp>);

impl FromRequest for ClientAddr {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(ClientAddr(client_ip(&cgi_headers(req)))))
    }
}
