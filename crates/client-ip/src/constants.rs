/// Library version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of recognized headers.
pub const HEADER_COUNT: usize = 10;

/// Headers that may carry the client address, highest priority first.
///
/// Names use the CGI / server-variable spelling and are matched exactly
/// (case-sensitive). The order decides which header wins when several are
/// present, regardless of the order of the supplied map.
pub const RECOGNIZED_HEADERS: [&str; HEADER_COUNT] = [
    "HTTP_X_FORWARDED_FOR",
    "X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "X-REAL-IP",
    "VIA",
    "HTTP_CLIENT_IP",
    "REMOTE_ADDR",
];

/// Separator between candidate addresses inside a single header value.
pub const TOKEN_SEPARATOR: char = ',';

/// The recognized header list in priority order.
pub fn recognized_headers() -> &'static [&'static str] {
    &RECOGNIZED_HEADERS
}

/// Current library version.
pub fn version() -> &'static str {
    VERSION
}

/// Priority index of a recognized header name, `None` for anything else.
pub(crate) fn header_priority(name: &str) -> Option<usize> {
    RECOGNIZED_HEADERS.iter().position(|h| *h == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_for_outranks_remote_addr() {
        let xff = header_priority("X_FORWARDED_FOR").unwrap();
        let remote = header_priority("REMOTE_ADDR").unwrap();
        assert!(xff < remote);
        assert_eq!(recognized_headers().first(), Some(&"HTTP_X_FORWARDED_FOR"));
        assert_eq!(recognized_headers().last(), Some(&"REMOTE_ADDR"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(header_priority("X-REAL-IP"), Some(6));
        assert_eq!(header_priority("x-real-ip"), None);
        assert_eq!(header_priority("remote_addr"), None);
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
        assert_eq!(version(), VERSION);
    }
}
