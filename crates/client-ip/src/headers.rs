//! Selection of the IP-bearing headers out of a raw header map.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::{header_priority, HEADER_COUNT, RECOGNIZED_HEADERS};
use crate::source::AmbientHeaders;

/// Header name to raw header value, as handed over by the server.
pub type RawHeaders = HashMap<String, String>;

/// The recognized subset of a header map, held in priority order.
///
/// Values are stored exactly as supplied; nothing is parsed until
/// extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredHeaders {
    values: [Option<String>; HEADER_COUNT],
}

impl FilteredHeaders {
    /// Raw value of a recognized header, matched case-sensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        header_priority(name).and_then(|i| self.values[i].as_deref())
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Present headers as `(name, value)`, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        RECOGNIZED_HEADERS
            .iter()
            .zip(self.values.iter())
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
    }

    /// Copy back into a plain map.
    pub fn to_map(&self) -> RawHeaders {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

impl Serialize for FilteredHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Keep only the recognized headers of `raw`. Never fails; unknown keys are
/// dropped silently.
pub fn select_headers(raw: &RawHeaders) -> FilteredHeaders {
    let mut filtered = FilteredHeaders::default();
    for (slot, name) in filtered.values.iter_mut().zip(RECOGNIZED_HEADERS) {
        *slot = raw.get(name).cloned();
    }
    filtered
}

/// Like [`select_headers`], but reads `ambient` when `raw` is missing or
/// empty.
pub fn select_headers_or<A>(raw: Option<&RawHeaders>, ambient: &A) -> FilteredHeaders
where
    A: AmbientHeaders + ?Sized,
{
    match raw {
        Some(raw) if !raw.is_empty() => select_headers(raw),
        _ => {
            let ambient_headers = ambient.headers();
            tracing::debug!(
                entries = ambient_headers.len(),
                "no headers supplied, using ambient header source"
            );
            select_headers(&ambient_headers)
        }
    }
}
