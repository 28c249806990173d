//! Navigation locations.
//!
//! A [`Location`] is the path part of whatever the host navigated to. Query
//! strings and fragments never take part in route matching, so they are
//! dropped here once instead of in every matcher.

use std::fmt;

use axum::http::Uri;
use url::Url;

/// Normalized URL path used as the input to route resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Build a location from a raw path (`/products?page=2#top`) or an
    /// absolute URL (`https://shop.example/products`).
    ///
    /// Matching stays case-sensitive and byte-exact: no trailing-slash
    /// trimming and no percent-decoding.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        let path_and_rest = match raw.find("://") {
            // Only the scheme and authority are cut away. The path keeps its
            // raw bytes, dot segments and all, as a request path would.
            Some(scheme_end) if Url::parse(raw).is_ok() => {
                let after_scheme = &raw[scheme_end + 3..];
                let path_start = after_scheme.find(['/', '?', '#']).unwrap_or(after_scheme.len());
                &after_scheme[path_start..]
            }
            _ => raw,
        };

        let end = path_and_rest.find(['?', '#']).unwrap_or(path_and_rest.len());
        Self::from_path(&path_and_rest[..end])
    }

    /// Location of an incoming request.
    pub fn from_uri(uri: &Uri) -> Self {
        Self::from_path(uri.path())
    }

    fn from_path(path: &str) -> Self {
        if path.is_empty() {
            Self("/".to_string())
        } else if path.starts_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("/{}", path))
        }
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
