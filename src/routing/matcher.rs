//! Route matching logic.
//!
//! # Responsibilities
//! - Match a location exactly against a pattern
//! - Match a location by plain string prefix
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Prefix matching is a raw `starts_with`, not segment-aware:
//!   `/products` matches `/products/123` and also `/productsale`
//! - No regex to guarantee O(n) matching

use crate::routing::location::Location;

/// Trait for matching locations against a route pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the location matches this condition.
    fn matches(&self, location: &Location) -> bool;
}

/// Matches only when the location equals the pattern.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    pattern: String,
}

impl ExactMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, location: &Location) -> bool {
        location.as_str() == self.pattern
    }
}

/// Matches any location that starts with the pattern.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, location: &Location) -> bool {
        location.as_str().starts_with(&self.prefix)
    }
}

/// Build the matcher for a pattern and its exact flag.
pub fn compile(pattern: &str, exact: bool) -> Box<dyn Matcher> {
    if exact {
        Box::new(ExactMatcher::new(pattern))
    } else {
        Box::new(PathPrefixMatcher::new(pattern))
    }
}
