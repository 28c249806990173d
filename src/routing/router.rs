//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled route bindings in declaration order
//! - Resolve a location to the first matching binding
//! - Return matched binding or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan (acceptable for typical route counts)
//! - Explicit `None` rather than silent default

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::location::Location;
use crate::routing::matcher::{self, Matcher};
use crate::views::{View, ViewId, ViewRegistry};

/// A compiled route: pattern, exact flag, matcher and the mounted view.
pub struct RouteBinding {
    pattern: String,
    exact: bool,
    matcher: Box<dyn Matcher>,
    view: Arc<dyn View>,
}

impl RouteBinding {
    pub fn new(pattern: impl Into<String>, exact: bool, view: Arc<dyn View>) -> Self {
        let pattern = pattern.into();
        let matcher = matcher::compile(&pattern, exact);
        Self {
            pattern,
            exact,
            matcher,
            view,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn view(&self) -> &Arc<dyn View> {
        &self.view
    }

    pub fn view_id(&self) -> ViewId {
        self.view.id()
    }

    pub fn matches(&self, location: &Location) -> bool {
        self.matcher.matches(location)
    }
}

impl fmt::Debug for RouteBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteBinding")
            .field("pattern", &self.pattern)
            .field("exact", &self.exact)
            .field("view", &self.view.id())
            .finish()
    }
}

/// A route referenced a view the registry does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route {pattern:?} references unregistered view {view}")]
pub struct UnknownView {
    pub pattern: String,
    pub view: ViewId,
}

/// Ordered, immutable route table.
#[derive(Debug, Default)]
pub struct Router {
    bindings: Vec<RouteBinding>,
}

impl Router {
    /// Build a router from already compiled bindings.
    pub fn new(bindings: Vec<RouteBinding>) -> Self {
        Self { bindings }
    }

    /// Compile the configured route table against a view registry.
    pub fn from_config(routes: &[RouteConfig], registry: &ViewRegistry) -> Result<Self, UnknownView> {
        let bindings = routes
            .iter()
            .map(|route| {
                let view = registry.get(route.view).ok_or_else(|| UnknownView {
                    pattern: route.pattern.clone(),
                    view: route.view,
                })?;
                Ok::<_, UnknownView>(RouteBinding::new(route.pattern.clone(), route.exact, view))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(routes = bindings.len(), "Route table compiled");
        Ok(Self { bindings })
    }

    /// Select the first binding whose matcher accepts the location.
    ///
    /// Later bindings are never evaluated once one matches. `None` means the
    /// table has nothing for this location.
    pub fn resolve(&self, location: &Location) -> Option<&RouteBinding> {
        self.bindings.iter().find(|binding| binding.matches(location))
    }

    /// Convenience wrapper returning just the view.
    pub fn resolve_view(&self, location: &Location) -> Option<&Arc<dyn View>> {
        self.resolve(location).map(RouteBinding::view)
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
