//! Page-level views.
//!
//! # Data Flow
//! ```text
//! Location
//!     → routing::Router (pick a RouteBinding)
//!     → View::render (page fragment)
//!     → Layout::wrap (shell document)
//! ```
//!
//! # Design Decisions
//! - Views are opaque: the shell only knows `render(location) -> html`
//! - Failures inside a view are not caught here
//! - One shared instance per view, handed out as `Arc<dyn View>`

pub mod layout;
pub mod pages;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::routing::Location;

pub use layout::Layout;
pub use pages::{Home, Login, Orders, Products, Signup};

/// The closed set of page views the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Home,
    Signup,
    Login,
    Products,
    Orders,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Signup,
        ViewId::Login,
        ViewId::Products,
        ViewId::Orders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Signup => "signup",
            ViewId::Login => "login",
            ViewId::Products => "products",
            ViewId::Orders => "orders",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A renderable page.
pub trait View: Send + Sync + fmt::Debug {
    /// Which view this is.
    fn id(&self) -> ViewId;

    /// Render the page body for the given location as an HTML fragment.
    fn render(&self, location: &Location) -> String;
}

/// Lookup from [`ViewId`] to the shared view instance.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<ViewId, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the placeholder page for every [`ViewId`].
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Home));
        registry.register(Arc::new(Signup));
        registry.register(Arc::new(Login));
        registry.register(Arc::new(Products));
        registry.register(Arc::new(Orders));
        registry
    }

    /// Register a view under its own id, replacing any previous one.
    pub fn register(&mut self, view: Arc<dyn View>) {
        self.views.insert(view.id(), view);
    }

    pub fn get(&self, id: ViewId) -> Option<Arc<dyn View>> {
        self.views.get(&id).cloned()
    }
}

/// Minimal HTML text escaping for values echoed into markup.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
