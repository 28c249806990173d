//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (request path, history entry, CLI argument)
//!     → location.rs (strip query/fragment, normalize)
//!     → router.rs (ordered scan)
//!     → matcher.rs (exact or prefix)
//!     → Return: matched RouteBinding or None
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Look up views in the ViewRegistry
//!     → Compile matchers
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod location;
pub mod matcher;
pub mod router;

pub use location::Location;
pub use router::{RouteBinding, Router, UnknownView};
