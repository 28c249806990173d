//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → route table compiled once into routing::Router
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table is fixed for the
//!   lifetime of the process
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    default_routes, AdminConfig, ListenerConfig, ObservabilityConfig, RouteConfig, ShellConfig,
    TimeoutConfig,
};
pub use validation::ValidationError;
