//! Storefront page shell.
//!
//! Maps URL paths to the storefront's page views through an ordered,
//! first-match route table, and hosts that table behind an HTTP listener and
//! a browser-style session history.

pub mod admin;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::schema::ShellConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use navigation::{Frame, History, Outlet};
pub use routing::{Location, Router};
pub use views::{View, ViewId, ViewRegistry};
