//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::views::ViewId;

/// Root configuration for the storefront shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route table, evaluated top to bottom. First match wins.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub admin: AdminConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            routes: default_routes(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// A single binding of a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// URL path pattern, e.g. "/products".
    pub pattern: String,

    /// Require the location to equal the pattern instead of starting with it.
    #[serde(default)]
    pub exact: bool,

    /// View mounted when this route is selected.
    pub view: ViewId,
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>, exact: bool, view: ViewId) -> Self {
        Self {
            pattern: pattern.into(),
            exact,
            view,
        }
    }
}

/// The storefront route table.
///
/// `/` is exact so it does not swallow every other path.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", true, ViewId::Home),
        RouteConfig::new("/signup", false, ViewId::Signup),
        RouteConfig::new("/login", false, ViewId::Login),
        RouteConfig::new("/products", false, ViewId::Products),
        RouteConfig::new("/orders", false, ViewId::Orders),
    ]
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Admin API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Enable the admin API.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,

    /// Admin API bind address.
    pub bind_address: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            // WARNING: This is a placeholder! Change this in production.
            api_key: "CHANGE_ME_IN_PRODUCTION".to_string(),
            bind_address: "127.0.0.1:3001".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_table() {
        let routes = ShellConfig::default().routes;
        let table: Vec<(&str, bool, ViewId)> = routes
            .iter()
            .map(|r| (r.pattern.as_str(), r.exact, r.view))
            .collect();

        assert_eq!(
            table,
            vec![
                ("/", true, ViewId::Home),
                ("/signup", false, ViewId::Signup),
                ("/login", false, ViewId::Login),
                ("/products", false, ViewId::Products),
                ("/orders", false, ViewId::Orders),
            ]
        );
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.routes, default_routes());
        assert!(!config.admin.enabled);
    }

    #[test]
    fn test_routes_replace_default_table() {
        let config: ShellConfig = toml::from_str(
            r#"
            [[routes]]
            pattern = "/"
            exact = true
            view = "home"

            [[routes]]
            pattern = "/shop"
            view = "products"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1], RouteConfig::new("/shop", false, ViewId::Products));
    }

    #[test]
    fn test_unknown_view_rejected() {
        let result: Result<ShellConfig, _> = toml::from_str(
            r#"
            [[routes]]
            pattern = "/cart"
            view = "cart"
            "#,
        );
        assert!(result.is_err());
    }
}
