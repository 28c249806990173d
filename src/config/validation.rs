//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate route patterns and detect routes that can never be selected
//! - Validate value ranges (timeouts > 0, addresses parse, known log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::{RouteConfig, ShellConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("route pattern {pattern:?} must start with '/'")]
    PatternNotAbsolute { pattern: String },

    #[error("route pattern {pattern:?} is declared more than once")]
    DuplicatePattern { pattern: String },

    #[error("route {pattern:?} can never match: shadowed by earlier prefix route {shadowed_by:?}")]
    UnreachableRoute { pattern: String, shadowed_by: String },

    #[error("{field} {value:?} is not a valid socket address")]
    InvalidBindAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("admin.api_key must not be empty when the admin API is enabled")]
    EmptyApiKey,

    #[error("observability.log_level {value:?} is not one of trace, debug, info, warn, error, off")]
    InvalidLogLevel { value: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_routes(&config.routes);

    check_address(
        "listener.bind_address",
        &config.listener.bind_address,
        &mut errors,
    );

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !is_log_level(&config.observability.log_level) {
        errors.push(ValidationError::InvalidLogLevel {
            value: config.observability.log_level.clone(),
        });
    }

    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if config.admin.enabled {
        check_address("admin.bind_address", &config.admin.bind_address, &mut errors);
        if config.admin.api_key.is_empty() {
            errors.push(ValidationError::EmptyApiKey);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a route table on its own.
///
/// A later route is unreachable when an earlier non-exact route's pattern is
/// a prefix of its pattern: every location the later route accepts starts
/// with the earlier pattern too, and the earlier route wins.
pub fn validate_routes(routes: &[RouteConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, route) in routes.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
            continue;
        }
        if !route.pattern.starts_with('/') {
            errors.push(ValidationError::PatternNotAbsolute {
                pattern: route.pattern.clone(),
            });
            continue;
        }

        let earlier = &routes[..index];

        if earlier.iter().any(|e| e.pattern == route.pattern && e.exact == route.exact) {
            errors.push(ValidationError::DuplicatePattern {
                pattern: route.pattern.clone(),
            });
            continue;
        }

        if let Some(shadow) = earlier
            .iter()
            .find(|e| !e.exact && !e.pattern.is_empty() && route.pattern.starts_with(&e.pattern))
        {
            errors.push(ValidationError::UnreachableRoute {
                pattern: route.pattern.clone(),
                shadowed_by: shadow.pattern.clone(),
            });
        }
    }

    errors
}

/// Named levels only. `LevelFilter` alone also takes `""` and `"0"`..`"5"`.
fn is_log_level(value: &str) -> bool {
    let named = ["trace", "debug", "info", "warn", "error", "off"];
    named.iter().any(|n| n.eq_ignore_ascii_case(value)) && value.parse::<LevelFilter>().is_ok()
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ShellConfig::default()), Ok(()));
    }

    #[test]
    fn test_root_prefix_first_shadows_everything() {
        let routes = vec![
            RouteConfig::new("/", false, ViewId::Home),
            RouteConfig::new("/signup", false, ViewId::Signup),
            RouteConfig::new("/orders", false, ViewId::Orders),
        ];

        let errors = validate_routes(&routes);
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            ValidationError::UnreachableRoute { pattern, shadowed_by }
                if pattern == "/signup" && shadowed_by == "/"
        ));
    }

    #[test]
    fn test_root_prefix_last_is_fine() {
        let routes = vec![
            RouteConfig::new("/signup", false, ViewId::Signup),
            RouteConfig::new("/login", false, ViewId::Login),
            RouteConfig::new("/products", false, ViewId::Products),
            RouteConfig::new("/orders", false, ViewId::Orders),
            RouteConfig::new("/", false, ViewId::Home),
        ];

        assert!(validate_routes(&routes).is_empty());
    }

    #[test]
    fn test_exact_then_prefix_same_pattern_allowed() {
        let routes = vec![
            RouteConfig::new("/orders", true, ViewId::Orders),
            RouteConfig::new("/orders", false, ViewId::Products),
        ];

        assert!(validate_routes(&routes).is_empty());
    }

    #[test]
    fn test_log_level() {
        for level in ["trace", "debug", "info", "WARN", "error", "off"] {
            let mut config = ShellConfig::default();
            config.observability.log_level = level.into();
            assert_eq!(validate_config(&config), Ok(()), "level {}", level);
        }

        for level in ["verbose", "", "3", "info,debug"] {
            let mut config = ShellConfig::default();
            config.observability.log_level = level.into();
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::InvalidLogLevel {
                    value: level.into()
                }]),
                "level {:?}",
                level
            );
        }
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ShellConfig::default();
        config.routes.push(RouteConfig::new("", false, ViewId::Home));
        config.routes.push(RouteConfig::new("cart", false, ViewId::Home));
        config.routes.push(RouteConfig::new("/login", false, ViewId::Login));
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.admin.enabled = true;
        config.admin.api_key = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyPattern { index: 5 }));
        assert!(errors.contains(&ValidationError::PatternNotAbsolute {
            pattern: "cart".into()
        }));
        assert!(errors.contains(&ValidationError::DuplicatePattern {
            pattern: "/login".into()
        }));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::EmptyApiKey));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::InvalidBindAddress { field: "listener.bind_address", .. }
        )));
    }
}
