//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the page handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener
//! - Dispatch every GET path through the route table

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{validation::validate_config, ConfigError, ShellConfig};
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::response::status_for;
use crate::lifecycle::shutdown::wait as shutdown_requested;
use crate::navigation::render_frame;
use crate::observability::metrics;
use crate::routing::{Location, Router as RouteTable};
use crate::views::{Layout, ViewRegistry};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub layout: Arc<Layout>,
}

/// HTTP server hosting the storefront shell.
pub struct HttpServer {
    router: Router,
    config: ShellConfig,
    routes: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a new HTTP server with the standard views.
    pub fn new(config: ShellConfig) -> Result<Self, ConfigError> {
        Self::with_registry(config, &ViewRegistry::standard())
    }

    /// Create a new HTTP server mounting views from the given registry.
    pub fn with_registry(config: ShellConfig, registry: &ViewRegistry) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let routes = Arc::new(RouteTable::from_config(&config.routes, registry)?);

        let state = AppState {
            routes: routes.clone(),
            layout: Arc::new(Layout::default()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            routes,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShellConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_requested(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The compiled route table.
    pub fn routes(&self) -> Arc<RouteTable> {
        self.routes.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The Axum router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Resolve the request path and render the selected view.
async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let location = Location::from_uri(&uri);

    tracing::debug!(
        request_id = %request_id(&headers),
        method = %method,
        location = %location,
        "Navigating"
    );

    let frame = render_frame(&state.routes, &state.layout, &location);
    metrics::record_request(method.as_str(), status_for(&frame).as_u16());

    if !frame.is_matched() {
        tracing::warn!(
            request_id = %request_id(&headers),
            location = %location,
            "No route matched"
        );
    }

    frame.into_response()
}
