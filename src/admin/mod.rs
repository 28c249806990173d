//! Admin API.
//!
//! Serves the compiled route table and process status on a separate
//! listener, guarded by a bearer key.

pub mod auth;
pub mod handlers;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::lifecycle::shutdown::wait as shutdown_requested;
use crate::routing::Router as RouteTable;
use self::auth::admin_auth_middleware;
use self::handlers::*;

/// State shared by the admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub routes: Arc<RouteTable>,
    pub api_key: Arc<str>,
}

impl AdminState {
    pub fn new(routes: Arc<RouteTable>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            routes,
            api_key: api_key.into(),
        }
    }
}

pub fn setup_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/routes", get(get_routes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        .with_state(state)
}

/// Serve the admin API until shutdown.
pub async fn serve(
    listener: TcpListener,
    state: AdminState,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Admin API starting");

    axum::serve(listener, setup_admin_router(state))
        .with_graceful_shutdown(shutdown_requested(shutdown))
        .await?;

    tracing::info!("Admin API stopped");
    Ok(())
}
