//! Startup orchestration.
//!
//! # Responsibilities
//! - Compile the route table from validated configuration
//! - Start the metrics exporter when enabled
//! - Bind listeners and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)
//! - One listener stopping stops the other; both results reach the caller

use std::future::Future;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::admin::{self, AdminState};
use crate::config::{ConfigError, ShellConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("admin API error: {0}")]
    Admin(#[source] std::io::Error),

    #[error("admin API task failed: {0}")]
    AdminTask(#[from] tokio::task::JoinError),
}

async fn bind(address: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })
}

/// Start every configured listener and serve until `shutdown` fires.
pub async fn run(config: ShellConfig, shutdown: Shutdown) -> Result<(), StartupError> {
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config)?;
    let config = server.config().clone();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by validation.
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr)?;
        }
    }

    let listener = bind(&config.listener.bind_address).await?;

    let admin_task = if config.admin.enabled {
        let admin_listener = bind(&config.admin.bind_address).await?;
        let state = AdminState::new(server.routes(), config.admin.api_key.as_str());
        let admin_shutdown = shutdown.subscribe();
        Some(tokio::spawn(admin::serve(admin_listener, state, admin_shutdown)))
    } else {
        None
    };

    supervise(server.run(listener, server_shutdown), admin_task, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Drive the page server and the optional admin task to completion.
///
/// Whichever stops first with an error triggers shutdown for the other. The
/// page server's error takes precedence when both fail.
async fn supervise<S>(
    server: S,
    admin_task: Option<JoinHandle<Result<(), std::io::Error>>>,
    shutdown: &Shutdown,
) -> Result<(), StartupError>
where
    S: Future<Output = Result<(), std::io::Error>>,
{
    tokio::pin!(server);

    let Some(mut admin_task) = admin_task else {
        let served = server.await;
        if served.is_err() {
            shutdown.trigger();
        }
        return served.map_err(StartupError::Serve);
    };

    let (served, admin) = tokio::select! {
        served = &mut server => {
            if served.is_err() {
                shutdown.trigger();
            }
            (served, admin_outcome(admin_task.await))
        }
        joined = &mut admin_task => {
            let admin = admin_outcome(joined);
            if let Err(e) = &admin {
                tracing::error!(error = %e, "Admin API stopped, shutting down");
            }
            shutdown.trigger();
            (server.await, admin)
        }
    };

    served?;
    admin
}

fn admin_outcome(
    joined: Result<Result<(), std::io::Error>, tokio::task::JoinError>,
) -> Result<(), StartupError> {
    joined?.map_err(StartupError::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    use crate::lifecycle::shutdown::wait;

    fn until_shutdown(shutdown: &Shutdown) -> impl Future<Output = io::Result<()>> {
        let rx = shutdown.subscribe();
        async move {
            wait(rx).await;
            Ok(())
        }
    }

    async fn supervised(
        server: impl Future<Output = io::Result<()>>,
        admin: Option<JoinHandle<io::Result<()>>>,
        shutdown: &Shutdown,
    ) -> Result<(), StartupError> {
        tokio::time::timeout(Duration::from_secs(2), supervise(server, admin, shutdown))
            .await
            .expect("supervise finished")
    }

    #[tokio::test]
    async fn test_admin_error_reaches_caller_and_stops_server() {
        let shutdown = Shutdown::new();
        let server = until_shutdown(&shutdown);
        let admin = tokio::spawn(async {
            Err::<(), _>(io::Error::new(io::ErrorKind::AddrInUse, "admin listener lost"))
        });

        let err = supervised(server, Some(admin), &shutdown).await.unwrap_err();
        assert!(matches!(err, StartupError::Admin(_)));
        assert!(err.to_string().contains("admin listener lost"));
    }

    #[tokio::test]
    async fn test_admin_panic_reaches_caller() {
        let shutdown = Shutdown::new();
        let server = until_shutdown(&shutdown);
        let admin = tokio::spawn(crashing_admin());

        let err = supervised(server, Some(admin), &shutdown).await.unwrap_err();
        assert!(matches!(err, StartupError::AdminTask(_)));
    }

    async fn crashing_admin() -> io::Result<()> {
        panic!("admin handler crashed")
    }

    #[tokio::test]
    async fn test_server_error_stops_admin() {
        let shutdown = Shutdown::new();
        let admin_shutdown = shutdown.subscribe();
        let admin = tokio::spawn(async move {
            wait(admin_shutdown).await;
            Ok::<(), io::Error>(())
        });
        let server = async { Err::<(), _>(io::Error::new(io::ErrorKind::Other, "accept failed")) };

        let err = supervised(server, Some(admin), &shutdown).await.unwrap_err();
        assert!(matches!(err, StartupError::Serve(_)));
    }

    #[tokio::test]
    async fn test_clean_shutdown_is_ok() {
        let shutdown = Shutdown::new();
        let server = until_shutdown(&shutdown);
        let admin_shutdown = shutdown.subscribe();
        let admin = tokio::spawn(async move {
            wait(admin_shutdown).await;
            Ok::<(), io::Error>(())
        });

        let trigger = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.trigger();
        });

        assert!(supervised(server, Some(admin), &shutdown).await.is_ok());
    }

    #[tokio::test]
    async fn test_without_admin() {
        let shutdown = Shutdown::new();
        let server = async { Err::<(), _>(io::Error::new(io::ErrorKind::Other, "boom")) };

        let err = supervised(server, None, &shutdown).await.unwrap_err();
        assert!(matches!(err, StartupError::Serve(_)));
    }
}
