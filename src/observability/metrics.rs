//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): resolved navigations by view
//! - `shell_render_duration_seconds` (histogram): resolve + render latency
//! - `shell_http_requests_total` (counter): HTTP requests by method, status
//!
//! Unmatched locations are recorded with `view="none"`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::views::ViewId;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn view_label(view: Option<ViewId>) -> &'static str {
    view.map(|v| v.as_str()).unwrap_or("none")
}

/// Record one navigation and how long it took to render.
pub fn record_navigation(view: Option<ViewId>, started: Instant) {
    let label = view_label(view);
    counter!("shell_navigations_total", "view" => label).increment(1);
    histogram!("shell_render_duration_seconds", "view" => label)
        .record(started.elapsed().as_secs_f64());
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, status: u16) {
    counter!(
        "shell_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
