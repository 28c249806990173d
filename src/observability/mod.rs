//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (location, view, request_id)
//! - Request ID flows through the HTTP layers
//! - Metrics are cheap (atomic increments), exporter is opt-in

pub mod logging;
pub mod metrics;
