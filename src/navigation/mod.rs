//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! History::push / replace / back / forward
//!     → watch channel (current Location, latest value wins)
//!     → Outlet::run (resolve + render on every change)
//!     → watch channel (latest Frame)
//! ```
//!
//! # Design Decisions
//! - History owns the only "current location"; consumers receive it through
//!   a channel, never through shared globals
//! - Rendering is synchronous; the outlet never blocks between changes
//! - Superseded locations may be skipped, there is no queue

pub mod history;
pub mod outlet;

pub use history::History;
pub use outlet::{render_frame, Frame, Outlet};
