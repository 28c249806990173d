//! Rendering the routed view for the current location.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, watch};

use crate::observability::metrics;
use crate::routing::{Location, Router};
use crate::views::{Layout, ViewId};

/// One rendering of the shell for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub location: Location,
    /// `None` when no route matched and the shell is empty.
    pub view: Option<ViewId>,
    pub html: String,
}

impl Frame {
    pub fn is_matched(&self) -> bool {
        self.view.is_some()
    }
}

/// Resolve and render a single location.
///
/// Shared by the outlet, the HTTP handler and the CLI. Panics inside a view
/// propagate to the caller.
pub fn render_frame(router: &Router, layout: &Layout, location: &Location) -> Frame {
    let started = Instant::now();

    let (view, html) = match router.resolve(location) {
        Some(binding) => {
            let fragment = binding.view().render(location);
            (Some(binding.view_id()), layout.wrap(Some(&fragment)))
        }
        None => (None, layout.wrap(None)),
    };

    metrics::record_navigation(view, started);
    match view {
        Some(view) => tracing::debug!(location = %location, view = %view, "Rendered view"),
        None => tracing::debug!(location = %location, "No route matched, rendering empty shell"),
    }

    Frame {
        location: location.clone(),
        view,
        html,
    }
}

/// Re-renders the shell whenever the observed location changes.
#[derive(Debug)]
pub struct Outlet {
    router: Arc<Router>,
    layout: Layout,
    frames: watch::Sender<Option<Frame>>,
}

impl Outlet {
    pub fn new(router: Arc<Router>) -> Self {
        Self::with_layout(router, Layout::default())
    }

    pub fn with_layout(router: Arc<Router>, layout: Layout) -> Self {
        let (frames, _) = watch::channel(None);
        Self {
            router,
            layout,
            frames,
        }
    }

    /// Subscribe to rendered frames. `None` until the first render.
    pub fn frames(&self) -> watch::Receiver<Option<Frame>> {
        self.frames.subscribe()
    }

    /// Render a location and publish the frame.
    pub fn render(&self, location: &Location) -> Frame {
        let frame = render_frame(&self.router, &self.layout, location);
        self.frames.send_replace(Some(frame.clone()));
        frame
    }

    /// Render the current location, then once per change until the history
    /// is dropped or shutdown is signalled.
    pub async fn run(
        self,
        mut locations: watch::Receiver<Location>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let initial = locations.borrow_and_update().clone();
        self.render(&initial);

        loop {
            tokio::select! {
                changed = locations.changed() => {
                    if changed.is_err() {
                        tracing::debug!("History dropped, outlet exiting");
                        break;
                    }
                    let location = locations.borrow_and_update().clone();
                    self.render(&location);
                }
                _ = shutdown.recv() => {
                    tracing::debug!("Outlet received shutdown signal");
                    break;
                }
            }
        }
    }
}
