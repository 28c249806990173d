//! Browser-style session history.

use tokio::sync::watch;

use crate::routing::Location;

/// Session history with back/forward stacks.
///
/// The current entry is published on a watch channel so any number of
/// subscribers observe location changes in order, coalescing entries they
/// were too slow to see.
#[derive(Debug)]
pub struct History {
    current: watch::Sender<Location>,
    back: Vec<Location>,
    forward: Vec<Location>,
}

impl History {
    pub fn new(initial: Location) -> Self {
        let (current, _) = watch::channel(initial);
        Self {
            current,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Subscribe to location changes. The receiver starts at the current entry.
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.current.subscribe()
    }

    pub fn current(&self) -> Location {
        self.current.borrow().clone()
    }

    /// Navigate to a new entry. Forward history is discarded.
    pub fn push(&mut self, location: Location) {
        tracing::trace!(to = %location, "history push");
        let previous = self.current.send_replace(location);
        self.back.push(previous);
        self.forward.clear();
    }

    /// Swap the current entry without growing the history.
    pub fn replace(&mut self, location: Location) {
        tracing::trace!(to = %location, "history replace");
        self.current.send_replace(location);
    }

    /// Step back one entry. Returns false when already at the oldest entry.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(location) => {
                let previous = self.current.send_replace(location);
                self.forward.push(previous);
                true
            }
            None => false,
        }
    }

    /// Step forward one entry. Returns false when there is nothing ahead.
    pub fn forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(location) => {
                let previous = self.current.send_replace(location);
                self.back.push(previous);
                true
            }
            None => false,
        }
    }

    /// Number of entries, including the current one.
    pub fn entries(&self) -> usize {
        self.back.len() + 1 + self.forward.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut history = History::default();
        history.push(Location::parse("/products"));
        history.push(Location::parse("/orders"));
        assert_eq!(history.current().as_str(), "/orders");
        assert_eq!(history.entries(), 3);

        assert!(history.back());
        assert_eq!(history.current().as_str(), "/products");
        assert!(history.back());
        assert_eq!(history.current().as_str(), "/");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.current().as_str(), "/products");
    }

    #[test]
    fn test_push_discards_forward() {
        let mut history = History::default();
        history.push(Location::parse("/login"));
        assert!(history.back());
        history.push(Location::parse("/signup"));

        assert!(!history.forward());
        assert_eq!(history.current().as_str(), "/signup");
        assert_eq!(history.entries(), 2);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = History::default();
        history.push(Location::parse("/login"));
        history.replace(Location::parse("/orders"));

        assert_eq!(history.entries(), 2);
        assert!(history.back());
        assert_eq!(history.current().as_str(), "/");
    }

    #[test]
    fn test_subscriber_sees_latest() {
        let mut history = History::default();
        let mut rx = history.subscribe();
        assert!(!rx.has_changed().unwrap());

        history.push(Location::parse("/products"));
        history.push(Location::parse("/orders"));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_str(), "/orders");
        assert!(!rx.has_changed().unwrap());
    }
}
