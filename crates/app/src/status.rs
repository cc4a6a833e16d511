//! Status tracker — process uptime and the most recent device event.
//!
//! Backs the `/api/status` endpoint the dashboard polls.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Tracks when the process started and the last human-readable event line.
pub struct StatusTracker {
    started: Instant,
    last_event: Mutex<Option<String>>,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            last_event: Mutex::new(None),
        }
    }
}

impl StatusTracker {
    /// Create a tracker anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the tracker was created.
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Record a new "last event" line.
    pub fn record(&self, event: impl Into<String>) {
        let event = event.into();
        tracing::debug!(%event, "status event");
        let mut last = self.last_event.lock().expect("status lock poisoned");
        *last = Some(event);
    }

    /// The most recent event line, if any.
    #[must_use]
    pub fn last_event(&self) -> Option<String> {
        self.last_event.lock().expect("status lock poisoned").clone()
    }
}
