//! Trailing-edge debouncer.
//!
//! Collapses a burst of inputs into the last one, released once no new input
//! has arrived for the quiet window. Time is passed in explicitly so callers
//! drive it from their own event loop.

use std::time::{Duration, Instant};

/// Quiet window for search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value; each new value supersedes the last and
/// restarts the window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record an input at `now`. Returns true if it replaced a pending one.
    pub fn push(&mut self, value: T, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: now + self.wait,
        });
        replaced
    }

    /// Release the pending value if its quiet window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.flush()
        } else {
            None
        }
    }

    /// Release the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
