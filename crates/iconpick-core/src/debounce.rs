use std::time::{Duration, Instant};

/// Coalesces values pushed within `window` of each other and yields the last.
///
/// The caller owns the clock: `push` records a deadline, `take_due` hands the
/// value out once that deadline has passed. A new push moves the deadline.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace any pending value. Returns the new deadline.
    pub fn push(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.pending = Some((value, deadline));
        deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Drop the pending value without acting on it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }
}
