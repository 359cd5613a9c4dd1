//! Deferred events for a single-threaded event loop.
//!
//! The frontend polls [`Timers::take_due`] once per frame with the current
//! instant. Each scheduled event gets its own [`TimerHandle`]; overlapping
//! timers for the same event are allowed and fire independently, so event
//! handlers must be idempotent.

use std::time::{Duration, Instant};

/// Handle for cancelling a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    handle: TimerHandle,
    /// `None` when the deadline lies beyond what `Instant` can represent.
    due: Option<Instant>,
    event: E,
}

/// Queue of events waiting for their deadline.
#[derive(Debug)]
pub struct Timers<E> {
    pending: Vec<Pending<E>>,
    next_id: u64,
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire `delay` after `now`.
    ///
    /// A delay too large for `Instant` schedules an event that never fires
    /// on its own; it can still be cancelled.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: now.checked_add(delay),
            event,
        });
        handle
    }

    /// Cancel a pending event. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return every event due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<E> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due.is_some_and(|d| d <= now));
        self.pending = waiting;
        due.sort_by_key(|p| (p.due, p.handle.0));
        due.into_iter().map(|p| p.event).collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|p| p.due).min()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}
