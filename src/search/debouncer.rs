//! Single-slot debounce task
//!
//! Holds at most one scheduled payload. Scheduling replaces whatever was
//! pending, so only the most recent schedule can ever fire. Time is passed
//! in by the caller; the event loop polls `take_due` on every tick.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    payload: T,
    due_at: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `payload` to fire after the debounce window, cancelling any
    /// previously scheduled payload first
    pub fn schedule(&mut self, payload: T, now: Instant) {
        self.cancel();
        self.pending = Some(Pending {
            payload,
            due_at: now + self.delay,
        });
    }

    /// Cancel the pending payload. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending payload becomes due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due_at.saturating_duration_since(now))
    }

    /// Take the pending payload if its window has elapsed
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due_at => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
