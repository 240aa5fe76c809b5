//! Repeating timer driven by host clock ticks.
//!
//! Widgets never sleep or spawn threads. The host forwards
//! [`Event::Tick`](crate::Event::Tick) with a monotonic timestamp and the
//! widget polls its timers with that timestamp.

use serde::{Deserialize, Serialize};

/// Default repeat interval in milliseconds.
pub const DEFAULT_REPEAT_MS: u64 = 100;

/// A coalescing repeating timer.
///
/// Missed deadlines are folded into a single fire, so a host that ticks
/// slowly never sees a burst of catch-up fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatTimer {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl Default for RepeatTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_MS)
    }
}

impl RepeatTimer {
    /// Create a stopped timer. A zero interval is treated as 1 ms.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
        }
    }

    /// Repeat interval.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Start (or restart) the timer; the first fire is one interval after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Stop the timer. Stopping a stopped timer is a no-op.
    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    /// Whether the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Returns `true` if the timer fired at or before `now_ms`, and schedules
    /// the next fire one interval after `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}
