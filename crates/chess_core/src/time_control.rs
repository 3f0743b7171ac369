//! Search limits and the advisory move clock.
//!
//! The clock never interrupts a search by itself. Searchers poll it at points
//! where stopping leaves the position intact (between root moves).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Depth and time budget for one move.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves)
    pub depth: u8,
    /// Time allowed for this move (None = no limit)
    pub move_time: Option<Duration>,
    /// Clock shared with the search
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Cloneable move clock with a shared stop flag.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    /// Start the clock and clear any earlier stop request.
    pub fn start(&self) {
        let mut start = self.start_time.write().unwrap_or_else(|e| e.into_inner());
        *start = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Request a stop at the next poll.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Polls the clock, latching the stop flag once the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        let expired = match self.time_limit {
            Some(limit) => self.started_at().is_some_and(|s| s.elapsed() >= limit),
            None => false,
        };
        if expired {
            self.stop();
        }
        expired
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Time since `start`, zero if the clock was never started.
    pub fn elapsed(&self) -> Duration {
        self.started_at()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    fn started_at(&self) -> Option<Instant> {
        *self.start_time.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
