//! Search limits and the wall-clock budget shared by the search.
//!
//! The budget is checked by the search itself at node entry and between
//! root candidates; when it runs out the best result found so far is kept.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Depth and time bounds for one `pick best move` call.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Depth bound only.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Starts the clock. Called once when the search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

/// Clock for a single search, cheap to clone into helpers.
#[derive(Debug, Clone)]
pub struct TimeControl {
    expired: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            expired: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    /// Start (or restart) the clock and clear any previous expiry.
    pub fn start(&self) {
        if let Ok(mut start) = self.start_time.write() {
            *start = Some(Instant::now());
        }
        self.expired.store(false, Ordering::SeqCst);
    }

    /// Latches expiry; later checks stay true until the next `start`.
    fn expire(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    /// Whether the budget was already found spent, without reading the clock.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::Relaxed)
    }

    /// Reads the clock and latches expiry once elapsed time reaches the limit.
    /// An unstarted clock never expires.
    pub fn check_time(&self) -> bool {
        if self.is_expired() {
            return true;
        }
        let Some(limit) = self.time_limit else {
            return false;
        };
        let started = self.start_time.read().ok().and_then(|s| *s);
        match started {
            Some(start) if start.elapsed() >= limit => {
                self.expire();
                true
            }
            _ => false,
        }
    }

    /// Time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .ok()
            .and_then(|s| *s)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
