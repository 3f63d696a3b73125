//! Clock trait for deterministic timing in tests.
//!
//! Production code asks a `Clock` for "now" instead of calling
//! `Utc::now()` directly, so tests can script the instants a tick captures.

use std::sync::Mutex;

use chrono::DateTime;
use chrono::Utc;

/// Source of the current wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the host system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Scripted clock for tests: returns a fixed sequence of instants, then
/// keeps repeating the last one.
#[derive(Debug)]
pub struct ManualClock {
    instants: Vec<DateTime<Utc>>,
    cursor: Mutex<usize>,
}

impl ManualClock {
    /// Panics if `instants` is empty; a clock must always answer.
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        assert!(!instants.is_empty(), "ManualClock needs at least one instant");
        Self {
            instants,
            cursor: Mutex::new(0),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut cursor = self.cursor.lock().unwrap_or_else(|e| e.into_inner());
        let instant = self.instants[*cursor];
        if *cursor + 1 < self.instants.len() {
            *cursor += 1;
        }
        instant
    }
}
