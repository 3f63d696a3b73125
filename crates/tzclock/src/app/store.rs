//! Explicit state store for the UI.
//!
//! The two pieces of mutable state (selected timezone, current instant)
//! change only through [`Action`]s; `apply` reports whether anything
//! changed, and the event loop redraws exactly then. No implicit
//! reactivity anywhere.

use chrono::DateTime;
use chrono::Utc;

use tzclock_core::TzDatabase;
use tzclock_core::TzError;
use tzclock_core::ZoneId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A ticker fire, carrying the instant captured at fire time.
    Tick(DateTime<Utc>),
    /// User picked a timezone. The sole write path into the selection.
    Select(ZoneId),
}

#[derive(Debug, Clone)]
pub struct ClockStore {
    selected: ZoneId,
    now: Option<DateTime<Utc>>,
}

impl ClockStore {
    pub fn new(initial: ZoneId) -> Self {
        Self {
            selected: initial,
            now: None,
        }
    }

    /// Applies an action; returns whether state changed (i.e. whether the
    /// views need a redraw).
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Tick(at) => {
                if self.now == Some(at) {
                    return false;
                }
                self.now = Some(at);
                true
            }
            Action::Select(zone) => {
                if self.selected == zone {
                    return false;
                }
                self.selected = zone;
                true
            }
        }
    }

    pub fn selected(&self) -> &ZoneId {
        &self.selected
    }

    pub fn now(&self) -> Option<DateTime<Utc>> {
        self.now
    }

    /// The clock label: local time of the selected zone at the last tick,
    /// or blank before the first tick.
    ///
    /// Reads the selection at call time, so a selection applied between two
    /// ticks shows up on the very next render.
    pub fn clock_label(&self, db: &dyn TzDatabase) -> Result<String, TzError> {
        match self.now {
            None => Ok(String::new()),
            Some(at) => Ok(db.local_time(&self.selected, at)?.to_string()),
        }
    }
}
