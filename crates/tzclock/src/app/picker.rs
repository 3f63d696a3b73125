//! Picker state: the offset grouping flattened into a navigable list.
//!
//! The list is two-level — one label row per distinct offset, one row per
//! zone beneath it. The cursor only ever rests on zone rows; label rows are
//! skipped while moving. Which zone is *selected* is not tracked here: the
//! store owns the selection, the picker only proposes candidates.

use tzclock_core::OffsetGroups;
use tzclock_core::UtcOffset;
use tzclock_core::ZoneId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerRow {
    /// Group label, rendered as the offset's string form.
    Offset(UtcOffset),
    Zone(ZoneId),
}

#[derive(Debug, Clone)]
pub struct Picker {
    rows: Vec<PickerRow>,
    cursor: usize,
}

impl Picker {
    /// Flattens the grouping; the cursor starts on `selected` when present,
    /// otherwise on the first zone row.
    pub fn new(groups: &OffsetGroups, selected: &ZoneId) -> Self {
        let mut rows = Vec::with_capacity(groups.len() + groups.zone_count());
        for group in groups {
            rows.push(PickerRow::Offset(group.offset));
            for zone in &group.zones {
                rows.push(PickerRow::Zone(zone.clone()));
            }
        }

        let cursor = rows
            .iter()
            .position(|row| matches!(row, PickerRow::Zone(z) if z == selected))
            .or_else(|| rows.iter().position(|row| matches!(row, PickerRow::Zone(_))))
            .unwrap_or(0);

        Self { rows, cursor }
    }

    pub fn rows(&self) -> &[PickerRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The selection candidate: the zone the cursor rests on.
    pub fn zone_under_cursor(&self) -> Option<&ZoneId> {
        match self.rows.get(self.cursor) {
            Some(PickerRow::Zone(zone)) => Some(zone),
            _ => None,
        }
    }

    /// Moves to the previous zone row, if any.
    pub fn move_up(&mut self) {
        if let Some(row) = self.prev_zone_row(self.cursor) {
            self.cursor = row;
        }
    }

    /// Moves to the next zone row, if any.
    pub fn move_down(&mut self) {
        if let Some(row) = self.next_zone_row(self.cursor) {
            self.cursor = row;
        }
    }

    pub fn page_up(&mut self, page: usize) {
        for _ in 0..page.max(1) {
            self.move_up();
        }
    }

    pub fn page_down(&mut self, page: usize) {
        for _ in 0..page.max(1) {
            self.move_down();
        }
    }

    pub fn jump_first(&mut self) {
        if let Some(row) = self
            .rows
            .iter()
            .position(|row| matches!(row, PickerRow::Zone(_)))
        {
            self.cursor = row;
        }
    }

    pub fn jump_last(&mut self) {
        if let Some(row) = self
            .rows
            .iter()
            .rposition(|row| matches!(row, PickerRow::Zone(_)))
        {
            self.cursor = row;
        }
    }

    /// The window of rows to show in a viewport of `height` rows, keeping
    /// the cursor roughly centered. Returns a `(start, end)` row range.
    pub fn window(&self, height: usize) -> (usize, usize) {
        if height == 0 {
            return (0, 0);
        }
        if self.rows.len() <= height {
            return (0, self.rows.len());
        }
        let max_start = self.rows.len() - height;
        let start = self.cursor.saturating_sub(height / 2).min(max_start);
        (start, start + height)
    }

    fn prev_zone_row(&self, from: usize) -> Option<usize> {
        self.rows[..from]
            .iter()
            .rposition(|row| matches!(row, PickerRow::Zone(_)))
    }

    fn next_zone_row(&self, from: usize) -> Option<usize> {
        let after = from + 1;
        self.rows[after.min(self.rows.len())..]
            .iter()
            .position(|row| matches!(row, PickerRow::Zone(_)))
            .map(|i| after + i)
    }
}
