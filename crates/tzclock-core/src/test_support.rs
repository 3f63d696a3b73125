//! Mock timezone database for deterministic tests.

use chrono::DateTime;
use chrono::Duration;
use chrono::Timelike;
use chrono::Utc;

use crate::error::TzError;
use crate::format::WallTime;
use crate::offset::UtcOffset;
use crate::tzdb::TzDatabase;
use crate::zone::ZoneId;

/// In-memory database with a fixed zone/offset table.
///
/// Offsets are constant over time (no DST rules); the table order is the
/// enumeration order. The default zone is the first one added unless
/// overridden.
#[derive(Debug, Clone, Default)]
pub struct MockDatabase {
    zones: Vec<(ZoneId, UtcOffset)>,
    default: Option<ZoneId>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, id: &str, offset_seconds: i32) -> Self {
        self.zones
            .push((ZoneId::new(id), UtcOffset::from_seconds(offset_seconds)));
        self
    }

    pub fn with_default(mut self, id: &str) -> Self {
        self.default = Some(ZoneId::new(id));
        self
    }

    fn lookup(&self, zone: &ZoneId) -> Result<UtcOffset, TzError> {
        self.zones
            .iter()
            .find(|(id, _)| id == zone)
            .map(|(_, offset)| *offset)
            .ok_or_else(|| TzError::UnknownZone(zone.clone()))
    }
}

impl TzDatabase for MockDatabase {
    fn zone_ids(&self) -> Vec<ZoneId> {
        self.zones.iter().map(|(id, _)| id.clone()).collect()
    }

    fn offset_at(&self, zone: &ZoneId, _at: DateTime<Utc>) -> Result<UtcOffset, TzError> {
        self.lookup(zone)
    }

    fn local_time(&self, zone: &ZoneId, at: DateTime<Utc>) -> Result<WallTime, TzError> {
        let offset = self.lookup(zone)?;
        let shifted = at + Duration::seconds(i64::from(offset.seconds()));
        Ok(WallTime {
            hour: shifted.hour(),
            minute: shifted.minute(),
            second: shifted.second(),
        })
    }

    fn system_default(&self) -> ZoneId {
        self.default
            .clone()
            .or_else(|| self.zones.first().map(|(id, _)| id.clone()))
            .unwrap_or_else(|| ZoneId::new("UTC"))
    }
}
