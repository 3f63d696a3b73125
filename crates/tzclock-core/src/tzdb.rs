//! Timezone database abstraction.
//!
//! The grouper and the clock formatting are pure functions over this
//! interface, so tests can inject a fixed zone/offset table instead of
//! depending on the host's real IANA data.

use chrono::DateTime;
use chrono::Offset;
use chrono::TimeZone;
use chrono::Timelike;
use chrono::Utc;
use chrono_tz::Tz;

use crate::error::TzError;
use crate::format::WallTime;
use crate::offset::UtcOffset;
use crate::zone::ZoneId;

/// DST-aware timezone database.
///
/// Identifiers returned by [`zone_ids`](TzDatabase::zone_ids) must resolve
/// in every other method of the same database; an identifier from anywhere
/// else may yield [`TzError::UnknownZone`].
pub trait TzDatabase {
    /// All known zone identifiers, in database enumeration order.
    fn zone_ids(&self) -> Vec<ZoneId>;

    /// The zone's UTC offset at the given instant.
    fn offset_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> Result<UtcOffset, TzError>;

    /// The zone's local wall-clock time at the given instant.
    fn local_time(&self, zone: &ZoneId, at: DateTime<Utc>) -> Result<WallTime, TzError>;

    /// The host system's default zone identifier.
    ///
    /// Must be one of the identifiers [`zone_ids`](TzDatabase::zone_ids)
    /// enumerates.
    fn system_default(&self) -> ZoneId;
}

/// Production database backed by the IANA data bundled with `chrono-tz`.
///
/// The host default comes from `iana-time-zone`; if the host reports a name
/// this database does not know (or reports nothing), UTC is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaDatabase;

impl IanaDatabase {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, zone: &ZoneId) -> Result<Tz, TzError> {
        zone.as_str()
            .parse::<Tz>()
            .map_err(|_| TzError::UnknownZone(zone.clone()))
    }
}

impl TzDatabase for IanaDatabase {
    fn zone_ids(&self) -> Vec<ZoneId> {
        chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| ZoneId::new(tz.name()))
            .collect()
    }

    fn offset_at(&self, zone: &ZoneId, at: DateTime<Utc>) -> Result<UtcOffset, TzError> {
        let tz = self.resolve(zone)?;
        let offset = tz.offset_from_utc_datetime(&at.naive_utc());
        Ok(UtcOffset::from_seconds(offset.fix().local_minus_utc()))
    }

    fn local_time(&self, zone: &ZoneId, at: DateTime<Utc>) -> Result<WallTime, TzError> {
        let tz = self.resolve(zone)?;
        let local = at.with_timezone(&tz);
        Ok(WallTime {
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        })
    }

    fn system_default(&self) -> ZoneId {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| name.parse::<Tz>().ok())
            .map(|tz| ZoneId::new(tz.name()))
            .unwrap_or_else(|| ZoneId::new("UTC"))
    }
}
