use std::fmt;

use serde::Serialize;
use serde::Serializer;

/// A timezone's displacement from UTC at a specific instant, in seconds.
///
/// This is not a property of a timezone alone: DST transitions move a zone
/// between offsets over the year, so an offset is always relative to some
/// reference instant. Offsets order and hash by their signed value, which
/// makes them usable as grouping keys.
///
/// The string form is ISO-8601 extended: `Z` for zero, otherwise `+05:30` /
/// `-03:30`, with a trailing seconds component only when nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset { seconds: 0 };

    pub fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            return f.write_str("Z");
        }
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let total = self.seconds.unsigned_abs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        write!(f, "{}{:02}:{:02}", sign, hours, minutes)?;
        if seconds != 0 {
            write!(f, ":{:02}", seconds)?;
        }
        Ok(())
    }
}

impl Serialize for UtcOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
