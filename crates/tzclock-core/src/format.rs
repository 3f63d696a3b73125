use std::fmt;

/// Local wall-clock time of day in some timezone.
///
/// Renders as `H:MM:SS`, 24-hour: the hour carries no leading zero (`0`
/// through `23`, so midnight is `0:00:00`, not `00:00:00` and not `12`),
/// while minute and second are always two digits. No AM/PM, no timezone
/// abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
