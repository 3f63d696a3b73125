use std::fmt;

use serde::Serialize;

/// An IANA timezone identifier such as `"America/New_York"`.
///
/// A `ZoneId` is just a name; whether it resolves is decided by the
/// [`TzDatabase`](crate::TzDatabase) it came from. Identifiers obtained from
/// a database's enumeration always resolve against that same database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_id_display_is_raw_identifier() {
        let zone = ZoneId::new("Europe/Paris");
        assert_eq!(zone.to_string(), "Europe/Paris");
        assert_eq!(zone.as_str(), "Europe/Paris");
    }

    #[test]
    fn test_zone_id_equality() {
        assert_eq!(ZoneId::from("UTC"), ZoneId::new("UTC"));
        assert_ne!(ZoneId::from("UTC"), ZoneId::from("Europe/Paris"));
    }
}
