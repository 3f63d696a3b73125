use thiserror::Error;

use crate::zone::ZoneId;

/// Timezone database errors.
///
/// There is deliberately no wider taxonomy: an identifier either resolves
/// against the database that enumerated it or the system cannot function
/// meaningfully. An empty database is not an error (it yields an empty
/// grouping and an unusable picker).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TzError {
    #[error("unknown timezone identifier: {0}")]
    UnknownZone(ZoneId),
}
