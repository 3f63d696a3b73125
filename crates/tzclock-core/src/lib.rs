#![deny(clippy::all)]

//! Pure domain logic for tzclock: a timezone-database abstraction, the
//! offset grouper and wall-clock time formatting. No I/O and no terminal
//! code lives here; everything is deterministic given a database and a
//! reference instant.

mod clock;
mod error;
mod format;
mod grouper;
mod offset;
pub mod test_support;
mod tzdb;
mod zone;

pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use error::TzError;
pub use format::WallTime;
pub use grouper::OffsetGroup;
pub use grouper::OffsetGroups;
pub use offset::UtcOffset;
pub use tzdb::IanaDatabase;
pub use tzdb::TzDatabase;
pub use zone::ZoneId;
