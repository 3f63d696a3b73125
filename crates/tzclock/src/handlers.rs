//! Non-interactive command handlers.

use std::io;
use std::io::Write;

use tzclock_core::Clock;
use tzclock_core::IanaDatabase;
use tzclock_core::OffsetGroups;
use tzclock_core::SystemClock;

use crate::commands::OutputFormat;
use crate::error::AppError;

/// `tzclock zones`: print the offset grouping for "now".
pub fn handle_zones(format: OutputFormat) -> Result<(), AppError> {
    let db = IanaDatabase::new();
    let groups = OffsetGroups::compute(&db, SystemClock.now());
    tracing::info!(
        zones = groups.zone_count(),
        offsets = groups.len(),
        "computed offset grouping"
    );
    print_zones(&groups, format, &mut io::stdout().lock())?;
    Ok(())
}

fn print_zones(
    groups: &OffsetGroups,
    format: OutputFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for group in groups {
                writeln!(out, "{}", group.offset)?;
                for zone in &group.zones {
                    writeln!(out, "  {zone}")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, groups).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
