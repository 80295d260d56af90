//! CSV export for hourly dispatch results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::types::DispatchOutcome;
use crate::profiles::DeficitProfile;

/// Schema v1 column header for CSV telemetry export.
const HEADER: &str = "hour,unmet_kwh,blackout,backup_active,backup_kwh,fuel_litres";

/// Exports a dispatch run to a CSV file at the given path.
///
/// Writes a header row followed by one data row per hour using the schema
/// v1 column layout. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(
    profile: &DeficitProfile,
    outcome: &DispatchOutcome,
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(profile, outcome, buf)
}

/// Writes a dispatch run as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(
    profile: &DeficitProfile,
    outcome: &DispatchOutcome,
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for h in 0..profile.len() {
        wtr.write_record(&[
            h.to_string(),
            format!("{:.4}", profile.unmet_energy_kwh[h]),
            format!("{:.0}", profile.blackouts[h]),
            format!("{:.0}", outcome.schedule.backup_active[h]),
            format!("{:.4}", outcome.schedule.backup_energy_kwh[h]),
            format!("{:.4}", outcome.fuel_usage_litres[h]),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
