//! One-shot export of a reading series.

use std::path::{Path, PathBuf};

use uw_core::Protocol;
use uw_sim::EnergyReading;

use crate::csv::CsvWriter;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// What [`export_readings`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A file was written at this path.
    Written(PathBuf),
    /// The series was empty; no file was created.
    NothingToExport,
}

/// `uwsn_energy_<PROTOCOL>_<unix_millis>.csv`
pub fn export_file_name(protocol: Protocol, unix_millis: i64) -> String {
    format!("uwsn_energy_{}_{unix_millis}.csv", protocol.as_str())
}

/// A fresh export path in `dir`, stamped with the current wall-clock time.
pub fn timestamped_path(dir: &Path, protocol: Protocol) -> PathBuf {
    dir.join(export_file_name(protocol, chrono::Utc::now().timestamp_millis()))
}

/// Write `readings` to a new timestamped CSV file in `dir`.
///
/// An empty series is not an error: it returns
/// [`ExportOutcome::NothingToExport`] and touches nothing on disk.
pub fn export_readings(
    dir:      &Path,
    protocol: Protocol,
    readings: &[EnergyReading],
) -> OutputResult<ExportOutcome> {
    if readings.is_empty() {
        log::info!("no energy readings to export");
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = timestamped_path(dir, protocol);
    let mut writer = CsvWriter::create(&path)?;
    for reading in readings {
        writer.write_reading(reading)?;
    }
    writer.finish()?;

    log::info!("exported {} readings to {}", readings.len(), path.display());
    Ok(ExportOutcome::Written(path))
}
