//! CSV output backend.
//!
//! ```text
//! Timestamp(s),AvgEnergy(J),MaxEnergy(J),NodeCount,Protocol
//! 0.2,0.07,0.11,5,HHVBF
//! ```
//!
//! Timestamps carry one decimal, energies two.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use uw_sim::EnergyReading;

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const HEADER: [&str; 5] = ["Timestamp(s)", "AvgEnergy(J)", "MaxEnergy(J)", "NodeCount", "Protocol"];

/// Writes energy readings to a single CSV file.
pub struct CsvWriter<W: Write = File> {
    inner:    Writer<W>,
    rows:     usize,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any byte sink and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(HEADER)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Data rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.inner.flush()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

fn record(reading: &EnergyReading) -> [String; 5] {
    [
        format!("{:.1}", reading.timestamp_secs),
        format!("{:.2}", reading.avg_energy),
        format!("{:.2}", reading.max_energy),
        reading.node_count.to_string(),
        reading.protocol.as_str().to_owned(),
    ]
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_reading(&mut self, reading: &EnergyReading) -> OutputResult<()> {
        self.inner.write_record(record(reading))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
