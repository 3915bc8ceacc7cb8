//! `uw-output` — energy-reading export for the rust_uwsn routing engine.
//!
//! One backend is provided: CSV, one file per export, named
//! `uwsn_energy_<PROTOCOL>_<unix_millis>.csv`.
//!
//! | Entry point           | Use                                                    |
//! |-----------------------|--------------------------------------------------------|
//! | [`export_readings`]   | One-shot dump of `sim.readings()` after (or during) a run |
//! | [`ReadingsObserver`]  | Streams readings to any [`OutputWriter`] as they occur |
//!
//! # Usage
//!
//! ```rust,ignore
//! use uw_output::{ExportOutcome, export_readings};
//!
//! sim.run(&mut NoopObserver)?;
//! match export_readings(Path::new("./out"), config.protocol, sim.readings())? {
//!     ExportOutcome::Written(path)   => println!("wrote {}", path.display()),
//!     ExportOutcome::NothingToExport => println!("no readings yet"),
//! }
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod observer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{ExportOutcome, export_file_name, export_readings, timestamped_path};
pub use observer::ReadingsObserver;
pub use writer::OutputWriter;
