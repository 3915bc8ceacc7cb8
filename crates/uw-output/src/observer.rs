//! `ReadingsObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use uw_sim::{EnergyReading, SimObserver, Statistics};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every energy reading to an
/// [`OutputWriter`] as soon as the statistics driver produces it.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReadingsObserver<W: OutputWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReadingsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Readings successfully handed to the writer.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("energy reading output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for ReadingsObserver<W> {
    fn on_statistics(&mut self, _stats: &Statistics, reading: &EnergyReading) {
        let result = self.writer.write_reading(reading);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_stats: &Statistics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
