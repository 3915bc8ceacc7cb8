//! The `OutputWriter` trait implemented by reading sinks.

use uw_sim::EnergyReading;

use crate::OutputResult;

/// Destination for the energy-reading series.
///
/// Errors surfaced while driven by [`ReadingsObserver`](crate::ReadingsObserver)
/// are stored and retrieved with its `take_error`.
pub trait OutputWriter {
    fn write_reading(&mut self, reading: &EnergyReading) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
