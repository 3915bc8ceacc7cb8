//! Simulation observer trait for frame sampling and data collection.

use crate::snapshot::FrameSnapshot;
use crate::stats::{EnergyReading, Statistics};
use crate::transmission::PacketEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the run advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers only ever receive borrowed,
/// immutable views; they cannot write back into the engine.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_statistics(&mut self, stats: &Statistics, reading: &EnergyReading) {
///         println!("{:.1}s: {} sent", reading.timestamp_secs, stats.packets_sent);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per engine tick, after drivers and packets have run.
    fn on_frame(&mut self, _frame: &FrameSnapshot) {}

    /// Called for every packet emission, delivery, or absorption.
    fn on_packet(&mut self, _event: &PacketEvent) {}

    /// Called after each statistics tick with the new totals and the reading
    /// just appended to the series.
    fn on_statistics(&mut self, _stats: &Statistics, _reading: &EnergyReading) {}

    /// Called once when `run` returns, with the final totals.
    fn on_sim_end(&mut self, _final_stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
