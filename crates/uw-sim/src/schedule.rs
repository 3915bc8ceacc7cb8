//! `DriverQueue` — tick-keyed queue of periodic drivers.
//!
//! Each driver fires on a tick boundary and re-registers itself one period
//! later, so a tick with nothing due costs a single map lookup.  Periods are
//! read at re-registration time: changing the simulation speed affects the
//! kinematics driver from its next firing on.

use std::collections::BTreeMap;

use uw_core::Tick;

/// The periodic processes of a run, in the order they fire within one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Driver {
    /// Recompute the ambient water current.
    Current,
    /// Energy decay, activation, and drift for every node.
    Kinematics,
    /// Neighbor tables and MPR sets (OLSR runs only).
    Topology,
    /// Advance the statistics model and append an energy reading.
    Statistics,
}

#[derive(Default, Debug, Clone)]
pub struct DriverQueue {
    inner: BTreeMap<Tick, Vec<Driver>>,
}

impl DriverQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: Tick, driver: Driver) {
        self.inner.entry(tick).or_default().push(driver);
    }

    /// Remove and return every driver due at exactly `tick`, in firing order.
    pub fn drain_tick(&mut self, tick: Tick) -> Vec<Driver> {
        let mut due = self.inner.remove(&tick).unwrap_or_default();
        due.sort_unstable();
        due.dedup();
        due
    }

    /// The earliest tick with a driver due.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Tick at which `driver` is next due, if it is queued.
    pub fn due_at(&self, driver: Driver) -> Option<Tick> {
        self.inner
            .iter()
            .find(|(_, drivers)| drivers.contains(&driver))
            .map(|(&tick, _)| tick)
    }

    pub fn len(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
