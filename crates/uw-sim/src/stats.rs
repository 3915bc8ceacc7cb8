//! Aggregate statistics and the energy-reading series.
//!
//! The statistics model is synthetic: it does not measure the packets in
//! flight.  Each statistics tick draws increments whose scale depends only on
//! the protocol's delivery efficiency and energy factor.

use uw_core::{Protocol, SimRng};

/// Seconds added to `network_lifetime_secs` per statistics tick.
pub const LIFETIME_STEP_SECS: f64 = 0.1;

const AVG_ENERGY_STEP: f64 = 0.1;
const MAX_ENERGY_STEP: f64 = 0.15;

/// Run-wide counters.  Replaced as a whole on every statistics tick, so a
/// reader never sees a half-updated value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    pub packets_sent:          u64,
    pub packets_received:      u64,
    /// `packets_sent · packet_size_bytes`.
    pub bytes_sent:            u64,
    /// Accumulated average energy spent, in joules.
    pub avg_energy:            f64,
    /// Accumulated peak energy spent, in joules.
    pub max_energy:            f64,
    pub network_lifetime_secs: f64,
}

impl Statistics {
    /// `received / sent`, or 0 when nothing has been sent.
    pub fn delivery_ratio(&self) -> f64 {
        if self.packets_sent == 0 {
            0.0
        } else {
            self.packets_received as f64 / self.packets_sent as f64
        }
    }

    /// The value after one statistics tick.
    ///
    /// ```text
    /// sent     += U{1, 2, 3}
    /// received += floor(Δsent · efficiency · U(0.9, 1.1))
    /// avg      += U(0, 1) · 0.1  · factor
    /// max      += U(0, 1) · 0.15 · factor
    /// lifetime += 0.1
    /// ```
    pub fn advanced(&self, protocol: Protocol, packet_size_bytes: u32, rng: &mut SimRng) -> Self {
        let sent_inc: u64 = rng.gen_range(1..=3);
        let jitter: f64 = rng.gen_range(0.9..1.1);
        let received_inc = (sent_inc as f64 * protocol.delivery_efficiency() * jitter).floor() as u64;
        let factor = protocol.energy_factor();
        let packets_sent = self.packets_sent + sent_inc;

        Self {
            packets_sent,
            packets_received:      self.packets_received + received_inc,
            bytes_sent:            packets_sent * packet_size_bytes as u64,
            avg_energy:            self.avg_energy + rng.unit() * AVG_ENERGY_STEP * factor,
            max_energy:            self.max_energy + rng.unit() * MAX_ENERGY_STEP * factor,
            network_lifetime_secs: self.network_lifetime_secs + LIFETIME_STEP_SECS,
        }
    }
}

/// One row of the energy time series, appended per statistics tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyReading {
    /// Simulated seconds since the run started.
    pub timestamp_secs: f64,
    pub avg_energy:     f64,
    pub max_energy:     f64,
    pub node_count:     usize,
    pub protocol:       Protocol,
}

impl EnergyReading {
    pub fn from_statistics(
        stats:          &Statistics,
        timestamp_secs: f64,
        node_count:     usize,
        protocol:       Protocol,
    ) -> Self {
        Self {
            timestamp_secs,
            avg_energy: stats.avg_energy,
            max_energy: stats.max_energy,
            node_count,
            protocol,
        }
    }
}
