//! Run configuration and boundary validation.
//!
//! `SimConfig` is typically loaded from a JSON file by the application crate
//! and passed to the simulation builder, which calls [`SimConfig::validate`]
//! before anything is allocated.  Out-of-range values are rejected, never
//! clamped.

use crate::{Protocol, UwError, UwResult};

/// How the presentation layer wants node positions projected.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// Full-depth positions.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "3D"))]
    ThreeD,
    /// Positions flattened onto a fixed depth plane (see [`ViewMode::FLAT_Z`]).
    #[cfg_attr(feature = "serde", serde(rename = "2D"))]
    TwoD,
}

impl ViewMode {
    /// The `z` coordinate every position is projected to in 2-D view.
    pub const FLAT_Z: f64 = -20.0;
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of sensor nodes.  1–500.
    pub node_count: usize,

    /// Number of sinks.  Only a single sink is supported; must be 1.
    pub sink_count: usize,

    /// Simulated seconds after which the run stops on its own.
    pub duration_secs: f64,

    /// Nominal link data rate in bits per second.
    pub data_rate_bps: u32,

    /// Packet size in bytes.  16–1024.
    pub packet_size_bytes: u32,

    /// Forwarding protocol for the whole run.
    pub protocol: Protocol,

    /// Packet budget announced to the presentation layer.
    pub packet_count: u32,

    /// Nominal seconds between application packets.
    pub packet_interval_secs: f64,

    /// Node movement multiplier.  0 freezes the field; 1 is the reference
    /// drift speed; 10 is the maximum.
    pub movement_speed: f64,

    /// Simulation speed multiplier.  1–100; 50 is nominal.
    pub simulation_speed: u32,

    /// Projection applied to snapshot positions.
    pub view_mode: ViewMode,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Simulated milliseconds per engine tick (one render frame).
    pub tick_duration_ms: u32,

    /// Acoustic communication range used for neighbor discovery (OLSR).
    pub communication_range: f64,

    /// Seconds between OLSR neighbor/MPR refreshes.
    pub topology_refresh_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            node_count:            5,
            sink_count:            1,
            duration_secs:         20.0,
            data_rate_bps:         100,
            packet_size_bytes:     64,
            protocol:              Protocol::Hhvbf,
            packet_count:          100,
            packet_interval_secs:  1.0,
            movement_speed:        1.0,
            simulation_speed:      50,
            view_mode:             ViewMode::ThreeD,
            seed:                  42,
            tick_duration_ms:      50,
            communication_range:   100.0,
            topology_refresh_secs: 2.0,
        }
    }
}

impl SimConfig {
    pub const MAX_NODES: usize = 500;
    pub const PACKET_SIZE_RANGE: (u32, u32) = (16, 1024);
    pub const MOVEMENT_SPEED_RANGE: (f64, f64) = (0.0, 10.0);
    pub const SIMULATION_SPEED_RANGE: (u32, u32) = (1, 100);

    /// Speed multiplier normalised so that the nominal speed (50) is 1.0.
    #[inline]
    pub fn speed_factor(&self) -> f64 {
        self.simulation_speed as f64 / 50.0
    }

    /// Reject any value outside its documented range.
    pub fn validate(&self) -> UwResult<()> {
        if self.node_count == 0 {
            return Err(UwError::InvalidNodeCount(self.node_count));
        }
        check_range("node_count", self.node_count as f64, 1.0, Self::MAX_NODES as f64)?;
        if self.sink_count != 1 {
            return Err(UwError::Config(format!(
                "exactly one sink is supported, got {}",
                self.sink_count
            )));
        }
        check_positive("duration_secs", self.duration_secs)?;
        check_positive("data_rate_bps", self.data_rate_bps as f64)?;
        let (lo, hi) = Self::PACKET_SIZE_RANGE;
        check_range("packet_size_bytes", self.packet_size_bytes as f64, lo as f64, hi as f64)?;
        check_positive("packet_count", self.packet_count as f64)?;
        check_positive("packet_interval_secs", self.packet_interval_secs)?;
        let (lo, hi) = Self::MOVEMENT_SPEED_RANGE;
        check_range("movement_speed", self.movement_speed, lo, hi)?;
        let (lo, hi) = Self::SIMULATION_SPEED_RANGE;
        check_range("simulation_speed", self.simulation_speed as f64, lo as f64, hi as f64)?;
        check_positive("tick_duration_ms", self.tick_duration_ms as f64)?;
        check_positive("communication_range", self.communication_range)?;
        check_positive("topology_refresh_secs", self.topology_refresh_secs)?;
        Ok(())
    }
}

fn check_range(what: &'static str, got: f64, min: f64, max: f64) -> UwResult<()> {
    // NaN fails both comparisons and is rejected here too.
    if got >= min && got <= max {
        Ok(())
    } else {
        Err(UwError::OutOfRange { what, got, min, max })
    }
}

fn check_positive(what: &'static str, got: f64) -> UwResult<()> {
    if got > 0.0 && got.is_finite() {
        Ok(())
    } else {
        Err(UwError::OutOfRange { what, got, min: f64::MIN_POSITIVE, max: f64::MAX })
    }
}
