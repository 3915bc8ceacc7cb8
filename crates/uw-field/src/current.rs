//! Ambient water current.

use uw_core::Point3;

/// The process-wide drift vector applied by kinematics.
///
/// The driver in `uw-sim` replaces the whole value each period; the field
/// only ever reads it.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterCurrent(pub Point3);

impl WaterCurrent {
    /// No current.
    pub const STILL: WaterCurrent = WaterCurrent(Point3::ORIGIN);

    /// Bounded smooth oscillation at `t_secs` simulated seconds.
    ///
    /// Each axis has its own period so the direction slowly rotates:
    /// `x = 0.5·sin(t/10)`, `y = 0.3·cos(t/12)`, `z = 0.2·sin(t/15)`.
    pub fn oscillating(t_secs: f64) -> Self {
        WaterCurrent(Point3::new(
            (t_secs / 10.0).sin() * 0.5,
            (t_secs / 12.0).cos() * 0.3,
            (t_secs / 15.0).sin() * 0.2,
        ))
    }

    #[inline]
    pub fn vector(self) -> Point3 {
        self.0
    }

    /// Magnitude in units per second.
    #[inline]
    pub fn strength(self) -> f64 {
        self.0.length()
    }
}
