//! Immutable per-frame views handed to observers.
//!
//! Snapshots are copies: nothing in them points back into engine state, and
//! the 2-D projection is applied here rather than to the nodes themselves.

use uw_core::{NodeId, PacketId, Point3, ViewMode};
use uw_field::WaterCurrent;

use crate::packet::PacketKind;
use crate::stats::Statistics;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeSnapshot {
    pub id:        NodeId,
    pub position:  Point3,
    pub energy:    f64,
    pub depth:     f64,
    pub is_active: bool,
    /// Selected as a multipoint relay by at least one other node.
    pub is_mpr:    bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PacketSnapshot {
    pub id:       PacketId,
    pub kind:     PacketKind,
    pub position: Point3,
    pub progress: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub nodes:        Vec<NodeSnapshot>,
    pub packets:      Vec<PacketSnapshot>,
    pub stats:        Statistics,
    pub current:      WaterCurrent,
    /// Fraction of the configured duration elapsed, `[0, 1]`.
    pub progress:     f64,
}

/// Map an engine position into the requested view.
pub fn project(position: Point3, view: ViewMode) -> Point3 {
    match view {
        ViewMode::ThreeD => position,
        ViewMode::TwoD   => Point3 { z: ViewMode::FLAT_Z, ..position },
    }
}
