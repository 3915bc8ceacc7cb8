//! In-flight packets.
//!
//! A packet is purely visual: it travels in a straight line between two
//! endpoints fixed at emission, taking [`TRAVEL_MS`] of simulated time.
//! Nothing about the network state changes when it arrives.

use uw_core::{NodeId, PacketId, Point3};

/// Simulated milliseconds from emission to delivery.  Independent of the
/// simulation-speed multiplier.
pub const TRAVEL_MS: f64 = 3000.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// Hop from a source node to a forwarder chosen by the routing strategy.
    NodeToNode,
    /// Direct transmission from a node to the sink.
    NodeToSink,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Packet {
    pub id:            PacketId,
    pub kind:          PacketKind,
    pub source:        NodeId,
    /// `None` for sink-bound packets.
    pub target:        Option<NodeId>,
    pub start:         Point3,
    pub end:           Point3,
    pub created_at_ms: u64,
    /// Fraction of the trip completed, `[0, 1]`.  Never decreases.
    pub progress:      f64,
}

impl Packet {
    /// Progress at simulated time `now_ms`.
    ///
    /// `min(1, (now - created) / TRAVEL_MS)`; a clock that reads earlier than
    /// the creation time counts as zero.
    pub fn progress_at(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.created_at_ms) as f64;
        (elapsed / TRAVEL_MS).min(1.0)
    }

    /// Recompute `progress` from the clock; it is never lowered.
    pub fn update(&mut self, now_ms: u64) {
        self.progress = self.progress.max(self.progress_at(now_ms));
    }

    /// Linear interpolation between the endpoints at the current progress.
    pub fn position(&self) -> Point3 {
        self.start.lerp(self.end, self.progress)
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.progress >= 1.0
    }
}
