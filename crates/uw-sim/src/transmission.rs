//! Per-frame packet emission and delivery.
//!
//! # Frame step
//!
//! ```text
//! ① node-to-node: live < 10, U < 0.05, ≥ 2 nodes
//!      source  ← uniform over active nodes (all nodes if none are active)
//!      targets ← selector.select_forwarders(source)
//!      empty   → absorbed, nothing emitted
//!      target  ← first (ranked selector) or uniform choice
//! ② node-to-sink: live < 15, U < 0.03
//!      source  ← uniform over all nodes, endpoint = sink
//! ③ progress of every live packet recomputed; progress ≥ 1 → delivered
//! ```
//!
//! Both channel rolls are drawn every frame so the RNG stream does not
//! depend on how many packets happen to be live.

use uw_core::{NodeId, PacketId, SimRng};
use uw_field::{Field, Node};
use uw_routing::ForwarderSelector;

use crate::packet::{Packet, PacketKind};

pub const NODE_TO_NODE_LIMIT: usize = 10;
pub const NODE_TO_NODE_PROBABILITY: f64 = 0.05;
pub const NODE_TO_SINK_LIMIT: usize = 15;
pub const NODE_TO_SINK_PROBABILITY: f64 = 0.03;

/// Something that happened to a packet during a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum PacketEvent {
    Emitted {
        id:     PacketId,
        kind:   PacketKind,
        source: NodeId,
        target: Option<NodeId>,
    },
    Delivered {
        id:   PacketId,
        kind: PacketKind,
    },
    /// The routing strategy found no forwarder for `source`.
    Absorbed { source: NodeId },
}

/// Owns the live packets and the cumulative packet counters of a run.
#[derive(Debug, Default, Clone)]
pub struct TransmissionSimulator {
    packets:   Vec<Packet>,
    next_id:   u64,
    emitted:   u64,
    delivered: u64,
    absorbed:  u64,
}

impl TransmissionSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live packets in emission order.
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn live(&self) -> usize {
        self.packets.len()
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }

    /// Run one frame at simulated time `now_ms`.  Returns the frame's events
    /// in the order they occurred.
    pub fn step<S: ForwarderSelector + ?Sized>(
        &mut self,
        field:    &Field,
        selector: &S,
        rng:      &mut SimRng,
        now_ms:   u64,
    ) -> Vec<PacketEvent> {
        let mut events = Vec::new();

        // ── ① Node-to-node channel ────────────────────────────────────────
        let roll = rng.unit();
        if self.live() < NODE_TO_NODE_LIMIT && roll < NODE_TO_NODE_PROBABILITY && field.len() >= 2 {
            events.extend(self.emit_hop(field, selector, rng, now_ms));
        }

        // ── ② Node-to-sink channel ────────────────────────────────────────
        let roll = rng.unit();
        if self.live() < NODE_TO_SINK_LIMIT && roll < NODE_TO_SINK_PROBABILITY {
            if let Some(source) = rng.choose(field.nodes()) {
                let sink = field.sink().position;
                events.push(self.launch(PacketKind::NodeToSink, source, None, sink, now_ms));
            }
        }

        // ── ③ Advance and retire ──────────────────────────────────────────
        for packet in &mut self.packets {
            packet.update(now_ms);
        }
        let before = events.len();
        self.packets.retain(|p| {
            if p.is_delivered() {
                events.push(PacketEvent::Delivered { id: p.id, kind: p.kind });
                false
            } else {
                true
            }
        });
        self.delivered += (events.len() - before) as u64;

        events
    }

    fn emit_hop<S: ForwarderSelector + ?Sized>(
        &mut self,
        field:    &Field,
        selector: &S,
        rng:      &mut SimRng,
        now_ms:   u64,
    ) -> Option<PacketEvent> {
        let mut pool: Vec<&Node> = field.active_nodes().collect();
        if pool.is_empty() {
            pool = field.nodes().iter().collect();
        }
        let &source = rng.choose(&pool)?;

        let forwarders = selector.select_forwarders(source, field);
        let target = if selector.is_ranked() {
            forwarders.first().copied()
        } else {
            rng.choose(&forwarders).copied()
        };

        Some(match target {
            Some(target) => {
                self.launch(PacketKind::NodeToNode, source, Some(target.id), target.position(), now_ms)
            }
            None => {
                log::debug!("packet from {} absorbed: no forwarders", source.id);
                self.absorbed += 1;
                PacketEvent::Absorbed { source: source.id }
            }
        })
    }

    fn launch(
        &mut self,
        kind:   PacketKind,
        source: &Node,
        target: Option<NodeId>,
        end:    uw_core::Point3,
        now_ms: u64,
    ) -> PacketEvent {
        let id = PacketId(self.next_id);
        self.next_id += 1;
        self.emitted += 1;
        self.packets.push(Packet {
            id,
            kind,
            source: source.id,
            target,
            start: source.position(),
            end,
            created_at_ms: now_ms,
            progress: 0.0,
        });
        log::trace!("{id} {kind:?} emitted from {}", source.id);
        PacketEvent::Emitted { id, kind, source: source.id, target }
    }

    /// Drop every live packet and zero the counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
