//! Per-node state.

use uw_core::{NodeId, Point3};

/// Full charge.  Energy is a percentage of this.
pub const MAX_ENERGY: f64 = 100.0;

/// A single underwater sensor node.
///
/// `position` and `depth` are private so every write goes through
/// [`Node::set_position`], which recomputes `depth = |position.y|`.
/// Energy is likewise kept in `[0, MAX_ENERGY]` by its setters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Stable id; equals the node's index in the field.
    pub id: NodeId,

    position: Point3,
    depth:    f64,

    /// Current drift velocity (units per second before the movement scale).
    pub velocity: Point3,

    energy: f64,

    /// Set by the activation scheduler; cleared only by a field reset.
    pub is_active: bool,

    /// Simulated seconds at which the node became active.
    pub activated_at: Option<f64>,

    /// 1-hop neighbors, ascending id order.  OLSR only.
    neighbors: Vec<NodeId>,

    /// 2-hop neighbors in discovery order.  OLSR only.
    two_hop_neighbors: Vec<NodeId>,

    /// Selected multipoint relays in selection order.  OLSR only.
    mprs: Vec<NodeId>,
}

impl Node {
    /// A fully charged, inactive, stationary node at `position`.
    pub fn new(id: NodeId, position: Point3) -> Self {
        Self {
            id,
            position,
            depth: position.depth(),
            velocity: Point3::ORIGIN,
            energy: MAX_ENERGY,
            is_active: false,
            activated_at: None,
            neighbors: Vec::new(),
            two_hop_neighbors: Vec::new(),
            mprs: Vec::new(),
        }
    }

    /// Builder-style energy override (clamped to `[0, MAX_ENERGY]`).
    pub fn with_energy(mut self, energy: f64) -> Self {
        self.set_energy(energy);
        self
    }

    pub fn with_velocity(mut self, velocity: Point3) -> Self {
        self.velocity = velocity;
        self
    }

    // ── Position / depth ──────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Depth below the surface; always `|position.y|`.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Move the node and recompute its depth.
    #[inline]
    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
        self.depth = position.depth();
    }

    #[inline]
    pub fn distance_to(&self, point: Point3) -> f64 {
        self.position.distance(point)
    }

    // ── Energy ────────────────────────────────────────────────────────────

    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy.clamp(0.0, MAX_ENERGY);
    }

    /// Spend `amount` energy, flooring at zero.
    #[inline]
    pub fn drain(&mut self, amount: f64) {
        self.energy = (self.energy - amount).max(0.0);
    }

    // ── Topology state ────────────────────────────────────────────────────

    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    pub fn two_hop_neighbors(&self) -> &[NodeId] {
        &self.two_hop_neighbors
    }

    #[inline]
    pub fn mprs(&self) -> &[NodeId] {
        &self.mprs
    }

    /// `true` if `other` is a 1-hop neighbor.  Neighbor lists are sorted.
    #[inline]
    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.binary_search(&other).is_ok()
    }

    /// Replace the neighbor sets.  `neighbors` is sorted on the way in.
    pub fn set_neighbors(&mut self, mut neighbors: Vec<NodeId>, two_hop: Vec<NodeId>) {
        neighbors.sort_unstable();
        neighbors.dedup();
        self.neighbors = neighbors;
        self.two_hop_neighbors = two_hop;
    }

    pub fn set_mprs(&mut self, mprs: Vec<NodeId>) {
        self.mprs = mprs;
    }

    pub fn clear_topology(&mut self) {
        self.neighbors.clear();
        self.two_hop_neighbors.clear();
        self.mprs.clear();
    }
}
