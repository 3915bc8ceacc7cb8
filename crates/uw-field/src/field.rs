//! The `Field`: owner of every node plus the sink.

use uw_core::{NodeId, Point3, SimRng, UwError, UwResult};

use crate::kinematics::{self, KinematicsStep};
use crate::node::MAX_ENERGY;
use crate::{Node, WaterCurrent};

// ── Placement constants ───────────────────────────────────────────────────────

/// Width of the planar spread; `x` and `y` are drawn from `[-150, 150)`.
const PLANAR_SPREAD: f64 = 300.0;
const Z_MIN: f64 = -250.0;
const Z_MAX: f64 = -30.0;
/// Lower bound of the depth bias draw; values near 0.3 land deepest.
const DEPTH_BIAS_MIN: f64 = 0.3;

/// Nodes at or below this energy drop out of the active view.
pub const ACTIVE_ENERGY_FLOOR: f64 = 10.0;

// ── Sink ──────────────────────────────────────────────────────────────────────

/// The single fixed data collector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sink {
    pub position: Point3,
}

impl Default for Sink {
    /// The reference deployment places the sink at the origin.
    fn default() -> Self {
        Self { position: Point3::ORIGIN }
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// All sensor nodes of a run (index == id) plus the sink.
///
/// Keeps the initial placement so [`Field::reset`] can restore it without
/// re-randomizing; a fresh layout needs a fresh [`Field::initialize`].
#[derive(Debug, Clone)]
pub struct Field {
    nodes:   Vec<Node>,
    sink:    Sink,
    /// `(position, velocity)` per node at creation.
    initial: Vec<(Point3, Point3)>,
}

impl Field {
    /// Place `count` nodes with a stratified random layout.
    ///
    /// `x`/`y` are uniform over the planar spread; `z` is biased toward the
    /// deep end via `Z_MIN + U(0.3, 1.0)·(Z_MAX - Z_MIN)`.  All nodes start
    /// fully charged and inactive.
    ///
    /// # Errors
    ///
    /// `count == 0` is rejected with [`UwError::InvalidNodeCount`].
    pub fn initialize(count: usize, rng: &mut SimRng) -> UwResult<Self> {
        if count == 0 {
            return Err(UwError::InvalidNodeCount(count));
        }

        let nodes = (0..count)
            .map(|i| {
                let z = Z_MIN + rng.gen_range(DEPTH_BIAS_MIN..1.0) * (Z_MAX - Z_MIN);
                let position = Point3::new(
                    rng.unit() * PLANAR_SPREAD - PLANAR_SPREAD / 2.0,
                    rng.unit() * PLANAR_SPREAD - PLANAR_SPREAD / 2.0,
                    z,
                );
                let velocity = Point3::new(
                    rng.centered() * 0.1,
                    rng.centered() * 0.1,
                    rng.centered() * 0.05,
                );
                let id = NodeId::try_from(i).map_err(|e| UwError::Config(e.to_string()))?;
                Ok(Node::new(id, position).with_velocity(velocity))
            })
            .collect::<UwResult<Vec<_>>>()?;

        log::debug!("placed {count} nodes");
        Ok(Self::assemble(nodes))
    }

    /// Build a field from hand-placed nodes.
    ///
    /// Node ids must be dense and in order (`nodes[i].id == NodeId(i)`).
    pub fn from_nodes(nodes: Vec<Node>) -> UwResult<Self> {
        if nodes.is_empty() {
            return Err(UwError::InvalidNodeCount(0));
        }
        if let Some((i, node)) = nodes.iter().enumerate().find(|(i, n)| n.id.index() != *i) {
            return Err(UwError::Config(format!(
                "node at index {i} has id {}; ids must be dense and ordered",
                node.id
            )));
        }
        Ok(Self::assemble(nodes))
    }

    fn assemble(nodes: Vec<Node>) -> Self {
        let initial = nodes.iter().map(|n| (n.position(), n.velocity)).collect();
        Self { nodes, sink: Sink::default(), initial }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a constructed field; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Mutable access to the whole node table, for topology passes.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    #[inline]
    pub fn sink(&self) -> Sink {
        self.sink
    }

    /// Nodes still able to originate traffic.
    ///
    /// A derived view over the node table, recomputed on every call.
    pub fn active_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.energy() > ACTIVE_ENERGY_FLOOR)
    }

    /// `flags[i]` is `true` if node `i` was chosen as an MPR by any other node.
    pub fn mpr_flags(&self) -> Vec<bool> {
        let mut flags = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for &mpr in node.mprs() {
                if let Some(flag) = flags.get_mut(mpr.index()) {
                    *flag = true;
                }
            }
        }
        flags
    }

    pub fn average_energy(&self) -> f64 {
        self.nodes.iter().map(Node::energy).sum::<f64>() / self.nodes.len().max(1) as f64
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Advance every node by one kinematics tick.
    pub fn tick(&mut self, step: &KinematicsStep, current: WaterCurrent, rng: &mut SimRng) {
        for node in &mut self.nodes {
            kinematics::decay_and_activate(node, step, rng);
            kinematics::drift(node, step, current, rng);
        }
    }

    /// Restore the state at creation: full energy, inactive, no topology,
    /// initial positions and velocities.  Ids are untouched.
    pub fn reset(&mut self) {
        for (node, &(position, velocity)) in self.nodes.iter_mut().zip(&self.initial) {
            node.set_position(position);
            node.velocity = velocity;
            node.set_energy(MAX_ENERGY);
            node.is_active = false;
            node.activated_at = None;
            node.clear_topology();
        }
        log::debug!("field reset ({} nodes)", self.nodes.len());
    }
}
