//! 1-hop and 2-hop neighbor discovery.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over node positions answers "who is within
//! `range` of p?" without scanning every pair.  The query compares squared
//! distances, and `(a - b)²` is bit-identical to `(b - a)²`, so the resulting
//! neighbor relation is exactly symmetric.
//!
//! The index is rebuilt on every refresh: nodes drift between refreshes and
//! bulk loading a few hundred points is cheaper than incremental updates.

use rstar::RTree;
use rstar::primitives::GeomWithData;

use uw_core::{NodeId, Point3};
use uw_field::Field;

use crate::IdSet;

/// R-tree entry: a node position tagged with its id.
type IndexedNode = GeomWithData<[f64; 3], NodeId>;

/// Range-query index over a snapshot of node positions.
pub struct NeighborIndex {
    tree: RTree<IndexedNode>,
}

impl NeighborIndex {
    /// Bulk-load the current positions of every node in `field`.
    pub fn build(field: &Field) -> Self {
        let entries = field
            .nodes()
            .iter()
            .map(|n| GeomWithData::new(n.position().as_array(), n.id))
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Ids of all indexed nodes with distance `≤ range` from `point`, in
    /// unspecified order.
    pub fn within(&self, point: Point3, range: f64) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .locate_within_distance(point.as_array(), range * range)
            .map(|entry| entry.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// Recompute every node's 1-hop and 2-hop neighbor sets.
///
/// - 1-hop: all other nodes within `range`, ascending id order.
/// - 2-hop: union of the 1-hop neighbors' 1-hop sets, minus the node itself
///   and its own 1-hop set, in first-discovery order.
///
/// Previously selected MPRs are cleared; they are stale once the neighbor
/// sets change.
pub fn compute_neighbors(field: &mut Field, range: f64) {
    let index = NeighborIndex::build(field);

    let one_hop: Vec<Vec<NodeId>> = field
        .nodes()
        .iter()
        .map(|node| {
            let mut ids: Vec<NodeId> = index
                .within(node.position(), range)
                .filter(|&id| id != node.id)
                .collect();
            ids.sort_unstable();
            ids
        })
        .collect();

    let two_hop: Vec<Vec<NodeId>> = (0..one_hop.len())
        .map(|i| two_hop_of(NodeId(i as u32), &one_hop))
        .collect();

    for ((node, one), two) in field.nodes_mut().iter_mut().zip(one_hop).zip(two_hop) {
        node.set_neighbors(one, two);
        node.set_mprs(Vec::new());
    }
}

fn two_hop_of(node: NodeId, one_hop: &[Vec<NodeId>]) -> Vec<NodeId> {
    let direct = &one_hop[node.index()];
    let mut seen = IdSet::default();
    let mut out = Vec::new();

    for &via in direct {
        for &target in &one_hop[via.index()] {
            if target != node && direct.binary_search(&target).is_err() && seen.insert(target) {
                out.push(target);
            }
        }
    }
    out
}
