//! OLSR multipoint-relay selection.
//!
//! Classic greedy set cover over a node's 2-hop neighborhood:
//!
//! ```text
//! ① for each 2-hop target, find the 1-hop neighbors that reach it
//! ② a neighbor that is the only reacher of some target is forced in;
//!   everything it covers leaves the uncovered set
//! ③ while targets remain: add the unselected neighbor covering the most
//!   uncovered targets (first in neighbor order wins ties), drop its coverage
//!   stop early if nobody covers anything that is left
//! ```
//!
//! The result is a valid cover, not necessarily a minimum one.

use uw_core::NodeId;
use uw_field::{Field, Node};

use crate::IdSet;

/// MPR set for `node`, computed from the neighbor tables in `field`.
///
/// Pure: reads `field` only.  Returns relays in selection order.
pub fn select_mprs_for(node: &Node, field: &Field) -> Vec<NodeId> {
    let targets = node.two_hop_neighbors();
    if targets.is_empty() {
        return Vec::new();
    }
    let neighbors = node.neighbors();
    let covers = |relay: NodeId, target: NodeId| {
        field.node(relay).is_some_and(|r| r.is_neighbor(target))
    };

    let mut uncovered: IdSet = targets.iter().copied().collect();
    let mut mprs: Vec<NodeId> = Vec::new();

    // ── ①② Forced relays ──────────────────────────────────────────────────
    for &target in targets {
        let mut reachers = neighbors.iter().copied().filter(|&j| covers(j, target));
        if let (Some(only), None) = (reachers.next(), reachers.next()) {
            if !mprs.contains(&only) {
                mprs.push(only);
                uncovered.retain(|&t| !covers(only, t));
            }
        }
    }

    // ── ③ Greedy fill ─────────────────────────────────────────────────────
    while !uncovered.is_empty() {
        let mut best: Option<(NodeId, usize)> = None;
        for &candidate in neighbors {
            if mprs.contains(&candidate) {
                continue;
            }
            let coverage = uncovered.iter().filter(|&&t| covers(candidate, t)).count();
            if coverage > best.map_or(0, |(_, c)| c) {
                best = Some((candidate, coverage));
            }
        }

        let Some((relay, _)) = best else {
            log::trace!(
                "{}: {} two-hop neighbors left uncovered",
                node.id,
                uncovered.len()
            );
            break;
        };
        mprs.push(relay);
        uncovered.retain(|&t| !covers(relay, t));
    }

    mprs
}

/// Recompute `mprs` for every node in `field`.
///
/// With the `parallel` Cargo feature the per-node selections run on Rayon;
/// results are written back sequentially in id order either way.
pub fn select_mprs(field: &mut Field) {
    let selections: Vec<Vec<NodeId>> = {
        let view: &Field = field;

        #[cfg(not(feature = "parallel"))]
        {
            view.nodes().iter().map(|n| select_mprs_for(n, view)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            view.nodes().par_iter().map(|n| select_mprs_for(n, view)).collect()
        }
    };

    for (node, mprs) in field.nodes_mut().iter_mut().zip(selections) {
        node.set_mprs(mprs);
    }
}
