//! `uw-topology` — neighbor discovery and multipoint-relay selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`neighbors`] | `NeighborIndex` (R-tree), `compute_neighbors`             |
//! | [`mpr`]       | `select_mprs`, `select_mprs_for` — greedy set cover       |
//!
//! Only the OLSR strategy consults neighbor tables, so the simulation calls
//! [`refresh`] periodically for OLSR runs and never for the others.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the per-node MPR pass on Rayon.                    |
//! | `fx-hash`  | Uses FxHash for coverage sets.                          |

pub mod mpr;
pub mod neighbors;

#[cfg(test)]
mod tests;

pub use mpr::{select_mprs, select_mprs_for};
pub use neighbors::{NeighborIndex, compute_neighbors};

use uw_field::Field;

#[cfg(feature = "fx-hash")]
pub(crate) type IdSet = rustc_hash::FxHashSet<uw_core::NodeId>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type IdSet = std::collections::HashSet<uw_core::NodeId>;

/// Recompute 1-hop / 2-hop neighbor sets for `range`, then every node's MPRs.
pub fn refresh(field: &mut Field, range: f64) {
    compute_neighbors(field, range);
    select_mprs(field);

    if log::log_enabled!(log::Level::Debug) {
        let links: usize = field.nodes().iter().map(|n| n.neighbors().len()).sum();
        let relays = field.mpr_flags().iter().filter(|&&f| f).count();
        log::debug!(
            "topology refresh: {} nodes, {} links, {} distinct MPRs (range {range})",
            field.len(),
            links / 2,
            relays
        );
    }
}
