//! OLSR forwarding over precomputed neighbor tables.
//!
//! Reads `neighbors` / `mprs` as last written by `uw_topology::refresh`; a
//! field that was never refreshed has empty tables and yields no forwarders.

use uw_field::{Field, Node};

use crate::selector::{ForwarderSelector, MIN_FORWARDER_ENERGY};

/// A source this close to the sink delivers directly.
pub const DIRECT_RANGE: f64 = 100.0;

/// MPRs must hold strictly more than this to be used.
pub const MPR_ENERGY_FLOOR: f64 = 20.0;

/// ```text
/// dist(source, sink) < DIRECT_RANGE      → []
/// MPRs with energy > 20 exist            → those, ascending 0.7·d_sink - 0.3·energy
/// otherwise                              → neighbors with energy > 10, ascending d_sink
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Olsr;

impl Olsr {
    /// Relay cost; lower is better.
    pub fn relay_cost(node: &Node, sink: uw_core::Point3) -> f64 {
        0.7 * node.distance_to(sink) - 0.3 * node.energy()
    }
}

impl ForwarderSelector for Olsr {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        let sink = field.sink().position;
        if source.distance_to(sink) < DIRECT_RANGE {
            return Vec::new();
        }

        let lookup = move |ids: &[uw_core::NodeId], floor: f64| -> Vec<&'f Node> {
            ids.iter()
                .filter_map(|&id| field.node(id))
                .filter(|n| n.id != source.id && n.energy() > floor)
                .collect()
        };

        let mut relays = lookup(source.mprs(), MPR_ENERGY_FLOOR);
        if !relays.is_empty() {
            relays.sort_by(|a, b| Self::relay_cost(a, sink).total_cmp(&Self::relay_cost(b, sink)));
            return relays;
        }

        let mut neighbors = lookup(source.neighbors(), MIN_FORWARDER_ENERGY);
        neighbors.sort_by(|a, b| a.distance_to(sink).total_cmp(&b.distance_to(sink)));
        neighbors
    }

    fn is_ranked(&self) -> bool {
        true
    }
}
