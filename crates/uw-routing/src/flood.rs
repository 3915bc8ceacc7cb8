//! Protocol-less flooding.

use uw_field::{Field, Node};

use crate::selector::{ForwarderSelector, MIN_FORWARDER_ENERGY};

/// Any other node with energy strictly above the forwarding floor.
#[derive(Copy, Clone, Debug, Default)]
pub struct Flood;

impl ForwarderSelector for Flood {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        field
            .nodes()
            .iter()
            .filter(|n| n.id != source.id && n.energy() > MIN_FORWARDER_ENERGY)
            .collect()
    }
}
