//! Depth-based routing: DBR and its energy-aware variant.
//!
//! Both forward "upwards" only: a candidate must be strictly shallower than
//! the source.  EEDBR additionally ranks the candidates.

use uw_field::{Field, Node};

use crate::selector::{ForwarderSelector, eligible};

fn shallower<'f>(source: &Node, field: &'f Field) -> impl Iterator<Item = &'f Node> {
    let depth = source.depth();
    eligible(source, field).filter(move |c| c.depth() < depth)
}

/// Depth-Based Routing: every shallower node, unordered.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dbr;

impl ForwarderSelector for Dbr {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        shallower(source, field).collect()
    }
}

/// Energy-Efficient DBR: shallower nodes ranked by [`Eedbr::score`],
/// highest first.
#[derive(Copy, Clone, Debug, Default)]
pub struct Eedbr;

impl Eedbr {
    /// `0.7·(100 - depth) + 0.3·energy`
    pub fn score(node: &Node) -> f64 {
        0.7 * (100.0 - node.depth()) + 0.3 * node.energy()
    }
}

impl ForwarderSelector for Eedbr {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        let mut out: Vec<&Node> = shallower(source, field).collect();
        out.sort_by(|a, b| Self::score(b).total_cmp(&Self::score(a)));
        out
    }

    fn is_ranked(&self) -> bool {
        true
    }
}
