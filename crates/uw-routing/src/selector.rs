//! The forwarder-selection trait.
//!
//! # Pluggability
//!
//! `uw-sim` calls routing through [`ForwarderSelector`], so a run can use one
//! of the built-in protocols (via [`RoutingStrategy`](crate::RoutingStrategy))
//! or a custom selector without touching the simulation core.

use uw_field::{Field, Node};

/// Nodes below this energy are never chosen as forwarders.
pub const MIN_FORWARDER_ENERGY: f64 = 10.0;

/// Pluggable next-hop selection.
///
/// # Contract
///
/// - The result never contains `source` or a node with
///   `energy < MIN_FORWARDER_ENERGY`.
/// - If [`is_ranked`](Self::is_ranked) is `true` the result is ordered
///   best-first; otherwise order carries no meaning.
/// - Empty is valid: the caller absorbs the packet.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a selector can be shared with
/// observer or worker threads.
pub trait ForwarderSelector: Send + Sync {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node>;

    /// `true` if callers should take the first candidate rather than a
    /// uniform choice.
    fn is_ranked(&self) -> bool {
        false
    }
}

/// Every node except `source` with enough energy to relay.
pub(crate) fn eligible<'f>(source: &Node, field: &'f Field) -> impl Iterator<Item = &'f Node> {
    let source_id = source.id;
    field
        .nodes()
        .iter()
        .filter(move |n| n.id != source_id && n.energy() >= MIN_FORWARDER_ENERGY)
}
