//! Hop-by-Hop Vector-Based Forwarding.

use uw_field::{Field, Node};

use crate::selector::{ForwarderSelector, eligible};

/// Nominal per-hop pipe radius.  The candidate test below does not apply it.
pub const NOMINAL_PIPE_RADIUS: f64 = 70.0;

pub const MIN_HOP: f64 = 20.0;
pub const MAX_HOP: f64 = 150.0;

/// Candidates between [`MIN_HOP`] and [`MAX_HOP`] from the source (inclusive)
/// that are strictly closer to the sink than the source is.
#[derive(Copy, Clone, Debug, Default)]
pub struct Hhvbf;

impl ForwarderSelector for Hhvbf {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        let sink = field.sink().position;
        let source_to_sink = source.distance_to(sink);

        eligible(source, field)
            .filter(|c| {
                let hop = source.distance_to(c.position());
                (MIN_HOP..=MAX_HOP).contains(&hop) && c.distance_to(sink) < source_to_sink
            })
            .collect()
    }
}
