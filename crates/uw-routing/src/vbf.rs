//! Vector-Based Forwarding.

use uw_field::{Field, Node};

use crate::selector::{ForwarderSelector, eligible};

/// Virtual pipe radius around the source→sink vector.
pub const PIPE_RADIUS: f64 = 50.0;

/// Candidates lie ahead of the source along the source→sink vector and
/// within [`PIPE_RADIUS`] of it.
///
/// With `u` the unit source→sink vector and `v` the source→candidate vector,
/// a candidate qualifies when `v·u > 0` and `|v - (v·u)u| ≤ PIPE_RADIUS`.
/// A source sitting exactly on the sink has no direction and selects nobody.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vbf;

impl ForwarderSelector for Vbf {
    fn select_forwarders<'f>(&self, source: &Node, field: &'f Field) -> Vec<&'f Node> {
        let origin = source.position();
        let Some(axis) = origin.vector_to(field.sink().position).normalized() else {
            log::trace!("vbf: {} sits on the sink, no pipe", source.id);
            return Vec::new();
        };

        eligible(source, field)
            .filter(|c| {
                let v = origin.vector_to(c.position());
                let along = v.dot(axis);
                along > 0.0 && (v - axis * along).length() <= PIPE_RADIUS
            })
            .collect()
    }
}
