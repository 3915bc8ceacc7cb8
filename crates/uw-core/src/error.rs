//! Engine error type.
//!
//! Every error here is a boundary error: it is raised while validating input
//! before a run starts.  Per-tick computations are total and never fail.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `uw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum UwError {
    #[error("node count must be at least 1, got {0}")]
    InvalidNodeCount(usize),

    #[error("{what} = {got} is outside the allowed range {min}..={max}")]
    OutOfRange {
        what: &'static str,
        got:  f64,
        min:  f64,
        max:  f64,
    },

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `uw-*` crates.
pub type UwResult<T> = Result<T, UwError>;
