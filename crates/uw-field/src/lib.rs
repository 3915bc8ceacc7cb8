//! `uw-field` — the node field: sensor nodes, the sink, and their per-tick
//! lifecycle.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`node`]       | `Node` — position, velocity, energy, topology state        |
//! | [`field`]      | `Field`, `Sink` — ownership, placement, reset, views       |
//! | [`kinematics`] | `KinematicsStep` and the random-walk / containment step    |
//! | [`current`]    | `WaterCurrent` — ambient drift vector                      |
//!
//! # Ownership model
//!
//! The `Field` is the single owner of every `Node`.  Other crates read nodes
//! through `&Field` and write only the topology sets (neighbors, two-hop
//! neighbors, MPRs) through dedicated setters.  Position is private to the
//! node so that `depth` can never drift from `|position.y|`.

pub mod current;
pub mod field;
pub mod kinematics;
pub mod node;


pub use current::WaterCurrent;
pub use field::{Field, Sink};
pub use kinematics::KinematicsStep;
pub use node::Node;
