//! `uw-core` — foundational types for the `rust_uwsn` routing engine.
//!
//! This crate is a dependency of every other `uw-*` crate.  It intentionally
//! has no `uw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `PacketId`                                   |
//! | [`geo`]      | `Point3` and the vector primitives routing relies on   |
//! | [`time`]     | `Tick`, `SimClock`                                     |
//! | [`rng`]      | `SimRng` (seeded, single-owner)                        |
//! | [`protocol`] | `Protocol` enum and its per-protocol constants         |
//! | [`config`]   | `SimConfig`, `ViewMode`, boundary validation           |
//! | [`error`]    | `UwError`, `UwResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod protocol;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, ViewMode};
pub use error::{UwError, UwResult};
pub use geo::Point3;
pub use ids::{NodeId, PacketId};
pub use protocol::Protocol;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
