//! `uw-routing` — per-protocol forwarder selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`selector`]  | `ForwarderSelector` trait, shared eligibility filter     |
//! | [`vbf`]       | `Vbf` — virtual pipe towards the sink                    |
//! | [`hhvbf`]     | `Hhvbf` — range window plus progress towards the sink    |
//! | [`depth`]     | `Dbr`, `Eedbr` — depth-based selection                   |
//! | [`olsr`]      | `Olsr` — MPR relays, then plain neighbors                |
//! | [`flood`]     | `Flood` — any live node (no protocol)                    |
//! | [`strategy`]  | `RoutingStrategy` — tagged enum chosen once per run      |
//!
//! Every selector is a pure function of `(source, field)`: it reads node
//! state and never writes it.  An empty result is a normal outcome.

pub mod depth;
pub mod flood;
pub mod hhvbf;
pub mod olsr;
pub mod selector;
pub mod strategy;
pub mod vbf;

#[cfg(test)]
mod tests;

pub use depth::{Dbr, Eedbr};
pub use flood::Flood;
pub use hhvbf::Hhvbf;
pub use olsr::Olsr;
pub use selector::{ForwarderSelector, MIN_FORWARDER_ENERGY};
pub use strategy::RoutingStrategy;
pub use vbf::Vbf;
