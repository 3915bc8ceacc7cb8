//! `uw-sim` — tick loop orchestrator for the rust_uwsn routing engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..=duration:
//!   ① Drivers   — fire whatever is due, each re-queued one period later:
//!                   Current     every 1000 ms   ambient drift vector
//!                   Kinematics  300/speed ms    decay, activation, drift
//!                   Topology    every 2000 ms   neighbors + MPRs (OLSR only)
//!                   Statistics  every 200 ms    totals + energy reading
//!   ② Packets   — emit on the two channels, advance, retire delivered
//!   ③ Sample    — FrameSnapshot to the observer
//! ```
//!
//! One engine tick is one render frame (`tick_duration_ms`, default 50 ms).
//! The engine is single-threaded and deterministic for a given seed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the MPR pass of each topology refresh on Rayon.   |
//! | `fx-hash`  | FxHash for topology coverage sets.                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uw_core::{Protocol, SimConfig};
//! use uw_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { protocol: Protocol::Dbr, ..SimConfig::default() };
//! let mut sim = SimBuilder::from_config(config).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.statistics());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod packet;
pub mod schedule;
pub mod sim;
pub mod snapshot;
pub mod stats;
pub mod transmission;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use packet::{Packet, PacketKind, TRAVEL_MS};
pub use schedule::{Driver, DriverQueue};
pub use sim::Sim;
pub use snapshot::{FrameSnapshot, NodeSnapshot, PacketSnapshot};
pub use stats::{EnergyReading, Statistics};
pub use transmission::{PacketEvent, TransmissionSimulator};
