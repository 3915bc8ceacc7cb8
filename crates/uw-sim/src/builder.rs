//! Fluent builder for constructing a [`Sim`].

use uw_core::{SimConfig, SimRng, Tick};
use uw_field::{Field, WaterCurrent};
use uw_routing::{ForwarderSelector, RoutingStrategy};

use crate::schedule::DriverQueue;
use crate::stats::Statistics;
use crate::transmission::TransmissionSimulator;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: node count, protocol, seed, durations, …
/// - `S: ForwarderSelector`: the routing strategy.  [`SimBuilder::from_config`]
///   picks the built-in [`RoutingStrategy`] for `config.protocol`.
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                         |
/// |--------------|-------------------------------------------------|
/// | `.field(f)`  | `Field::initialize(config.node_count, rng)`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_config(SimConfig::default()).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ForwarderSelector> {
    config:   SimConfig,
    selector: S,
    field:    Option<Field>,
}

impl SimBuilder<RoutingStrategy> {
    /// Builder using the built-in strategy for `config.protocol`.
    pub fn from_config(config: SimConfig) -> Self {
        let selector = RoutingStrategy::from_protocol(config.protocol);
        Self::new(config, selector)
    }
}

impl<S: ForwarderSelector> SimBuilder<S> {
    pub fn new(config: SimConfig, selector: S) -> Self {
        Self { config, selector, field: None }
    }

    /// Supply a hand-placed field instead of the random layout.
    ///
    /// Its length must equal `config.node_count`.
    pub fn field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Validate the configuration, place the nodes, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let field = match self.field {
            Some(f) => {
                if f.len() != self.config.node_count {
                    return Err(SimError::FieldSizeMismatch {
                        expected: self.config.node_count,
                        got:      f.len(),
                    });
                }
                f
            }
            None => {
                let mut placement = rng.child(0);
                Field::initialize(self.config.node_count, &mut placement)?
            }
        };

        let mut sim = Sim {
            clock:        uw_core::SimClock::new(self.config.tick_duration_ms),
            config:       self.config,
            field,
            selector:     self.selector,
            rng,
            current:      WaterCurrent::STILL,
            transmission: TransmissionSimulator::new(),
            stats:        Statistics::default(),
            readings:     Vec::new(),
            drivers:      DriverQueue::new(),
            running:      true,
            end_tick:     Tick::ZERO,
        };
        sim.schedule_initial_drivers();
        Ok(sim)
    }
}
