//! The `Sim` struct and its tick loop.

use uw_core::{SimClock, SimConfig, SimRng, Tick};
use uw_field::{Field, KinematicsStep, WaterCurrent};
use uw_routing::ForwarderSelector;

use crate::schedule::{Driver, DriverQueue};
use crate::snapshot::{FrameSnapshot, NodeSnapshot, PacketSnapshot, project};
use crate::stats::{EnergyReading, Statistics};
use crate::transmission::TransmissionSimulator;
use crate::{SimObserver, SimResult};

/// Simulated milliseconds between water-current updates.
pub const CURRENT_PERIOD_MS: f64 = 1000.0;
/// Kinematics period at nominal speed; divided by the speed factor.
pub const KINEMATICS_PERIOD_MS: f64 = 300.0;
/// Simulated milliseconds between statistics ticks.
pub const STATISTICS_PERIOD_MS: f64 = 200.0;

/// The main simulation runner.
///
/// `Sim<S>` owns all run state and drives the tick loop:
///
/// 1. **Drivers**: fire every periodic driver due this tick, in
///    [`Driver`] order, and re-queue each one period later.
/// 2. **Frame**: run the transmission simulator (emission, progress,
///    delivery) and report packet events.
/// 3. **Sample**: build a [`FrameSnapshot`] and hand it to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ForwarderSelector> {
    /// Run configuration.  Only the simulation speed changes after build.
    pub config: SimConfig,

    pub clock: SimClock,

    pub(crate) field:        Field,
    pub(crate) selector:     S,
    pub(crate) rng:          SimRng,
    pub(crate) current:      WaterCurrent,
    pub(crate) transmission: TransmissionSimulator,
    pub(crate) stats:        Statistics,
    pub(crate) readings:     Vec<EnergyReading>,
    pub(crate) drivers:      DriverQueue,
    pub(crate) running:      bool,
    /// Tick at which `duration_secs` of simulated time has elapsed; it is
    /// the last tick processed.
    pub(crate) end_tick:     Tick,
}

impl<S: ForwarderSelector> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the configured duration has elapsed or [`stop`](Self::stop)
    /// is called.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        log::info!(
            "run start: {} nodes, {} protocol, {:.1}s at speed {}",
            self.field.len(),
            self.config.protocol,
            self.config.duration_secs,
            self.config.simulation_speed
        );
        while self.running {
            self.process_tick(observer);
        }
        log::info!(
            "run end at {}: {} sent, {} received, {} readings",
            self.clock,
            self.stats.packets_sent,
            self.stats.packets_received,
            self.readings.len()
        );
        observer.on_sim_end(&self.stats);
        Ok(())
    }

    /// Run at most `n` ticks from the current position.
    ///
    /// Stops early if the run is stopped or reaches its duration.  Useful
    /// for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if !self.running {
                break;
            }
            self.process_tick(observer);
        }
        Ok(())
    }

    /// Freeze the run.  No driver fires again and in-flight packets stay
    /// where they are until [`reset`](Self::reset).
    pub fn stop(&mut self) {
        if self.running {
            log::info!("run stopped at {}", self.clock);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Change the simulation speed (1–100).  Takes effect from the next
    /// kinematics firing; packet travel time is unaffected.
    pub fn set_simulation_speed(&mut self, speed: u32) -> SimResult<()> {
        let mut config = self.config.clone();
        config.simulation_speed = speed;
        config.validate()?;
        self.config = config;
        log::debug!("simulation speed set to {speed}");
        Ok(())
    }

    /// Restore the field to its initial placement, clear statistics,
    /// readings and live packets, rewind the clock, and resume.
    ///
    /// The RNG stream continues; placement is not re-randomized.
    pub fn reset(&mut self) {
        self.field.reset();
        self.clock.reset();
        self.current = WaterCurrent::STILL;
        self.transmission.clear();
        self.stats = Statistics::default();
        self.readings.clear();
        self.schedule_initial_drivers();
        self.running = true;
        log::info!("run reset");
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Energy readings in the order they were produced.
    pub fn readings(&self) -> &[EnergyReading] {
        &self.readings
    }

    pub fn transmission(&self) -> &TransmissionSimulator {
        &self.transmission
    }

    pub fn current(&self) -> WaterCurrent {
        self.current
    }

    /// Fraction of `duration_secs` elapsed, `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.clock.elapsed_secs() / self.config.duration_secs).clamp(0.0, 1.0)
    }

    /// A snapshot of the current state, projected per the view mode.
    pub fn snapshot(&self) -> FrameSnapshot {
        let view = self.config.view_mode;
        let mpr = self.field.mpr_flags();
        let nodes = self
            .field
            .nodes()
            .iter()
            .zip(mpr)
            .map(|(n, is_mpr)| NodeSnapshot {
                id:        n.id,
                position:  project(n.position(), view),
                energy:    n.energy(),
                depth:     n.depth(),
                is_active: n.is_active,
                is_mpr,
            })
            .collect();
        let packets = self
            .transmission
            .packets()
            .iter()
            .map(|p| PacketSnapshot {
                id:       p.id,
                kind:     p.kind,
                position: project(p.position(), view),
                progress: p.progress,
            })
            .collect();

        FrameSnapshot {
            tick:         self.clock.current_tick.0,
            elapsed_secs: self.clock.elapsed_secs(),
            nodes,
            packets,
            stats:        self.stats,
            current:      self.current,
            progress:     self.progress(),
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    pub(crate) fn schedule_initial_drivers(&mut self) {
        self.drivers.clear();
        let start = self.clock.current_tick;
        // Current and topology are ready from the first frame; kinematics and
        // statistics first fire one period in, so there is no zero reading.
        self.drivers.push(start, Driver::Current);
        if self.config.protocol.uses_topology() {
            self.drivers.push(start, Driver::Topology);
        }
        self.drivers.push(start.offset(self.period_ticks(Driver::Kinematics)), Driver::Kinematics);
        self.drivers.push(start.offset(self.period_ticks(Driver::Statistics)), Driver::Statistics);
        self.end_tick = Tick(self.clock.ticks_for_secs(self.config.duration_secs));
    }

    /// Current period of `driver` in ticks.
    pub(crate) fn period_ticks(&self, driver: Driver) -> u64 {
        let ms = match driver {
            Driver::Current    => CURRENT_PERIOD_MS,
            Driver::Kinematics => KINEMATICS_PERIOD_MS / self.config.speed_factor(),
            Driver::Topology   => self.config.topology_refresh_secs * 1000.0,
            Driver::Statistics => STATISTICS_PERIOD_MS,
        };
        self.clock.ticks_for_ms(ms)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;

        // ── Phase 1: periodic drivers ─────────────────────────────────────
        for driver in self.drivers.drain_tick(now) {
            self.fire(driver, now, observer);
            let next = now.offset(self.period_ticks(driver));
            self.drivers.push(next, driver);
        }

        // ── Phase 2: packets ──────────────────────────────────────────────
        let events = self.transmission.step(
            &self.field,
            &self.selector,
            &mut self.rng,
            self.clock.ms_at(now),
        );
        for event in &events {
            observer.on_packet(event);
        }

        // ── Phase 3: frame sample ─────────────────────────────────────────
        observer.on_frame(&self.snapshot());

        self.clock.advance();
        if now >= self.end_tick {
            log::info!("duration of {:.1}s reached", self.config.duration_secs);
            self.running = false;
        }
    }

    fn fire<O: SimObserver>(&mut self, driver: Driver, now: Tick, observer: &mut O) {
        let now_secs = self.clock.ms_at(now) as f64 / 1000.0;
        match driver {
            Driver::Current => {
                self.current = WaterCurrent::oscillating(now_secs);
            }
            Driver::Kinematics => {
                let period = self.period_ticks(Driver::Kinematics);
                let step = KinematicsStep {
                    dt_secs:        self.clock.ms_at(Tick(period)) as f64 / 1000.0,
                    speed_factor:   self.config.speed_factor(),
                    movement_speed: self.config.movement_speed,
                    now_secs,
                };
                self.field.tick(&step, self.current, &mut self.rng);
            }
            Driver::Topology => {
                uw_topology::refresh(&mut self.field, self.config.communication_range);
            }
            Driver::Statistics => {
                self.stats = self.stats.advanced(
                    self.config.protocol,
                    self.config.packet_size_bytes,
                    &mut self.rng,
                );
                let reading = EnergyReading::from_statistics(
                    &self.stats,
                    now_secs,
                    self.field.len(),
                    self.config.protocol,
                );
                self.readings.push(reading);
                log::trace!("stats at {now_secs:.1}s: {} sent", self.stats.packets_sent);
                observer.on_statistics(&self.stats, &reading);
            }
        }
    }
}
