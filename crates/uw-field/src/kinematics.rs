//! Per-tick node kinematics, energy decay, and activation.
//!
//! # Step order (per node)
//!
//! ```text
//! ① energy  -= 0.01 · speed_factor               (floored at 0)
//! ② activate with p = 0.3 · speed_factor          (inactive, energy > 20)
//! ③ v = (v + jitter·0.02)·0.95 + current·0.05     (damped random walk)
//!   p += v · dt · 10 · movement_speed
//! ④ containment: horizontal radius 200, vertical band [-100, -5]
//! ⑤ depth recomputed by Node::set_position
//! ```
//!
//! Containment corrects *velocity*, not position: a node that crossed a
//! boundary this step is steered back over the following steps.

use uw_core::{Point3, SimRng};

use crate::{Node, WaterCurrent};

/// Energy spent per kinematics tick at nominal speed.
pub const ENERGY_DECAY_PER_TICK: f64 = 0.01;
/// Per-tick activation probability at nominal speed.
pub const ACTIVATION_PROBABILITY: f64 = 0.3;
/// Nodes at or below this energy are never activated.
pub const ACTIVATION_ENERGY_FLOOR: f64 = 20.0;

const RANDOM_WALK_AMPLITUDE: f64 = 0.02;
const VELOCITY_DAMPING: f64 = 0.95;
const CURRENT_BLEND: f64 = 0.05;
/// Units moved per unit of velocity per second at movement speed 1.
const POSITION_SCALE: f64 = 10.0;

pub const BOUNDARY_RADIUS: f64 = 200.0;
const CENTERING_CORRECTION: f64 = 0.1;
/// Shallowest allowed `y` (just under the surface).
pub const SURFACE_LIMIT_Y: f64 = -5.0;
/// Deepest allowed `y`.
pub const FLOOR_LIMIT_Y: f64 = -100.0;
const VERTICAL_CORRECTION: f64 = 0.1;

/// Inputs to one kinematics tick, shared by every node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicsStep {
    /// Simulated seconds since the previous kinematics tick.
    pub dt_secs: f64,
    /// `simulation_speed / 50`.
    pub speed_factor: f64,
    /// Movement multiplier from configuration (0 freezes positions).
    pub movement_speed: f64,
    /// Simulated seconds at this tick; recorded on activation.
    pub now_secs: f64,
}

/// Apply steps ①–② to `node`.
pub(crate) fn decay_and_activate(node: &mut Node, step: &KinematicsStep, rng: &mut SimRng) {
    node.drain(ENERGY_DECAY_PER_TICK * step.speed_factor);

    // Always draw so the RNG stream does not depend on node state.
    let roll = rng.unit();
    if roll < ACTIVATION_PROBABILITY * step.speed_factor
        && !node.is_active
        && node.energy() > ACTIVATION_ENERGY_FLOOR
    {
        node.is_active = true;
        node.activated_at = Some(step.now_secs);
    }
}

/// Apply steps ③–⑤ to `node`.
pub(crate) fn drift(node: &mut Node, step: &KinematicsStep, current: WaterCurrent, rng: &mut SimRng) {
    let c = current.vector();
    let v = node.velocity;
    let velocity = Point3::new(
        (v.x + rng.centered() * RANDOM_WALK_AMPLITUDE) * VELOCITY_DAMPING + c.x * CURRENT_BLEND,
        (v.y + rng.centered() * RANDOM_WALK_AMPLITUDE) * VELOCITY_DAMPING + c.y * CURRENT_BLEND,
        (v.z + rng.centered() * RANDOM_WALK_AMPLITUDE) * VELOCITY_DAMPING + c.z * CURRENT_BLEND,
    );

    let position = node.position() + velocity * (step.dt_secs * POSITION_SCALE * step.movement_speed);
    node.set_position(position);
    node.velocity = contain(position, velocity);
}

/// Velocity correction steering `position` back inside the deployment area.
pub fn contain(position: Point3, mut velocity: Point3) -> Point3 {
    if position.horizontal_radius() > BOUNDARY_RADIUS {
        let angle = position.z.atan2(position.x);
        velocity.x -= angle.cos() * CENTERING_CORRECTION;
        velocity.z -= angle.sin() * CENTERING_CORRECTION;
    }

    if position.y > SURFACE_LIMIT_Y {
        velocity.y = -VERTICAL_CORRECTION;
    } else if position.y < FLOOR_LIMIT_Y {
        velocity.y = VERTICAL_CORRECTION;
    }
    velocity
}
