//! Simulation Tick
//!
//! Advances one mover by one fixed step. Given the same geometry, config and
//! inputs, the sequence of states is reproducible bit for bit.
//!
//! ```text
//!  input ─► jump? ─► apex tracking ─► gravity ─► move_by ─► smooth x ─► ground
//!                                      (trapezoid)  (sweep)   (spring)   (zero y)
//! ```

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::scalar::smooth_damp;
use crate::core::vec2::Vec2;
use crate::game::events::{contact_events, MovementEvent};
use crate::game::input::InputFrame;
use crate::game::player::{KinematicsConfig, PlayerState};
use crate::physics::config::{ConfigError, ControllerConfig};
use crate::physics::raycast::GeometryQuery;
use crate::physics::sweep::CollisionSweeper;
use crate::TICK_RATE;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Displacement actually applied this tick
    pub displacement: Vec2,
    /// Events generated this tick
    pub events: Vec<MovementEvent>,
}

/// Configuration for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Ray-cast controller tuning
    pub controller: ControllerConfig,
    /// Jump and run tuning
    pub kinematics: KinematicsConfig,
    /// Fixed steps per second
    pub tick_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            kinematics: KinematicsConfig::default(),
            tick_rate: TICK_RATE,
        }
    }
}

impl SimConfig {
    /// Seconds per tick.
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        self.controller.validate()?;
        self.kinematics.validate()
    }

    /// Validate and build a sweeper sized for the configured collider.
    pub fn build_sweeper(&self) -> Result<CollisionSweeper, ConfigError> {
        self.validate()?;
        // Ray spacing only depends on the collider size
        CollisionSweeper::new(self.controller, &self.kinematics.collider(Vec2::ZERO))
    }
}

/// Execute one simulation tick.
///
/// This is the core deterministic function.
pub fn tick<G>(
    state: &mut PlayerState,
    world: &G,
    sweeper: &CollisionSweeper,
    input: &InputFrame,
    config: &SimConfig,
) -> TickResult
where
    G: GeometryQuery + ?Sized,
{
    let kinematics = &config.kinematics;
    let dt = config.dt();
    let mut result = TickResult::default();

    // ===== JUMP =====
    if state.grounded && input.jump_pressed() {
        state.velocity.y = kinematics.jump_velocity();
        state.jump.start(state.position.y);
        result.events.push(MovementEvent::jump_started(state.tick, state.position.y));
    }

    // ===== APEX TRACKING =====
    if !state.collisions.below && !state.jump.apex_reached {
        state.jump.airtime += dt;
    }

    if !state.jump.apex_reached && state.jump.max_height > state.position.y {
        state.jump.apex_reached = true;

        let rise = state.jump.rise();
        let error = rise - kinematics.jump_height;
        debug!(
            tick = state.tick,
            start_height = state.jump.start_height,
            apex_height = state.jump.max_height,
            rise,
            error,
            airtime = state.jump.airtime,
            gravity = kinematics.gravity(),
            jump_velocity = kinematics.jump_velocity(),
            "jump apex"
        );
        result.events.push(MovementEvent::jump_apex(
            state.tick,
            state.jump.start_height,
            state.jump.max_height,
            error,
            state.jump.airtime,
        ));
    }

    state.jump.max_height = state.jump.max_height.max(state.position.y);

    // ===== INTEGRATE =====
    let old_velocity = state.velocity;
    state.velocity.y += kinematics.gravity() * dt;
    let desired = (old_velocity + state.velocity).scale(0.5 * dt);

    // ===== SWEEP =====
    let previous = state.collisions;
    let sweep = sweeper.move_by(world, &state.bounds(kinematics), desired, previous);
    state.position += sweep.displacement;
    state.collisions = sweep.collisions;
    result.displacement = sweep.displacement;

    // ===== HORIZONTAL SMOOTHING =====
    let target_x = input.axis().x * kinematics.move_speed;
    state.velocity.x = smooth_damp(
        state.velocity.x,
        target_x,
        &mut state.velocity_x_smoothing,
        kinematics.acceleration_time(state.collisions.below),
        dt,
    );

    // ===== GROUND / CEILING =====
    state.grounded = state.collisions.below;
    if state.collisions.below || state.collisions.above {
        state.velocity.y = 0.0;
    }

    result
        .events
        .extend(contact_events(state.tick, &previous, &state.collisions));

    state.tick += 1;

    result
}

/// Replay a recorded run for verification.
///
/// Given initial state and all inputs, produces the final state and every
/// event. One tick is run per input frame.
pub fn replay<G>(
    initial_state: PlayerState,
    world: &G,
    sweeper: &CollisionSweeper,
    inputs: &[InputFrame],
    config: &SimConfig,
) -> (PlayerState, Vec<MovementEvent>)
where
    G: GeometryQuery + ?Sized,
{
    let mut state = initial_state;
    let mut all_events = Vec::new();

    for input in inputs {
        let result = tick(&mut state, world, sweeper, input, config);
        all_events.extend(result.events);
    }

    (state, all_events)
}
