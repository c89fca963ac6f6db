//! Player State
//!
//! Kinematics tuning and the per-player state advanced by `tick`.
//!
//! ```text
//!  jump_height ──┐
//!                ├─► gravity       = -2h / t²
//!  time_to_apex ─┘   jump_velocity =  2h / t
//! ```

use serde::{Serialize, Deserialize};

use crate::core::bounds::BoundingBox;
use crate::core::hash::{StateHash, compute_state_hash};
use crate::core::vec2::Vec2;
use crate::physics::collision::CollisionState;
use crate::physics::config::ConfigError;

// =============================================================================
// KINEMATICS CONFIG
// =============================================================================

/// Movement tuning for a jumping character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Apex height of a full jump, world units
    pub jump_height: f32,
    /// Seconds from take-off to apex
    pub time_to_jump_apex: f32,
    /// Target horizontal speed at full axis
    pub move_speed: f32,
    /// Horizontal smoothing time while airborne
    pub acceleration_time_airborne: f32,
    /// Horizontal smoothing time while grounded
    pub acceleration_time_grounded: f32,
    /// Collider width and height
    pub size: Vec2,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            jump_height: 3.0,
            time_to_jump_apex: 1.0,
            move_speed: 4.0,
            acceleration_time_airborne: 0.05,
            acceleration_time_grounded: 0.1,
            size: Vec2::new(1.0, 1.0),
        }
    }
}

impl KinematicsConfig {
    /// Downward acceleration that reaches `jump_height` in `time_to_jump_apex`.
    #[inline]
    pub fn gravity(&self) -> f32 {
        -2.0 * self.jump_height / (self.time_to_jump_apex * self.time_to_jump_apex)
    }

    /// Take-off speed for a full jump.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        2.0 * self.jump_height / self.time_to_jump_apex
    }

    /// Smoothing time for the current footing.
    #[inline]
    pub fn acceleration_time(&self, grounded: bool) -> f32 {
        if grounded {
            self.acceleration_time_grounded
        } else {
            self.acceleration_time_airborne
        }
    }

    /// Collider centered on `position`.
    #[inline]
    pub fn collider(&self, position: Vec2) -> BoundingBox {
        BoundingBox::from_center_size(position, self.size)
    }

    /// Check every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("jump_height", self.jump_height),
            ("time_to_jump_apex", self.time_to_jump_apex),
            ("move_speed", self.move_speed),
            ("size.x", self.size.x),
            ("size.y", self.size.y),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidKinematics { field, value });
            }
        }

        let non_negative = [
            ("acceleration_time_airborne", self.acceleration_time_airborne),
            ("acceleration_time_grounded", self.acceleration_time_grounded),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidKinematics { field, value });
            }
        }

        Ok(())
    }
}

// =============================================================================
// JUMP TRACKING
// =============================================================================

/// Measures one jump from take-off to apex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpTracker {
    /// Height at take-off
    pub start_height: f32,
    /// Highest y seen so far
    pub max_height: f32,
    /// Seconds spent rising
    pub airtime: f32,
    /// Apex has been passed (or no jump in progress)
    pub apex_reached: bool,
}

impl Default for JumpTracker {
    fn default() -> Self {
        Self {
            start_height: 0.0,
            max_height: f32::NEG_INFINITY,
            airtime: 0.0,
            apex_reached: true,
        }
    }
}

impl JumpTracker {
    /// Begin tracking a jump from `height`.
    pub fn start(&mut self, height: f32) {
        self.start_height = height;
        self.max_height = f32::NEG_INFINITY;
        self.airtime = 0.0;
        self.apex_reached = false;
    }

    /// Height gained from take-off to the highest point seen.
    #[inline]
    pub fn rise(&self) -> f32 {
        self.max_height - self.start_height
    }
}

// =============================================================================
// PLAYER STATE
// =============================================================================

/// Complete state of one mover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Collider center
    pub position: Vec2,
    /// Velocity in units per second
    pub velocity: Vec2,
    /// Spring state for horizontal smoothing
    pub velocity_x_smoothing: f32,
    /// Standing on something after the last tick
    pub grounded: bool,
    /// Current jump measurement
    pub jump: JumpTracker,
    /// Collision record from the last tick
    pub collisions: CollisionState,
    /// Ticks simulated so far
    pub tick: u32,
}

impl PlayerState {
    /// Fresh state at rest at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            velocity_x_smoothing: 0.0,
            grounded: false,
            jump: JumpTracker::default(),
            collisions: CollisionState::default(),
            tick: 0,
        }
    }

    /// World-space collider for this state.
    #[inline]
    pub fn bounds(&self, config: &KinematicsConfig) -> BoundingBox {
        config.collider(self.position)
    }

    /// Deterministic hash of everything that affects future ticks.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, |h| {
            h.update_vec2(self.position);
            h.update_vec2(self.velocity);
            h.update_f32(self.velocity_x_smoothing);
            h.update_bool(self.grounded);

            h.update_f32(self.jump.start_height);
            h.update_f32(self.jump.max_height);
            h.update_f32(self.jump.airtime);
            h.update_bool(self.jump.apex_reached);

            self.collisions.hash_into(h);
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
