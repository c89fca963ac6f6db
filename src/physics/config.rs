//! Controller tuning parameters.

use serde::{Deserialize, Serialize};

use crate::core::scalar::{DEFAULT_MAX_CLIMB_ANGLE, DEFAULT_RAY_COUNT, SKIN_WIDTH};
use super::mask::CollisionMask;

/// Errors raised while setting up a controller.
///
/// All of these are caller precondition violations. They are reported once at
/// setup, never from the per-tick path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The collider has no usable area once the skin is removed.
    #[error("collider {width}x{height} is degenerate after removing skin width {skin_width}")]
    DegenerateBounds {
        /// Width before the skin inset
        width: f32,
        /// Height before the skin inset
        height: f32,
        /// Skin width that was applied
        skin_width: f32,
    },

    /// Skin width is negative or not finite.
    #[error("invalid skin width: {0}")]
    InvalidSkinWidth(f32),

    /// Climb angle outside [0, 90) degrees or not finite.
    #[error("invalid max climb angle: {0}")]
    InvalidClimbAngle(f32),

    /// A kinematics parameter must be positive and finite.
    #[error("invalid {field}: {value}")]
    InvalidKinematics {
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Tick rate must be non-zero.
    #[error("tick rate must be non-zero")]
    ZeroTickRate,
}

/// Tuning for the ray-cast controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Inset applied to the collider before casting rays.
    pub skin_width: f32,
    /// Steepest climbable slope in degrees.
    pub max_climb_angle: f32,
    /// Rays cast along X, spread over the collider height (clamped to >= 2).
    pub horizontal_ray_count: u32,
    /// Rays cast along Y, spread over the collider width (clamped to >= 2).
    pub vertical_ray_count: u32,
    /// Layers that block the mover.
    pub collision_mask: CollisionMask,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            skin_width: SKIN_WIDTH,
            max_climb_angle: DEFAULT_MAX_CLIMB_ANGLE,
            horizontal_ray_count: DEFAULT_RAY_COUNT,
            vertical_ray_count: DEFAULT_RAY_COUNT,
            collision_mask: CollisionMask::ALL,
        }
    }
}

impl ControllerConfig {
    /// Check scalar ranges. Ray counts are clamped later, not rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.skin_width >= 0.0 && self.skin_width.is_finite()) {
            return Err(ConfigError::InvalidSkinWidth(self.skin_width));
        }
        // At 90 degrees and beyond cos/tan change sign and the climb would reverse x
        if !(0.0..90.0).contains(&self.max_climb_angle) {
            return Err(ConfigError::InvalidClimbAngle(self.max_climb_angle));
        }
        Ok(())
    }
}
