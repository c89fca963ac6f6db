//! Per-tick collision record.

use serde::{Deserialize, Serialize};

use crate::core::hash::StateHasher;

/// What the mover touched during the last `move_by`.
///
/// Owned by the caller and threaded back into the next call. Everything is
/// cleared on reset except `slope_angle_old`, which keeps the previous tick's
/// slope for change detection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionState {
    /// Hit a ceiling while moving up
    pub above: bool,
    /// Standing on (or climbing) a floor
    pub below: bool,
    /// Blocked while moving left
    pub left: bool,
    /// Blocked while moving right
    pub right: bool,
    /// Horizontal motion was converted into a slope climb this tick
    pub climbing_slope: bool,
    /// Slope under the footing ray this tick, degrees
    pub slope_angle: f32,
    /// Slope from the previous tick, degrees
    pub slope_angle_old: f32,
}

impl CollisionState {
    /// Start a new tick.
    pub fn reset(&mut self) {
        self.above = false;
        self.below = false;
        self.left = false;
        self.right = false;
        self.climbing_slope = false;

        self.slope_angle_old = self.slope_angle;
        self.slope_angle = 0.0;
    }

    /// Touching anything at all.
    #[inline]
    pub fn any(&self) -> bool {
        self.above || self.below || self.left || self.right
    }

    /// Feed every field into a state hash.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_bool(self.above);
        hasher.update_bool(self.below);
        hasher.update_bool(self.left);
        hasher.update_bool(self.right);
        hasher.update_bool(self.climbing_slope);
        hasher.update_f32(self.slope_angle);
        hasher.update_f32(self.slope_angle_old);
    }
}
