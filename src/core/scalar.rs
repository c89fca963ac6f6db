//! Scalar Helpers and Tuning Constants
//!
//! Everything the mover needs on top of `f32`: the default tuning values,
//! sign/angle conventions and the critically damped smoothing used for
//! horizontal acceleration.
//!
//! ## Conventions
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  sign(0.0)        = +1.0   (zero counts as positive)         │
//! │  angles           = degrees, [0, 180]                        │
//! │  distances        = world units (1 tile = 1.0 by default)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// TUNING CONSTANTS
// =============================================================================

/// Inset applied to the collider before casting rays: 0.015 units.
pub const SKIN_WIDTH: f32 = 0.015;

/// Steepest slope (degrees between surface normal and up) that can be climbed.
pub const DEFAULT_MAX_CLIMB_ANGLE: f32 = 80.0;

/// Default number of rays per axis.
pub const DEFAULT_RAY_COUNT: u32 = 4;

/// Fewest rays that can still establish a spacing.
pub const MIN_RAY_COUNT: u32 = 2;

/// Floor for `smooth_damp` smoothing time, avoids dividing by zero.
pub const MIN_SMOOTH_TIME: f32 = 0.0001;

// =============================================================================
// CORE OPERATIONS
// =============================================================================

/// Sign of `value` as `+1.0` or `-1.0`. Zero maps to `+1.0`.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Check if a value is a usable, non-negative distance.
#[inline]
pub fn is_valid_distance(value: f32) -> bool {
    value >= 0.0 && value.is_finite()
}

/// Approximate equality with an absolute tolerance.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Gradually move `current` towards `target` with a critically damped spring.
///
/// `velocity` carries the spring state between calls and must be owned by the
/// caller. Never overshoots `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Cubic approximation of exp(-omega * dt)
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;

    let mut output = target + (change + temp) * exp;

    // Stop exactly at the target instead of overshooting it
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = if dt > 0.0 { (output - target) / dt } else { 0.0 };
    }

    output
}
