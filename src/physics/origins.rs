//! Ray origin and spacing calculation.
//!
//! ```text
//!   top_left ┌───────────┐ top_right
//!            │  skin     │
//!            │  ┌─────┐  │   rays start on the inner (shrunk) box so a
//!            │  │     │  │   mover flush against a wall still gets a
//!            │  └─────┘  │   positive hit distance
//!            │           │
//! bottom_left└───────────┘ bottom_right
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::bounds::BoundingBox;
use crate::core::scalar::MIN_RAY_COUNT;
use crate::core::vec2::Vec2;
use super::config::ConfigError;

/// Four corners of the skin-shrunk collider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProbeOrigins {
    /// Bottom-left corner
    pub bottom_left: Vec2,
    /// Bottom-right corner
    pub bottom_right: Vec2,
    /// Top-left corner
    pub top_left: Vec2,
    /// Top-right corner
    pub top_right: Vec2,
}

impl ProbeOrigins {
    /// Corners of `bounds` shrunk by `skin_width` on every side.
    pub fn compute(bounds: &BoundingBox, skin_width: f32) -> Self {
        let inner = bounds.shrink(skin_width);
        Self {
            bottom_left: Vec2::new(inner.min.x, inner.min.y),
            bottom_right: Vec2::new(inner.max.x, inner.min.y),
            top_left: Vec2::new(inner.min.x, inner.max.y),
            top_right: Vec2::new(inner.max.x, inner.max.y),
        }
    }
}

/// Distance between neighbouring parallel rays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySpacing {
    /// Rays along X (clamped to >= 2)
    pub horizontal_ray_count: u32,
    /// Rays along Y (clamped to >= 2)
    pub vertical_ray_count: u32,
    /// Vertical gap between horizontal rays
    pub horizontal: f32,
    /// Horizontal gap between vertical rays
    pub vertical: f32,
}

impl RaySpacing {
    /// Spread the rays evenly over the skin-shrunk collider.
    ///
    /// Ray counts below two are raised to two. Fails when the shrunk box has
    /// no positive width or height.
    pub fn compute(
        bounds: &BoundingBox,
        skin_width: f32,
        horizontal_ray_count: u32,
        vertical_ray_count: u32,
    ) -> Result<Self, ConfigError> {
        let inner = bounds.shrink(skin_width);
        if !inner.is_valid() {
            return Err(ConfigError::DegenerateBounds {
                width: bounds.width(),
                height: bounds.height(),
                skin_width,
            });
        }

        let horizontal_ray_count = clamp_ray_count(horizontal_ray_count, "horizontal");
        let vertical_ray_count = clamp_ray_count(vertical_ray_count, "vertical");

        Ok(Self {
            horizontal_ray_count,
            vertical_ray_count,
            horizontal: inner.height() / (horizontal_ray_count - 1) as f32,
            vertical: inner.width() / (vertical_ray_count - 1) as f32,
        })
    }
}

fn clamp_ray_count(count: u32, axis: &str) -> u32 {
    if count < MIN_RAY_COUNT {
        warn!("{} ray count {} raised to {}", axis, count, MIN_RAY_COUNT);
        MIN_RAY_COUNT
    } else {
        count
    }
}
