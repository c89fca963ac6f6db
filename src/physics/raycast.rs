//! Ray queries against collision geometry.
//!
//! The sweeper never looks at geometry directly. It builds a [`Ray`] per
//! probe and asks a [`GeometryQuery`] for the nearest hit.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use super::mask::CollisionMask;

/// One probe ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point (inside the collider by the skin width)
    pub origin: Vec2,
    /// Unit direction, axis-aligned for every ray the sweeper casts
    pub direction: Vec2,
    /// Furthest distance that counts as a hit
    pub max_distance: f32,
    /// Layers this ray collides with
    pub mask: CollisionMask,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub const fn new(origin: Vec2, direction: Vec2, max_distance: f32, mask: CollisionMask) -> Self {
        Self {
            origin,
            direction,
            max_distance,
            mask,
        }
    }

    /// Point at `distance` along the ray.
    #[inline]
    pub fn point_at(&self, distance: f32) -> Vec2 {
        self.origin + self.direction.scale(distance)
    }

    /// End point at `max_distance`.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.point_at(self.max_distance)
    }
}

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    /// Surface normal at the hit point, facing the ray origin
    pub normal: Vec2,
}

impl RayHit {
    /// Create a new hit.
    #[inline]
    pub const fn new(distance: f32, normal: Vec2) -> Self {
        Self { distance, normal }
    }

    /// Angle between the surface normal and up, in degrees.
    ///
    /// 0 is flat floor, 90 a vertical wall, 180 a flat ceiling.
    #[inline]
    pub fn slope_angle(&self) -> f32 {
        self.normal.angle_deg(Vec2::UP)
    }
}

/// Geometry that can answer nearest-hit ray queries.
///
/// Implementations must be read-only and return the *nearest* hit within
/// `ray.max_distance` whose layer intersects `ray.mask`, or `None`.
pub trait GeometryQuery {
    /// Cast a single ray.
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;
}

impl<F> GeometryQuery for F
where
    F: Fn(&Ray) -> Option<RayHit>,
{
    #[inline]
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self(ray)
    }
}

/// Empty world: nothing is ever hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSpace;

impl GeometryQuery for OpenSpace {
    #[inline]
    fn raycast(&self, _ray: &Ray) -> Option<RayHit> {
        None
    }
}
