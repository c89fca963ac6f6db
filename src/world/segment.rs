//! Line segments and ray/segment intersection.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::physics::mask::CollisionMask;
use crate::physics::raycast::{Ray, RayHit};

/// One straight edge of collision geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint
    pub start: Vec2,
    /// Second endpoint
    pub end: Vec2,
    /// Layer this edge belongs to
    pub layer: CollisionMask,
}

impl Segment {
    /// Create a new segment.
    pub const fn new(start: Vec2, end: Vec2, layer: CollisionMask) -> Self {
        Self { start, end, layer }
    }

    /// Length of the edge.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Nearest intersection with `ray`, ignoring the layer.
    ///
    /// The returned normal faces the ray origin. Rays parallel to the
    /// segment never hit it.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let edge = self.end - self.start;
        let denominator = ray.direction.cross(edge);
        if denominator.abs() < f32::EPSILON {
            return None;
        }

        let to_start = self.start - ray.origin;
        let t = to_start.cross(edge) / denominator;
        let u = to_start.cross(ray.direction) / denominator;

        if !(0.0..=1.0).contains(&u) || t < 0.0 || t > ray.max_distance {
            return None;
        }

        let mut normal = edge.perpendicular().normalize();
        if normal.dot(ray.direction) > 0.0 {
            normal = -normal;
        }

        Some(RayHit::new(t, normal))
    }
}
