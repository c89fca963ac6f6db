//! Collision Sweep
//!
//! Resolves a desired per-tick displacement against geometry with parallel
//! probe rays, one axis at a time.
//!
//! ## Order of Resolution
//!
//! ```text
//!  move_by(desired)
//!    │
//!    ├─ 1. probe origins from the current box
//!    ├─ 2. reset collision flags (keep last slope as slope_angle_old)
//!    ├─ 3. x != 0 → horizontal rays, bottom to top
//!    │        ray 0 on a climbable slope → climb (x becomes x + y)
//!    │        anything else              → clamp x, tighten ray length
//!    ├─ 4. y != 0 → vertical rays, left to right, shifted by resolved x
//!    │        climbing → re-derive x from clamped y, re-probe slope angle
//!    └─ 5. return resolved displacement + collision state
//! ```
//!
//! ```text
//!  horizontal rays              vertical rays
//!  3 ◄──┬─────┐                 0 1 2 3
//!  2 ◄──┤     │                 ▲ ▲ ▲ ▲
//!  1 ◄──┤     │                 ├─┴─┴─┤
//!  0 ◄──┴─────┘  (footing)      └─────┘
//! ```
//!
//! ## Slope Change Detection
//!
//! A new slope is detected by comparing angles with exact float equality.
//! Rounding jitter in the provider's normals can therefore re-trigger the
//! back-off step on a slope the mover is already standing on. The back-off is
//! bounded by the hit distance, so the effect is a small re-alignment.

use serde::{Deserialize, Serialize};
use tracing::debug;
#[cfg(feature = "debug-tracing")]
use tracing::trace;

use crate::core::bounds::BoundingBox;
use crate::core::scalar::{is_valid_distance, sign};
use crate::core::vec2::Vec2;
use super::collision::CollisionState;
use super::config::{ConfigError, ControllerConfig};
use super::origins::{ProbeOrigins, RaySpacing};
use super::raycast::{GeometryQuery, Ray, RayHit};

/// Output of one `move_by` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Displacement to apply to the mover's position
    pub displacement: Vec2,
    /// What was touched; pass back into the next call
    pub collisions: CollisionState,
}

/// Ray-cast collision resolver for one mover.
#[derive(Debug, Clone)]
pub struct CollisionSweeper {
    config: ControllerConfig,
    spacing: RaySpacing,
}

impl CollisionSweeper {
    /// Validate the config and derive ray spacing for a collider of this size.
    pub fn new(config: ControllerConfig, bounds: &BoundingBox) -> Result<Self, ConfigError> {
        config.validate()?;
        let spacing = RaySpacing::compute(
            bounds,
            config.skin_width,
            config.horizontal_ray_count,
            config.vertical_ray_count,
        )?;

        debug!(
            horizontal_rays = spacing.horizontal_ray_count,
            vertical_rays = spacing.vertical_ray_count,
            horizontal_spacing = spacing.horizontal,
            vertical_spacing = spacing.vertical,
            "collision sweeper ready"
        );

        Ok(Self { config, spacing })
    }

    /// Recompute spacing after the collider changed size.
    pub fn resize(&mut self, bounds: &BoundingBox) -> Result<(), ConfigError> {
        self.spacing = RaySpacing::compute(
            bounds,
            self.config.skin_width,
            self.config.horizontal_ray_count,
            self.config.vertical_ray_count,
        )?;
        Ok(())
    }

    /// Controller tuning.
    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current ray spacing.
    #[inline]
    pub fn spacing(&self) -> &RaySpacing {
        &self.spacing
    }

    /// Resolve `desired` against `geometry` for a mover occupying `bounds`.
    ///
    /// `previous` is the state returned by the last call (or the default for
    /// the first tick). The returned displacement never points opposite to
    /// `desired.x`.
    pub fn move_by<G>(
        &self,
        geometry: &G,
        bounds: &BoundingBox,
        desired: Vec2,
        previous: CollisionState,
    ) -> SweepResult
    where
        G: GeometryQuery + ?Sized,
    {
        let origins = ProbeOrigins::compute(bounds, self.config.skin_width);

        let mut collisions = previous;
        collisions.reset();

        let mut displacement = desired;

        // Only check horizontal collisions when moving sideways
        if displacement.x != 0.0 {
            self.resolve_horizontal(geometry, &origins, &mut displacement, &mut collisions);
        }

        // Only check vertical collisions when rising or falling
        if displacement.y != 0.0 {
            self.resolve_vertical(geometry, &origins, &mut displacement, &mut collisions);
        }

        SweepResult {
            displacement,
            collisions,
        }
    }

    fn resolve_horizontal<G>(
        &self,
        geometry: &G,
        origins: &ProbeOrigins,
        displacement: &mut Vec2,
        collisions: &mut CollisionState,
    ) where
        G: GeometryQuery + ?Sized,
    {
        let skin = self.config.skin_width;
        let max_climb = self.config.max_climb_angle;
        let direction_x = sign(displacement.x);
        let corner = if direction_x < 0.0 {
            origins.bottom_left
        } else {
            origins.bottom_right
        };
        let direction = Vec2::RIGHT.scale(direction_x);

        // Ray length shrinks as closer hits are found
        (0..self.spacing.horizontal_ray_count).fold(
            displacement.x.abs() + skin,
            |ray_length, i| {
                let origin = corner + Vec2::UP.scale(self.spacing.horizontal * i as f32);
                let ray = Ray::new(origin, direction, ray_length, self.config.collision_mask);
                let Some(hit) = self.cast(geometry, &ray) else {
                    return ray_length;
                };

                let slope_angle = hit.slope_angle();

                // Ray 0 is the footing ray
                if i == 0 && slope_angle <= max_climb {
                    let mut distance_to_slope_start = 0.0;
                    if slope_angle != collisions.slope_angle_old {
                        // New slope: walk up to its foot first, climb with the rest
                        distance_to_slope_start = (hit.distance - skin).max(0.0);
                        displacement.x -= distance_to_slope_start * direction_x;
                    }
                    climb_slope(displacement, collisions, slope_angle);
                    displacement.x += distance_to_slope_start * direction_x;
                }

                if collisions.climbing_slope && slope_angle <= max_climb {
                    return ray_length;
                }

                displacement.x = displacement.x.abs().min((hit.distance - skin).max(0.0)) * direction_x;

                if collisions.climbing_slope {
                    // Blocked mid-climb: stay on the slope for the shortened run
                    displacement.y = collisions.slope_angle.to_radians().tan() * displacement.x.abs();
                }

                collisions.left = direction_x < 0.0;
                collisions.right = direction_x > 0.0;

                (displacement.x.abs() + skin).min(hit.distance)
            },
        );
    }

    fn resolve_vertical<G>(
        &self,
        geometry: &G,
        origins: &ProbeOrigins,
        displacement: &mut Vec2,
        collisions: &mut CollisionState,
    ) where
        G: GeometryQuery + ?Sized,
    {
        let skin = self.config.skin_width;
        let direction_y = sign(displacement.y);
        let corner = if direction_y < 0.0 {
            origins.bottom_left
        } else {
            origins.top_left
        };
        let direction = Vec2::UP.scale(direction_y);

        (0..self.spacing.vertical_ray_count).fold(
            displacement.y.abs() + skin,
            |ray_length, i| {
                // Cast from where the mover will be after the horizontal step
                let offset = self.spacing.vertical * i as f32 + displacement.x;
                let ray = Ray::new(
                    corner + Vec2::RIGHT.scale(offset),
                    direction,
                    ray_length,
                    self.config.collision_mask,
                );
                let Some(hit) = self.cast(geometry, &ray) else {
                    return ray_length;
                };

                displacement.y = (hit.distance - skin).max(0.0) * direction_y;

                if collisions.climbing_slope {
                    let tan = collisions.slope_angle.to_radians().tan();
                    if tan > 0.0 {
                        let run = (displacement.y.abs() / tan).min(displacement.x.abs());
                        displacement.x = run * sign(displacement.x);
                    }
                }

                collisions.below = direction_y < 0.0;
                collisions.above = direction_y > 0.0;

                hit.distance
            },
        );

        if collisions.climbing_slope {
            self.reprobe_slope(geometry, origins, displacement, collisions);
        }
    }

    /// Look ahead along the climb for a change in slope angle.
    fn reprobe_slope<G>(
        &self,
        geometry: &G,
        origins: &ProbeOrigins,
        displacement: &mut Vec2,
        collisions: &mut CollisionState,
    ) where
        G: GeometryQuery + ?Sized,
    {
        let skin = self.config.skin_width;
        let direction_x = sign(displacement.x);
        let origin = if direction_x < 0.0 {
            origins.bottom_left
        } else {
            origins.bottom_right
        };
        let ray = Ray::new(
            origin,
            Vec2::RIGHT.scale(direction_x),
            displacement.x.abs() + skin,
            self.config.collision_mask,
        );

        if let Some(hit) = self.cast(geometry, &ray) {
            let slope_angle = hit.slope_angle();
            if slope_angle != collisions.slope_angle {
                displacement.x = (hit.distance - skin).max(0.0) * direction_x;
                collisions.slope_angle = slope_angle;
            }
        }
    }

    /// Cast one ray, dropping hits that break the provider contract.
    fn cast<G>(&self, geometry: &G, ray: &Ray) -> Option<RayHit>
    where
        G: GeometryQuery + ?Sized,
    {
        let hit = geometry.raycast(ray);

        #[cfg(feature = "debug-tracing")]
        trace!(
            origin = %ray.origin,
            direction = %ray.direction,
            length = ray.max_distance,
            hit = ?hit,
            "probe ray"
        );

        match hit {
            Some(hit)
                if is_valid_distance(hit.distance)
                    && hit.distance <= ray.max_distance
                    && hit.normal.is_finite() =>
            {
                Some(hit)
            }
            Some(hit) => {
                debug!(
                    distance = hit.distance,
                    normal = %hit.normal,
                    max_distance = ray.max_distance,
                    "ignoring invalid ray hit"
                );
                None
            }
            None => None,
        }
    }
}

/// Turn horizontal motion into motion along a slope.
///
/// Does nothing when the mover is already rising faster than the slope
/// would lift it (e.g. mid-jump).
fn climb_slope(displacement: &mut Vec2, collisions: &mut CollisionState, slope_angle: f32) {
    let move_distance = displacement.x.abs();
    let radians = slope_angle.to_radians();
    let climb_velocity_y = radians.sin() * move_distance;

    if displacement.y <= climb_velocity_y {
        displacement.y = climb_velocity_y;
        displacement.x = radians.cos() * move_distance * sign(displacement.x);
        collisions.below = true;
        collisions.climbing_slope = true;
        collisions.slope_angle = slope_angle;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::mask::CollisionMask;
    use crate::physics::raycast::OpenSpace;

    const SKIN: f32 = 0.015;
    const EPS: f32 = 1e-4;

    /// Unit box sitting on y = 0, spanning x in [0, 1].
    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 1.0))
    }

    fn sweeper() -> CollisionSweeper {
        CollisionSweeper::new(ControllerConfig::default(), &unit_box()).unwrap()
    }

    fn slope_normal(degrees: f32) -> Vec2 {
        let r = degrees.to_radians();
        Vec2::new(-r.sin(), r.cos())
    }

    /// Footing ray is the horizontal ray starting at the skin height.
    fn is_footing_ray(ray: &Ray) -> bool {
        ray.direction == Vec2::RIGHT && ray.origin.y < 0.02
    }

    #[test]
    fn test_open_space_passes_through() {
        let desired = Vec2::new(0.7, -0.3);
        let result = sweeper().move_by(&OpenSpace, &unit_box(), desired, CollisionState::default());
        assert_eq!(result.displacement, desired);
        assert!(!result.collisions.any());
    }

    #[test]
    fn test_flat_ground_landing() {
        let floor = |ray: &Ray| {
            (ray.direction == Vec2::DOWN).then(|| RayHit::new(1.0, Vec2::UP))
        };

        let result = sweeper().move_by(&floor, &unit_box(), Vec2::new(0.0, -2.0), CollisionState::default());

        assert!((result.displacement.y - -(1.0 - SKIN)).abs() < EPS);
        assert_eq!(result.displacement.x, 0.0);
        assert!(result.collisions.below);
        assert!(!result.collisions.above);
    }

    #[test]
    fn test_wall_block_on_bottom_ray() {
        let wall = |ray: &Ray| is_footing_ray(ray).then(|| RayHit::new(0.5, Vec2::LEFT));

        let result = sweeper().move_by(&wall, &unit_box(), Vec2::new(1.0, 0.0), CollisionState::default());

        assert!((result.displacement.x - (0.5 - SKIN)).abs() < EPS);
        assert_eq!(result.displacement.y, 0.0);
        assert!(result.collisions.right);
        assert!(!result.collisions.left);
    }

    #[test]
    fn test_later_rays_use_tightened_length() {
        let seen = std::cell::RefCell::new(Vec::new());
        let wall = |ray: &Ray| {
            if ray.direction != Vec2::RIGHT {
                return None;
            }
            seen.borrow_mut().push(ray.max_distance);
            (ray.origin.y < 0.02).then(|| RayHit::new(0.5, Vec2::LEFT))
        };

        sweeper().move_by(&wall, &unit_box(), Vec2::new(1.0, 0.0), CollisionState::default());

        let lengths = seen.into_inner();
        assert_eq!(lengths.len(), 4);
        assert!((lengths[0] - 1.015).abs() < EPS);
        for length in &lengths[1..] {
            assert!((length - 0.5).abs() < EPS, "length = {length}");
        }
    }

    #[test]
    fn test_moving_left_sets_left_flag() {
        let wall = |ray: &Ray| (ray.direction == Vec2::LEFT).then(|| RayHit::new(0.3, Vec2::RIGHT));

        let result = sweeper().move_by(&wall, &unit_box(), Vec2::new(-1.0, 0.0), CollisionState::default());

        assert!((result.displacement.x - -(0.3 - SKIN)).abs() < EPS);
        assert!(result.collisions.left);
        assert!(!result.collisions.right);
    }

    #[test]
    fn test_climb_slope_arithmetic() {
        let mut displacement = Vec2::new(1.0, 0.0);
        let mut collisions = CollisionState::default();

        climb_slope(&mut displacement, &mut collisions, 30.0);

        assert!((displacement.x - 0.866_025).abs() < EPS);
        assert!((displacement.y - 0.5).abs() < EPS);
        assert!(collisions.below);
        assert!(collisions.climbing_slope);
        assert_eq!(collisions.slope_angle, 30.0);
    }

    #[test]
    fn test_climb_does_not_override_jump() {
        let mut displacement = Vec2::new(-1.0, 0.9);
        let mut collisions = CollisionState::default();

        climb_slope(&mut displacement, &mut collisions, 30.0);

        assert_eq!(displacement, Vec2::new(-1.0, 0.9));
        assert!(!collisions.climbing_slope);
        assert!(!collisions.below);
    }

    #[test]
    fn test_climb_preserves_direction() {
        let mut displacement = Vec2::new(-2.0, 0.0);
        let mut collisions = CollisionState::default();

        climb_slope(&mut displacement, &mut collisions, 45.0);

        assert!(displacement.x < 0.0);
        assert!((displacement.x + 2.0 * 45f32.to_radians().cos()).abs() < EPS);
        assert!((displacement.y - 2.0 * 45f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn test_slope_reentry_skips_back_off() {
        let normal = slope_normal(20.0);
        let angle = RayHit::new(0.3, normal).slope_angle();
        let slope = move |ray: &Ray| is_footing_ray(ray).then(|| RayHit::new(0.3, normal));

        // Standing on the same slope last tick
        let previous = CollisionState { slope_angle: angle, ..Default::default() };
        let result = sweeper().move_by(&slope, &unit_box(), Vec2::new(1.0, 0.0), previous);

        let r = angle.to_radians();
        assert!((result.displacement.x - r.cos()).abs() < EPS);
        assert!((result.displacement.y - r.sin()).abs() < EPS);
        assert!(result.collisions.climbing_slope);
        assert!(result.collisions.below);
        assert_eq!(result.collisions.slope_angle_old, angle);
    }

    #[test]
    fn test_new_slope_backs_off_to_slope_start() {
        let normal = slope_normal(20.0);
        let slope = move |ray: &Ray| is_footing_ray(ray).then(|| RayHit::new(0.3, normal));

        let result = sweeper().move_by(&slope, &unit_box(), Vec2::new(1.0, 0.0), CollisionState::default());

        // Walk 0.285 flat to the foot of the slope, climb the remaining 0.715
        let r = 20f32.to_radians();
        let to_start = 0.3 - SKIN;
        let climbed = 1.0 - to_start;
        assert!((result.displacement.x - (to_start + r.cos() * climbed)).abs() < EPS);
        assert!((result.displacement.y - r.sin() * climbed).abs() < EPS);
        assert!(result.collisions.climbing_slope);
    }

    #[test]
    fn test_slope_angle_jitter_triggers_back_off() {
        // Exact equality: one ulp of difference counts as a new slope
        let normal = slope_normal(20.0);
        let angle = RayHit::new(0.3, normal).slope_angle();
        let slope = move |ray: &Ray| is_footing_ray(ray).then(|| RayHit::new(0.3, normal));

        let jittered = CollisionState {
            slope_angle: f32::from_bits(angle.to_bits() + 1),
            ..Default::default()
        };
        let settled = CollisionState { slope_angle: angle, ..Default::default() };

        let with_jitter = sweeper().move_by(&slope, &unit_box(), Vec2::new(1.0, 0.0), jittered);
        let without = sweeper().move_by(&slope, &unit_box(), Vec2::new(1.0, 0.0), settled);

        assert!(with_jitter.displacement.y < without.displacement.y);
    }

    #[test]
    fn test_steep_slope_is_a_wall() {
        let normal = slope_normal(85.0);
        let steep = move |ray: &Ray| is_footing_ray(ray).then(|| RayHit::new(0.4, normal));

        let result = sweeper().move_by(&steep, &unit_box(), Vec2::new(1.0, 0.0), CollisionState::default());

        assert!((result.displacement.x - (0.4 - SKIN)).abs() < EPS);
        assert_eq!(result.displacement.y, 0.0);
        assert!(result.collisions.right);
        assert!(!result.collisions.climbing_slope);
    }

    #[test]
    fn test_jumping_into_slope_clamps_like_a_wall() {
        let normal = slope_normal(30.0);
        let slope = move |ray: &Ray| is_footing_ray(ray).then(|| RayHit::new(0.4, normal));

        // Rising faster than the slope would lift us
        let result = sweeper().move_by(&slope, &unit_box(), Vec2::new(1.0, 2.0), CollisionState::default());

        assert!((result.displacement.x - (0.4 - SKIN)).abs() < EPS);
        assert_eq!(result.displacement.y, 2.0);
        assert!(!result.collisions.climbing_slope);
        assert!(result.collisions.right);
    }

    #[test]
    fn test_ceiling_while_climbing_shortens_run() {
        let normal = slope_normal(30.0);
        let angle = RayHit::new(SKIN, normal).slope_angle();
        let geometry = move |ray: &Ray| {
            if ray.direction == Vec2::UP {
                Some(RayHit::new(0.25 + SKIN, Vec2::DOWN))
            } else if is_footing_ray(ray) {
                Some(RayHit::new(SKIN, normal))
            } else {
                None
            }
        };

        let previous = CollisionState { slope_angle: angle, ..Default::default() };
        let result = sweeper().move_by(&geometry, &unit_box(), Vec2::new(1.0, 0.0), previous);

        assert!((result.displacement.y - 0.25).abs() < EPS);
        assert!((result.displacement.x - 0.25 / angle.to_radians().tan()).abs() < EPS);
        assert!(result.collisions.above);
        assert!(!result.collisions.below);
        assert!(result.collisions.climbing_slope);
    }

    #[test]
    fn test_slope_change_mid_climb() {
        let gentle = slope_normal(30.0);
        let gentle_angle = RayHit::new(SKIN, gentle).slope_angle();
        let steeper = slope_normal(45.0);
        let geometry = move |ray: &Ray| {
            if !is_footing_ray(ray) {
                return None;
            }
            if ray.max_distance > 1.0 {
                // Full-length footing ray: standing at the base of the gentle slope
                Some(RayHit::new(SKIN, gentle))
            } else {
                // Shorter look-ahead probe: the slope steepens further on
                Some(RayHit::new(0.4, steeper))
            }
        };

        let previous = CollisionState { slope_angle: gentle_angle, ..Default::default() };
        let result = sweeper().move_by(&geometry, &unit_box(), Vec2::new(1.0, 0.0), previous);

        assert!((result.displacement.x - (0.4 - SKIN)).abs() < EPS);
        assert!((result.collisions.slope_angle - 45.0).abs() < 1e-3);
        assert!(result.collisions.climbing_slope);
    }

    #[test]
    fn test_vertical_rays_shift_by_resolved_x() {
        let origins_seen = std::cell::RefCell::new(Vec::new());
        let probe = |ray: &Ray| {
            if ray.direction == Vec2::DOWN {
                origins_seen.borrow_mut().push(ray.origin.x);
            }
            None
        };

        let sweeper = sweeper();
        sweeper.move_by(&probe, &unit_box(), Vec2::new(0.5, -0.5), CollisionState::default());

        let xs = origins_seen.into_inner();
        assert_eq!(xs.len(), 4);
        let spacing = sweeper.spacing().vertical;
        for (i, x) in xs.iter().enumerate() {
            let expected = SKIN + spacing * i as f32 + 0.5;
            assert!((x - expected).abs() < EPS, "ray {i}: {x} vs {expected}");
        }
    }

    #[test]
    fn test_invalid_hits_are_ignored() {
        let negative = |_: &Ray| Some(RayHit::new(-0.5, Vec2::UP));
        let nan = |_: &Ray| Some(RayHit::new(f32::NAN, Vec2::UP));
        let too_far = |ray: &Ray| Some(RayHit::new(ray.max_distance + 1.0, Vec2::UP));
        let bad_normal = |_: &Ray| Some(RayHit::new(0.1, Vec2::new(f32::NAN, 0.0)));

        let desired = Vec2::new(0.4, -0.6);
        let sweeper = sweeper();
        for result in [
            sweeper.move_by(&negative, &unit_box(), desired, CollisionState::default()),
            sweeper.move_by(&nan, &unit_box(), desired, CollisionState::default()),
            sweeper.move_by(&too_far, &unit_box(), desired, CollisionState::default()),
            sweeper.move_by(&bad_normal, &unit_box(), desired, CollisionState::default()),
        ] {
            assert_eq!(result.displacement, desired);
            assert!(!result.collisions.any());
        }
    }

    #[test]
    fn test_idle_move_is_noop() {
        let everywhere = |_: &Ray| Some(RayHit::new(0.0, Vec2::UP));
        let previous = CollisionState { below: true, slope_angle: 12.0, ..Default::default() };

        let result = sweeper().move_by(&everywhere, &unit_box(), Vec2::ZERO, previous);

        assert_eq!(result.displacement, Vec2::ZERO);
        assert!(!result.collisions.any());
        assert_eq!(result.collisions.slope_angle_old, 12.0);

        // Calling again keeps it that way
        let again = sweeper().move_by(&everywhere, &unit_box(), Vec2::ZERO, result.collisions);
        assert_eq!(again.displacement, Vec2::ZERO);
        assert!(!again.collisions.any());
    }

    #[test]
    fn test_mask_is_forwarded() {
        let config = ControllerConfig {
            collision_mask: CollisionMask::GROUND,
            ..Default::default()
        };
        let sweeper = CollisionSweeper::new(config, &unit_box()).unwrap();
        let only_ground = |ray: &Ray| {
            ray.mask.intersects(CollisionMask::GROUND).then(|| RayHit::new(0.5, Vec2::UP))
        };

        let result = sweeper.move_by(&only_ground, &unit_box(), Vec2::new(0.0, -1.0), CollisionState::default());
        assert!(result.collisions.below);
    }

    #[test]
    fn test_new_rejects_degenerate_box() {
        let flat = BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 0.01));
        assert!(matches!(
            CollisionSweeper::new(ControllerConfig::default(), &flat),
            Err(ConfigError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn test_resize_updates_spacing() {
        let mut sweeper = sweeper();
        let before = sweeper.spacing().horizontal;
        sweeper
            .resize(&BoundingBox::new(Vec2::ZERO, Vec2::new(1.0, 2.0)))
            .unwrap();
        assert!(sweeper.spacing().horizontal > before);
    }
}
