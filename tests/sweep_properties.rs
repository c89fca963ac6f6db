use proptest::prelude::*;

use kinematic_sweep::{
    physics::{CollisionState, OpenSpace},
    world::Segment,
    BoundingBox, CollisionMask, CollisionSweeper, ControllerConfig, SegmentWorld, Vec2,
};

const EPS: f32 = 1e-3;

/// Flat floor along y = 0 and a vertical wall at `wall_x`.
fn floor_and_wall(wall_x: f32) -> SegmentWorld {
    let mut world = SegmentWorld::new();
    world.push(Segment::new(
        Vec2::new(-100.0, 0.0),
        Vec2::new(100.0, 0.0),
        CollisionMask::GROUND,
    ));
    world.push(Segment::new(
        Vec2::new(wall_x, -100.0),
        Vec2::new(wall_x, 100.0),
        CollisionMask::GROUND,
    ));
    world
}

/// Collider with its bottom-left corner at (0, gap_y).
fn collider(width: f32, height: f32, gap_y: f32) -> BoundingBox {
    BoundingBox::new(Vec2::new(0.0, gap_y), Vec2::new(width, gap_y + height))
}

proptest! {
    #[test]
    fn resolved_motion_never_exceeds_or_reverses(
        width in 0.2f32..3.0,
        height in 0.2f32..3.0,
        gap_x in 0.0f32..3.0,
        gap_y in 0.0f32..3.0,
        dx in -5.0f32..5.0,
        dy in -5.0f32..5.0,
    ) {
        let bounds = collider(width, height, gap_y);
        let world = floor_and_wall(width + gap_x);
        let sweeper = CollisionSweeper::new(ControllerConfig::default(), &bounds).unwrap();

        let result = sweeper.move_by(&world, &bounds, Vec2::new(dx, dy), CollisionState::default());
        let moved = result.displacement;

        prop_assert!(moved.x * dx >= 0.0, "x reversed: {} vs {}", moved.x, dx);
        prop_assert!(moved.x.abs() <= dx.abs() + 1e-6);
        prop_assert!(moved.y * dy >= 0.0, "y reversed: {} vs {}", moved.y, dy);
        prop_assert!(moved.y.abs() <= dy.abs() + 1e-6);

        // No penetration of the floor or the wall
        prop_assert!(bounds.min.y + moved.y >= -1e-4);
        prop_assert!(bounds.max.x + moved.x <= width + gap_x + 1e-4);
    }

    #[test]
    fn contact_flags_are_exclusive(
        width in 0.2f32..3.0,
        height in 0.2f32..3.0,
        gap_x in 0.0f32..3.0,
        gap_y in 0.0f32..3.0,
        dx in -5.0f32..5.0,
        dy in -5.0f32..5.0,
    ) {
        let bounds = collider(width, height, gap_y);
        let world = floor_and_wall(width + gap_x);
        let sweeper = CollisionSweeper::new(ControllerConfig::default(), &bounds).unwrap();

        let state = sweeper
            .move_by(&world, &bounds, Vec2::new(dx, dy), CollisionState::default())
            .collisions;

        prop_assert!(!(state.left && state.right));
        prop_assert!(!(state.above && state.below));
        prop_assert!(!state.climbing_slope);
    }

    #[test]
    fn falling_far_enough_comes_to_rest(
        width in 0.2f32..3.0,
        height in 0.2f32..3.0,
        gap_y in 0.0f32..3.0,
        fall in 0.0f32..6.0,
    ) {
        prop_assume!((fall - gap_y).abs() > EPS);

        let bounds = collider(width, height, gap_y);
        let world = floor_and_wall(100.0);
        let sweeper = CollisionSweeper::new(ControllerConfig::default(), &bounds).unwrap();

        let result = sweeper.move_by(&world, &bounds, Vec2::new(0.0, -fall), CollisionState::default());

        if fall > gap_y {
            prop_assert!(result.collisions.below);
            prop_assert!((bounds.min.y + result.displacement.y).abs() < EPS);
        } else {
            prop_assert!(!result.collisions.below);
            prop_assert_eq!(result.displacement.y, -fall);
        }
    }

    #[test]
    fn walking_far_enough_stops_at_wall(
        width in 0.2f32..3.0,
        height in 0.2f32..3.0,
        gap_x in 0.0f32..3.0,
        run in 0.0f32..6.0,
    ) {
        prop_assume!((run - gap_x).abs() > EPS);

        let bounds = collider(width, height, 0.0);
        let wall_x = width + gap_x;
        let world = floor_and_wall(wall_x);
        let sweeper = CollisionSweeper::new(ControllerConfig::default(), &bounds).unwrap();

        let result = sweeper.move_by(&world, &bounds, Vec2::new(run, 0.0), CollisionState::default());

        if run > gap_x {
            prop_assert!(result.collisions.right);
            prop_assert!((bounds.max.x + result.displacement.x - wall_x).abs() < EPS);
        } else {
            prop_assert!(!result.collisions.right);
            prop_assert_eq!(result.displacement.x, run);
        }
    }

    #[test]
    fn idle_move_is_a_no_op(
        gap_y in 0.0f32..3.0,
        previous_angle in 0.0f32..80.0,
        below in any::<bool>(),
        climbing in any::<bool>(),
    ) {
        let bounds = collider(1.0, 1.0, gap_y);
        let world = floor_and_wall(5.0);
        let sweeper = CollisionSweeper::new(ControllerConfig::default(), &bounds).unwrap();
        let previous = CollisionState {
            below,
            climbing_slope: climbing,
            slope_angle: previous_angle,
            ..Default::default()
        };

        let result = sweeper.move_by(&world, &bounds, Vec2::ZERO, previous);

        prop_assert_eq!(result.displacement, Vec2::ZERO);
        prop_assert!(!result.collisions.any());
        prop_assert!(!result.collisions.climbing_slope);
        prop_assert_eq!(result.collisions.slope_angle, 0.0);
        prop_assert_eq!(result.collisions.slope_angle_old, previous_angle);
    }

    #[test]
    fn open_space_passes_motion_through(
        dx in -10.0f32..10.0,
        dy in -10.0f32..10.0,
        rays in 0u32..12,
    ) {
        let bounds = collider(1.0, 2.0, 0.0);
        let config = ControllerConfig {
            horizontal_ray_count: rays,
            vertical_ray_count: rays,
            ..Default::default()
        };
        let sweeper = CollisionSweeper::new(config, &bounds).unwrap();

        let result = sweeper.move_by(&OpenSpace, &bounds, Vec2::new(dx, dy), CollisionState::default());
        prop_assert_eq!(result.displacement, Vec2::new(dx, dy));
        prop_assert!(!result.collisions.any());
    }
}
