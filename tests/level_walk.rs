use kinematic_sweep::{
    game::{
        events::MovementEventKind,
        input::InputFrame,
        player::PlayerState,
        tick::{replay, SimConfig},
        transcript::MovementTranscript,
    },
    physics::ControllerConfig,
    world::Level,
    CollisionMask,
};

/// Floor, a two-tile 45° ramp, a plateau at y = 3 and a wall at x = 10.
const RAMP: &[&str] = &[
    "..........#",
    "......../##",
    ".P...../###",
    "###########",
];

fn ramp() -> Level {
    Level::from_ascii(RAMP, 1.0, CollisionMask::GROUND).unwrap()
}

#[test]
fn test_spawn_rests_on_floor() {
    let level = ramp();
    let spawn = level.spawn.unwrap();
    let config = SimConfig::default();
    let sweeper = config.build_sweeper().unwrap();

    let (state, events) = replay(
        PlayerState::new(spawn),
        &level.world,
        &sweeper,
        &[InputFrame::new(); 30],
        &config,
    );

    assert!(state.grounded);
    assert!((state.position.y - 1.5).abs() < 1e-3);
    assert_eq!(state.position.x, spawn.x);
    assert_eq!(events[0].kind, MovementEventKind::Landed);
}

#[test]
fn test_walks_up_ramp_to_wall() {
    let level = ramp();
    let config = SimConfig::default();
    let sweeper = config.build_sweeper().unwrap();

    let (state, events) = replay(
        PlayerState::new(level.spawn.unwrap()),
        &level.world,
        &sweeper,
        &[InputFrame::with_movement(127, 0); 300],
        &config,
    );

    // On the plateau, pressed against the wall
    assert!(state.grounded);
    assert!(state.collisions.right);
    assert!((state.position.y - 3.5).abs() < 0.05, "y = {}", state.position.y);
    assert!(state.position.x <= 9.5 + 1e-3, "x = {}", state.position.x);
    assert!(state.position.x > 9.4);

    assert!(events.iter().any(|e| matches!(
        e.kind,
        MovementEventKind::SlopeChanged { to, .. } if (to - 45.0).abs() < 0.1
    )));
}

#[test]
fn test_unmasked_layer_is_ignored() {
    let level = Level::from_ascii(RAMP, 1.0, CollisionMask::PLATFORM).unwrap();
    let spawn = level.spawn.unwrap();
    let config = SimConfig {
        controller: ControllerConfig {
            collision_mask: CollisionMask::GROUND,
            ..Default::default()
        },
        ..Default::default()
    };
    let sweeper = config.build_sweeper().unwrap();

    let (state, events) = replay(
        PlayerState::new(spawn),
        &level.world,
        &sweeper,
        &[InputFrame::new(); 60],
        &config,
    );

    assert!(state.position.y < spawn.y - 1.0);
    assert!(!state.grounded);
    assert!(events.is_empty());
}

#[test]
fn test_transcript_round_trip_on_level() {
    let level = ramp();
    let mut inputs = vec![InputFrame::with_movement(127, 0); 90];
    inputs.push(InputFrame::with_jump(127, 0));
    inputs.extend(vec![InputFrame::with_movement(-127, 0); 120]);

    let (transcript, state, _) = MovementTranscript::record(
        SimConfig::default(),
        level.spawn.unwrap(),
        &level.world,
        &inputs,
    )
    .unwrap();

    let json = transcript.to_json().unwrap();
    let decoded = MovementTranscript::from_json(&json).unwrap();
    let verified = decoded.verify(&level.world).unwrap();
    assert_eq!(verified.compute_hash(), state.compute_hash());
}
