//! Kinematic Sweep Demo
//!
//! Runs a scripted character through an ASCII level, logs movement events,
//! then verifies the recorded transcript by replaying it.
//!
//! Usage: `sweep-demo [config.json]`

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kinematic_sweep::{
    VERSION, TICK_RATE,
    game::{
        events::MovementEventKind,
        input::InputFrame,
        tick::{replay, SimConfig},
        transcript::MovementTranscript,
        player::PlayerState,
    },
    physics::CollisionMask,
    world::Level,
};

/// Demo level: a floor, a 45° ramp up to a ledge, a wall and a ceiling.
const DEMO_LEVEL: &[&str] = &[
    "#..........................#",
    "#..........................#",
    "#.................######...#",
    "#..........................#",
    "#.............###..........#",
    "#............/###..........#",
    "#.P.........//###.......\\..#",
    "############################",
];

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Kinematic Sweep v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    config.validate().context("invalid simulation config")?;

    if config.tick_rate != TICK_RATE {
        warn!(tick_rate = config.tick_rate, "non-default tick rate, input script timing will differ");
    }
    info!("Tick Rate: {} Hz", config.tick_rate);

    demo_run(&config)
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Scripted input: idle, run right up the ramp, jump onto the ledge, run back.
fn demo_inputs(tick_rate: u32) -> Vec<InputFrame> {
    let seconds = |s: f32| (s * tick_rate as f32) as usize;

    let mut frames = Vec::new();
    frames.extend(vec![InputFrame::new(); seconds(0.5)]);
    frames.extend(vec![InputFrame::with_movement(127, 0); seconds(2.5)]);
    frames.push(InputFrame::with_jump(127, 0));
    frames.extend(vec![InputFrame::with_movement(127, 0); seconds(1.5)]);
    frames.extend(vec![InputFrame::with_movement(-127, 0); seconds(2.0)]);
    frames.push(InputFrame::with_jump(-64, 0));
    frames.extend(vec![InputFrame::new(); seconds(2.0)]);
    frames
}

/// Run the scripted session and verify it.
fn demo_run(config: &SimConfig) -> Result<()> {
    info!("=== Starting Demo Run ===");

    let level = Level::from_ascii(DEMO_LEVEL, 1.0, CollisionMask::GROUND)
        .context("building demo level")?;
    let spawn = level.spawn.context("demo level has no spawn marker")?;
    info!(
        "Level {}x{} tiles, {} segments, spawn ({:.2}, {:.2})",
        level.columns,
        level.rows,
        level.world.len(),
        spawn.x,
        spawn.y
    );

    let inputs = demo_inputs(config.tick_rate);
    info!("Running {} ticks...", inputs.len());

    let (transcript, final_state, events) =
        MovementTranscript::record(*config, spawn, &level.world, &inputs)
            .context("recording demo run")?;

    // Log important events
    for event in &events {
        match &event.kind {
            MovementEventKind::JumpStarted { height } => {
                info!("Tick {}: jump from y={:.3}", event.tick, height);
            }
            MovementEventKind::JumpApex { apex_height, error, airtime, .. } => {
                info!(
                    "Tick {}: apex y={:.3} (error {:+.4}, airtime {:.3}s)",
                    event.tick, apex_height, error, airtime
                );
            }
            MovementEventKind::Landed => info!("Tick {}: landed", event.tick),
            MovementEventKind::HitWall { side } => info!("Tick {}: hit wall {:?}", event.tick, side),
            MovementEventKind::HitCeiling => info!("Tick {}: hit ceiling", event.tick),
            MovementEventKind::SlopeChanged { from, to } => {
                info!("Tick {}: slope {:.1}° -> {:.1}°", event.tick, from, to);
            }
            MovementEventKind::LeftGround => {}
        }
    }

    // Print final results
    info!("=== Run Results ===");
    info!("Final position: {}", final_state.position);
    info!("Total events: {}", events.len());
    let hash = final_state.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));

    let bytes = transcript.to_bytes().context("encoding transcript")?;
    info!(
        "Transcript: {} bytes, {} input deltas, {} checkpoints",
        bytes.len(),
        transcript.inputs.deltas().len(),
        transcript.checkpoints.len()
    );

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let decoded = MovementTranscript::from_bytes(&bytes).context("decoding transcript")?;
    decoded.verify(&level.world).context("transcript verification")?;

    let sweeper = config.build_sweeper().context("building sweeper")?;
    let (replay_final, _) = replay(PlayerState::new(spawn), &level.world, &sweeper, &inputs, config);
    let replay_hash = replay_final.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("DETERMINISM FAILURE: hashes differ");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    Ok(())
}
