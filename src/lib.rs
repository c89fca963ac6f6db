//! # Kinematic Sweep
//!
//! Ray-cast kinematic character controller for 2D platformers, with a
//! deterministic fixed-step simulation around it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      KINEMATIC SWEEP                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── scalar.rs   - Constants, sign, smooth_damp              │
//! │  ├── vec2.rs     - 2D float vector                           │
//! │  ├── bounds.rs   - Axis-aligned collider box                 │
//! │  └── hash.rs     - State hashing for verification            │
//! │                                                              │
//! │  physics/        - Ray-cast controller                       │
//! │  ├── mask.rs     - Collision layers                          │
//! │  ├── raycast.rs  - Ray, hit, GeometryQuery                   │
//! │  ├── config.rs   - Controller tuning and errors              │
//! │  ├── origins.rs  - Probe origins and ray spacing             │
//! │  ├── collision.rs- Per-tick collision record                 │
//! │  └── sweep.rs    - move_by, slope climbing                   │
//! │                                                              │
//! │  world/          - Geometry provider                         │
//! │  ├── segment.rs  - Ray / segment intersection                │
//! │  └── level.rs    - Segment world, ASCII tile maps            │
//! │                                                              │
//! │  game/           - Simulation (deterministic)                │
//! │  ├── input.rs    - Input frames and recordings               │
//! │  ├── player.rs   - Kinematics and player state               │
//! │  ├── tick.rs     - Fixed-step loop and replay                │
//! │  ├── events.rs   - Movement events                           │
//! │  └── transcript.rs - Verifiable session records              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The controller holds no hidden state: every call to
//! [`CollisionSweeper::move_by`] is a pure function of the geometry, the
//! collider box, the desired displacement and the previous
//! [`CollisionState`]. Given identical geometry and inputs, a replay produces
//! bit-identical states on the same platform, which transcripts check with
//! SHA-256 state hashes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod physics;
pub mod world;
pub mod game;

// Re-export commonly used types
pub use core::vec2::Vec2;
pub use core::bounds::BoundingBox;
pub use physics::{
    CollisionMask, CollisionState, CollisionSweeper, ControllerConfig, GeometryQuery, Ray,
    RayHit, SweepResult,
};
pub use world::{Level, SegmentWorld};
pub use game::{InputFrame, KinematicsConfig, MovementTranscript, PlayerState, SimConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;
