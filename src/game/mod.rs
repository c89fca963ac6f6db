//! Simulation Layer
//!
//! Drives a jumping character with the collision sweeper. 100% deterministic
//! for deterministic geometry.
//!
//! ## Module Structure
//!
//! - `input`: Input frames and delta-compressed recordings
//! - `player`: Kinematics tuning, jump tracking, player state
//! - `tick`: Fixed-step simulation loop and replay
//! - `events`: Movement events for logging and replay
//! - `transcript`: Recorded sessions with hash checkpoints

pub mod input;
pub mod player;
pub mod tick;
pub mod events;
pub mod transcript;

// Re-export key types
pub use input::{InputFrame, InputDelta, InputRecording};
pub use player::{JumpTracker, KinematicsConfig, PlayerState};
pub use tick::{replay, tick, SimConfig, TickResult};
pub use events::{MovementEvent, MovementEventKind, WallSide};
pub use transcript::{MovementTranscript, StateCheckpoint, TranscriptError, CHECKPOINT_INTERVAL};
