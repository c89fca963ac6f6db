//! Movement Transcript Recording
//!
//! Records all data needed to deterministically re-run a movement session
//! against the same geometry and check it produced the same states.
//!
//! ```text
//!  config + spawn + inputs ──► replay ──► hash @ every CHECKPOINT_INTERVAL
//!                                     └─► final hash
//! ```

use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use crate::core::hash::StateHash;
use crate::core::vec2::Vec2;
use crate::game::events::MovementEvent;
use crate::game::input::{InputFrame, InputRecording};
use crate::game::player::PlayerState;
use crate::game::tick::{tick, SimConfig};
use crate::physics::config::ConfigError;
use crate::physics::raycast::GeometryQuery;

/// Current transcript version.
pub const TRANSCRIPT_VERSION: u8 = 1;

/// Checkpoint interval in ticks (every second at 60Hz).
pub const CHECKPOINT_INTERVAL: u32 = 60;

/// Errors raised while encoding, decoding or verifying a transcript.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// Serialization failed.
    #[error("transcript encoding failed: {0}")]
    Encode(String),

    /// Deserialization failed.
    #[error("transcript decoding failed: {0}")]
    Decode(String),

    /// Written by an incompatible version.
    #[error("transcript version {found} is not supported (expected {expected})")]
    VersionMismatch {
        /// Version this build writes
        expected: u8,
        /// Version found in the transcript
        found: u8,
    },

    /// Never finalized.
    #[error("transcript has no final state")]
    Incomplete,

    /// Replay diverged at a checkpoint.
    #[error("checkpoint mismatch at tick {tick}: expected {expected}, computed {computed}")]
    CheckpointMismatch {
        /// Tick of the failing checkpoint
        tick: u32,
        /// Recorded hash (hex)
        expected: String,
        /// Replayed hash (hex)
        computed: String,
    },

    /// Replay diverged after the last checkpoint.
    #[error("final state mismatch: expected {expected}, computed {computed}")]
    FinalStateMismatch {
        /// Recorded hash (hex)
        expected: String,
        /// Replayed hash (hex)
        computed: String,
    },

    /// Recorded config is unusable.
    #[error("invalid recorded config: {0}")]
    Config(#[from] ConfigError),
}

/// State checkpoint for partial verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCheckpoint {
    /// Ticks completed when the hash was taken.
    pub tick: u32,

    /// State hash at this tick.
    pub state_hash: StateHash,
}

/// Complete record of one movement session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementTranscript {
    /// Version for forward compatibility.
    pub version: u8,

    /// Simulation config the session ran with.
    pub config: SimConfig,

    /// Collider center at tick 0.
    pub spawn: Vec2,

    /// Delta-compressed inputs, one per tick.
    pub inputs: InputRecording,

    /// State hash checkpoints (every `CHECKPOINT_INTERVAL` ticks).
    pub checkpoints: Vec<StateCheckpoint>,

    /// Hash of the last state, set by `finalize`.
    pub final_hash: Option<StateHash>,
}

impl MovementTranscript {
    /// Start an empty transcript.
    pub fn new(config: SimConfig, spawn: Vec2) -> Self {
        Self {
            version: TRANSCRIPT_VERSION,
            config,
            spawn,
            inputs: InputRecording::new(),
            checkpoints: Vec::new(),
            final_hash: None,
        }
    }

    /// Run `inputs` from `spawn` and record everything needed to verify it.
    ///
    /// Returns the transcript together with the final state and all events.
    pub fn record<G>(
        config: SimConfig,
        spawn: Vec2,
        world: &G,
        inputs: &[InputFrame],
    ) -> Result<(Self, PlayerState, Vec<MovementEvent>), TranscriptError>
    where
        G: GeometryQuery + ?Sized,
    {
        let sweeper = config.build_sweeper()?;
        let mut transcript = Self::new(config, spawn);
        let mut state = PlayerState::new(spawn);
        let mut events = Vec::new();

        for input in inputs {
            transcript.inputs.record(state.tick, *input);
            let result = tick(&mut state, world, &sweeper, input, &config);
            events.extend(result.events);

            if state.tick % CHECKPOINT_INTERVAL == 0 {
                transcript.add_checkpoint(state.tick, state.compute_hash());
            }
        }

        transcript.finalize(&state);
        Ok((transcript, state, events))
    }

    /// Record a state checkpoint.
    pub fn add_checkpoint(&mut self, tick: u32, state_hash: StateHash) {
        self.checkpoints.push(StateCheckpoint { tick, state_hash });
    }

    /// Seal the transcript with the final state.
    pub fn finalize(&mut self, state: &PlayerState) {
        self.final_hash = Some(state.compute_hash());
    }

    /// Check if transcript is complete.
    pub fn is_complete(&self) -> bool {
        self.final_hash.is_some()
    }

    /// Number of recorded ticks.
    pub fn tick_count(&self) -> u32 {
        self.inputs.tick_count()
    }

    /// Re-run the session against `world` and compare every hash.
    ///
    /// Returns the replayed final state on success.
    pub fn verify<G>(&self, world: &G) -> Result<PlayerState, TranscriptError>
    where
        G: GeometryQuery + ?Sized,
    {
        if self.version != TRANSCRIPT_VERSION {
            return Err(TranscriptError::VersionMismatch {
                expected: TRANSCRIPT_VERSION,
                found: self.version,
            });
        }
        let expected_final = self.final_hash.ok_or(TranscriptError::Incomplete)?;

        let sweeper = self.config.build_sweeper()?;
        let mut state = PlayerState::new(self.spawn);
        let mut checkpoints = self.checkpoints.iter().peekable();

        for input in self.inputs.frames() {
            tick(&mut state, world, &sweeper, &input, &self.config);

            while let Some(checkpoint) = checkpoints.next_if(|c| c.tick == state.tick) {
                let computed = state.compute_hash();
                if computed != checkpoint.state_hash {
                    warn!(tick = checkpoint.tick, "transcript checkpoint mismatch");
                    return Err(TranscriptError::CheckpointMismatch {
                        tick: checkpoint.tick,
                        expected: hex::encode(checkpoint.state_hash),
                        computed: hex::encode(computed),
                    });
                }
                debug!(tick = checkpoint.tick, "checkpoint verified");
            }
        }

        let computed = state.compute_hash();
        if computed != expected_final {
            warn!(tick = state.tick, "transcript final state mismatch");
            return Err(TranscriptError::FinalStateMismatch {
                expected: hex::encode(expected_final),
                computed: hex::encode(computed),
            });
        }

        info!(
            ticks = state.tick,
            checkpoints = self.checkpoints.len(),
            "transcript verified"
        );
        Ok(state)
    }

    /// Serialize to bytes using bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TranscriptError> {
        bincode::serialize(self).map_err(|e| TranscriptError::Encode(e.to_string()))
    }

    /// Deserialize from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TranscriptError> {
        bincode::deserialize(data).map_err(|e| TranscriptError::Decode(e.to_string()))
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, TranscriptError> {
        serde_json::to_string(self).map_err(|e| TranscriptError::Encode(e.to_string()))
    }

    /// Deserialize from JSON string.
    pub fn from_json(s: &str) -> Result<Self, TranscriptError> {
        serde_json::from_str(s).map_err(|e| TranscriptError::Decode(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
