//! Input Capture and Recording
//!
//! Per-tick input for the kinematics controller, plus a delta-compressed
//! recording used by replays and transcripts.

use serde::{Serialize, Deserialize};
use crate::core::vec2::Vec2;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Raw input state for a single tick.
///
/// NO tick field - tick is stored separately for compression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(C)]
pub struct InputFrame {
    /// Horizontal axis: -127 (left) to +127 (right)
    /// -128 = released / no input
    pub move_x: i8,

    /// Vertical axis: -127 (down) to +127 (up)
    /// -128 = released / no input
    pub move_y: i8,

    /// Action flags (packed bits):
    /// - Bit 0: Jump pressed this tick (edge, not held)
    /// - Bit 1-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Size in bytes
    pub const SIZE: usize = 3;

    /// Special value indicating no input (axis released)
    pub const NO_INPUT: i8 = -128;

    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x01;

    /// Create a new empty input frame.
    pub const fn new() -> Self {
        Self {
            move_x: Self::NO_INPUT,
            move_y: Self::NO_INPUT,
            flags: 0,
        }
    }

    /// Create input with axis values.
    pub const fn with_movement(move_x: i8, move_y: i8) -> Self {
        Self {
            move_x,
            move_y,
            flags: 0,
        }
    }

    /// Create a jump press with axis values.
    pub const fn with_jump(move_x: i8, move_y: i8) -> Self {
        Self {
            move_x,
            move_y,
            flags: Self::FLAG_JUMP,
        }
    }

    /// Axis as a vector in [-1, 1] on each component.
    #[inline]
    pub fn axis(&self) -> Vec2 {
        Vec2::new(axis_to_f32(self.move_x), axis_to_f32(self.move_y))
    }

    /// Check if jump was pressed this tick.
    #[inline]
    pub fn jump_pressed(&self) -> bool {
        self.flags & Self::FLAG_JUMP != 0
    }

    /// Check if this is an idle frame (no input).
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.move_x == Self::NO_INPUT
            && self.move_y == Self::NO_INPUT
            && self.flags == 0
    }

    /// Set jump flag.
    #[inline]
    pub fn set_jump(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_JUMP;
        } else {
            self.flags &= !Self::FLAG_JUMP;
        }
    }
}

/// Convert an i8 axis value to [-1, 1]. `NO_INPUT` maps to 0.
#[inline]
pub fn axis_to_f32(value: i8) -> f32 {
    if value == InputFrame::NO_INPUT {
        0.0
    } else {
        value as f32 / 127.0
    }
}

/// Input change at a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDelta {
    /// Tick when this input state began
    pub tick: u32,
    /// The new input state
    pub frame: InputFrame,
}

impl InputDelta {
    /// Create new delta entry.
    pub fn new(tick: u32, frame: InputFrame) -> Self {
        Self { tick, frame }
    }
}

// =============================================================================
// INPUT RECORDING
// =============================================================================

/// Input recording for one mover.
///
/// Only ticks where the input CHANGED are stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecording {
    /// Starting tick (usually 0)
    pub start_tick: u32,

    /// Last recorded tick
    pub end_tick: u32,

    /// Delta-compressed input data
    deltas: Vec<InputDelta>,

    /// Last recorded input (for delta comparison)
    #[serde(skip)]
    last_frame: Option<InputFrame>,
}

impl InputRecording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a whole run of frames starting at tick 0.
    pub fn from_frames(frames: &[InputFrame]) -> Self {
        let mut recording = Self::new();
        for (tick, frame) in frames.iter().enumerate() {
            recording.record(tick as u32, *frame);
        }
        recording
    }

    /// Record input for a tick.
    pub fn record(&mut self, tick: u32, frame: InputFrame) {
        self.end_tick = tick;

        if self.last_frame != Some(frame) {
            self.deltas.push(InputDelta::new(tick, frame));
            self.last_frame = Some(frame);
        }
    }

    /// Input in effect at a specific tick.
    pub fn get_input_at(&self, tick: u32) -> InputFrame {
        // Last delta at or before this tick
        let idx = self.deltas.partition_point(|d| d.tick <= tick);

        if idx == 0 {
            InputFrame::new()
        } else {
            self.deltas[idx - 1].frame
        }
    }

    /// All deltas.
    pub fn deltas(&self) -> &[InputDelta] {
        &self.deltas
    }

    /// Number of ticks covered, or 0 when nothing was recorded.
    pub fn tick_count(&self) -> u32 {
        if self.deltas.is_empty() {
            0
        } else {
            self.end_tick - self.start_tick + 1
        }
    }

    /// Expand back into one frame per tick.
    pub fn frames(&self) -> Vec<InputFrame> {
        (self.start_tick..self.start_tick + self.tick_count())
            .map(|tick| self.get_input_at(tick))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
