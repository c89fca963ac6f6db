//! Movement Events
//!
//! Events generated during simulation for logging, replay and verification.
//! Collision events fire on the tick a contact begins, not while it is held.

use serde::{Serialize, Deserialize};

use crate::physics::collision::CollisionState;

/// Which side of the collider touched a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    /// Blocked while moving left
    Left,
    /// Blocked while moving right
    Right,
}

/// Event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MovementEventKind {
    /// Left the ground with jump velocity
    JumpStarted {
        /// Height at take-off
        height: f32,
    },

    /// Passed the top of a jump
    JumpApex {
        /// Height at take-off
        start_height: f32,
        /// Highest point reached
        apex_height: f32,
        /// Measured rise minus configured jump height
        error: f32,
        /// Seconds from take-off to apex
        airtime: f32,
    },

    /// Touched ground after being airborne
    Landed,

    /// Lost ground contact
    LeftGround,

    /// Started touching a ceiling
    HitCeiling,

    /// Started touching a wall
    HitWall {
        /// Side that made contact
        side: WallSide,
    },

    /// Slope under the footing ray changed
    SlopeChanged {
        /// Previous angle, degrees
        from: f32,
        /// New angle, degrees
        to: f32,
    },
}

/// A movement event with timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Event data
    pub kind: MovementEventKind,
}

impl MovementEvent {
    /// Create a new event.
    pub fn new(tick: u32, kind: MovementEventKind) -> Self {
        Self { tick, kind }
    }

    /// Create jump started event.
    pub fn jump_started(tick: u32, height: f32) -> Self {
        Self::new(tick, MovementEventKind::JumpStarted { height })
    }

    /// Create jump apex event.
    pub fn jump_apex(
        tick: u32,
        start_height: f32,
        apex_height: f32,
        error: f32,
        airtime: f32,
    ) -> Self {
        Self::new(
            tick,
            MovementEventKind::JumpApex {
                start_height,
                apex_height,
                error,
                airtime,
            },
        )
    }
}

/// Contact transitions between two consecutive collision records.
///
/// Output order is fixed: ground, ceiling, walls, slope.
pub fn contact_events(
    tick: u32,
    before: &CollisionState,
    after: &CollisionState,
) -> Vec<MovementEvent> {
    let mut events = Vec::new();

    if after.below && !before.below {
        events.push(MovementEvent::new(tick, MovementEventKind::Landed));
    } else if before.below && !after.below {
        events.push(MovementEvent::new(tick, MovementEventKind::LeftGround));
    }

    if after.above && !before.above {
        events.push(MovementEvent::new(tick, MovementEventKind::HitCeiling));
    }

    if after.left && !before.left {
        events.push(MovementEvent::new(
            tick,
            MovementEventKind::HitWall { side: WallSide::Left },
        ));
    }
    if after.right && !before.right {
        events.push(MovementEvent::new(
            tick,
            MovementEventKind::HitWall { side: WallSide::Right },
        ));
    }

    // Exact comparison, same as the sweeper's own slope change detection
    if after.slope_angle != before.slope_angle {
        events.push(MovementEvent::new(
            tick,
            MovementEventKind::SlopeChanged {
                from: before.slope_angle,
                to: after.slope_angle,
            },
        ));
    }

    events
}
