//! Core primitives.
//!
//! Plain value types shared by the physics, world and game layers.
//! Nothing in here allocates or logs.

pub mod scalar;
pub mod vec2;
pub mod bounds;
pub mod hash;

// Re-export core types
pub use scalar::{SKIN_WIDTH, DEFAULT_MAX_CLIMB_ANGLE, DEFAULT_RAY_COUNT, sign};
pub use vec2::Vec2;
pub use bounds::BoundingBox;
pub use hash::{StateHash, StateHasher, compute_state_hash};
