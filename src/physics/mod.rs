//! Ray-Cast Character Physics
//!
//! The kinematic mover: probe origins, collision sweep, slope climbing.
//! Deterministic for a deterministic [`GeometryQuery`].
//!
//! ## Module Structure
//!
//! - `mask`: Collision layer filtering
//! - `raycast`: Ray / hit types and the geometry query trait
//! - `config`: Controller tuning and setup errors
//! - `origins`: Probe origins and ray spacing
//! - `collision`: Per-tick collision record
//! - `sweep`: Horizontal / vertical resolution and slope climbing

pub mod mask;
pub mod raycast;
pub mod config;
pub mod origins;
pub mod collision;
pub mod sweep;

// Re-export key types
pub use mask::CollisionMask;
pub use raycast::{GeometryQuery, OpenSpace, Ray, RayHit};
pub use config::{ConfigError, ControllerConfig};
pub use origins::{ProbeOrigins, RaySpacing};
pub use collision::CollisionState;
pub use sweep::{CollisionSweeper, SweepResult};
