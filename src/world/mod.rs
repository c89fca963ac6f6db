//! Collision Geometry
//!
//! A simple [`GeometryQuery`](crate::physics::GeometryQuery) provider: line
//! segments with layers, buildable from ASCII tile maps.

pub mod segment;
pub mod level;

pub use segment::Segment;
pub use level::{Level, LevelError, SegmentWorld};
