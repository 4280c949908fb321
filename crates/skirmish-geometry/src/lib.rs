//! Obstacle geometry for SKIRMISH.
//!
//! Polygons, named obstacles, and the obstacle field used for
//! line-of-sight, path validity, and push-out queries.

pub use skirmish_core as core;

pub mod error;
pub mod field;
pub mod obstacle;
pub mod polygon;

// Re-export key types for convenience.
pub use error::GeometryError;
pub use field::ObstacleField;
pub use obstacle::Obstacle;
pub use polygon::{segments_intersect, ClosestEdge, Polygon};
