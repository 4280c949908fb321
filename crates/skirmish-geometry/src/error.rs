//! Geometry construction errors.

use thiserror::Error;

/// Reasons a node list cannot form a usable polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 nodes, got {count}")]
    TooFewNodes { count: usize },
    #[error("polygon node {index} has a non-finite coordinate")]
    NonFiniteNode { index: usize },
    #[error("polygon has zero area")]
    ZeroArea,
}
