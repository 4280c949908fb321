//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How an obstacle interacts with movement and sight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Blocks both paths and line of sight (buildings, walls).
    #[default]
    Building,
    /// Blocks paths only (water, craters).
    Water,
}

impl ObstacleKind {
    pub fn blocks_line_of_sight(self) -> bool {
        matches!(self, ObstacleKind::Building)
    }
}

/// Why a unit let go of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLossReason {
    /// Target died or no longer exists.
    Dead,
    /// Target moved beyond weapon range.
    OutOfRange,
    /// Held for longer than the retarget timeout.
    Stale,
}

/// How a path order combines with the existing path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathMode {
    /// Discard the current path and head for the new point (click order).
    #[default]
    Replace,
    /// Extend the current path (drag order).
    Append,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
