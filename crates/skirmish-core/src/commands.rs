//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::PathMode;
use crate::types::{UnitId, Vector2};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Orders ---
    /// Send the given units toward `target`, keeping their relative formation.
    IssuePath {
        units: Vec<UnitId>,
        target: Vector2,
        assault: bool,
        mode: PathMode,
    },
    /// Same as `IssuePath` for every currently selected unit.
    OrderSelected {
        target: Vector2,
        assault: bool,
        mode: PathMode,
    },

    // --- Selection ---
    /// Select friendly units strictly inside the rectangle spanned by two corners.
    /// Falls back to the friendly unit under `to` when the rectangle is empty.
    SelectInRect { from: Vector2, to: Vector2 },
    /// Select the friendly unit whose body contains `point`.
    SelectAt { point: Vector2 },
    /// Deselect everything.
    ClearSelection,

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
