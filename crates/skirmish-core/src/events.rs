//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::TargetLossReason;
use crate::types::{UnitId, Vector2};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A unit fired at its target. Damage is already applied.
    ShotFired {
        shooter: UnitId,
        target: UnitId,
        damage: f64,
        critical: bool,
    },
    /// A unit locked onto a new target.
    TargetAcquired { unit: UnitId, target: UnitId },
    /// A unit dropped its target.
    TargetLost {
        unit: UnitId,
        target: UnitId,
        reason: TargetLossReason,
    },
    /// A unit ran out of health and was removed.
    UnitDestroyed {
        unit: UnitId,
        team: u8,
        position: Vector2,
    },
}
