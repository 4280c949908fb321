//! World snapshot: the complete read-only state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, ObstacleKind};
use crate::events::SimEvent;
use crate::types::{SimTime, UnitId, Vector2};

/// Complete simulation state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Live units, ordered by id.
    pub units: Vec<UnitView>,
    pub obstacles: Vec<ObstacleView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A unit as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub team: u8,
    pub position: Vector2,
    pub direction: Vector2,
    pub radius: f64,
    pub health: f64,
    pub selected: bool,
    pub spotted: bool,
    pub last_spotted_time: Option<f64>,
    pub assaulting: bool,
    /// Remaining waypoints, next one first.
    pub path: Vec<Vector2>,
    pub target: Option<UnitId>,
    /// Position of the current target, for drawing the fire line.
    pub target_position: Option<Vector2>,
    /// For muzzle-flash timing.
    pub last_shot_time: Option<f64>,
}

/// An obstacle outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub name: String,
    pub kind: ObstacleKind,
    pub nodes: Vec<Vector2>,
}
