//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Unit logic lives in the AI crate and the sim systems, not here.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::{UnitId, Vector2};

/// Team membership. Units on different teams are hostile to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Physical body: where the unit is, where it faces, how large it is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub position: Vector2,
    /// Unit-length heading.
    pub direction: Vector2,
    pub radius: f64,
}

/// Movement capabilities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Units per second.
    pub speed: f64,
    /// Radians per second.
    pub angular_velocity: f64,
}

/// Hit points. The unit is removed once `current` drops to zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub regen_per_sec: f64,
}

/// Direct-fire weapon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub range: f64,
    /// Base damage before critical and variance rolls.
    pub damage: f64,
    /// Base cooldown (seconds), stretched by distance to the target.
    pub cooldown_secs: f64,
    /// Simulation time of the last shot, if any.
    pub last_shot_time: Option<f64>,
}

/// Current target. Resolved through the world each tick; never a direct reference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Targeting {
    pub target: Option<UnitId>,
    /// Simulation time the current target was acquired.
    pub acquired_at: f64,
}

/// Movement orders issued by the player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Orders {
    /// Waypoints, consumed from the front.
    pub path: VecDeque<Vector2>,
    /// Keep scanning for targets while following the path.
    pub assaulting: bool,
}

/// Fog-of-war state, recomputed every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Perception {
    /// Seen by at least one enemy during the last visibility pass.
    pub spotted: bool,
    /// Simulation time this unit was last seen, for the renderer's fade-out.
    pub last_spotted_time: Option<f64>,
}

/// Selection flag owned by the input layer. No effect on the simulation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Selection {
    pub selected: bool,
}
