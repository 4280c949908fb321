//! Scenario definitions: the initial battlefield a fresh engine is built from.
//!
//! Scenarios are plain serde data so they can come from JSON files as well as
//! from the built-in layout.

use serde::{Deserialize, Serialize};

use skirmish_core::components::Team;
use skirmish_core::constants::*;
use skirmish_core::enums::ObstacleKind;
use skirmish_core::types::Vector2;
use skirmish_geometry::{Obstacle, ObstacleField, Polygon};

use crate::error::ScenarioError;

/// Per-unit tuning. Missing fields fall back to the standard infantry values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitStats {
    pub radius: f64,
    pub range: f64,
    pub speed: f64,
    pub angular_velocity: f64,
    pub damage: f64,
    pub cooldown_secs: f64,
    pub regen_per_sec: f64,
}

impl Default for UnitStats {
    fn default() -> Self {
        Self {
            radius: UNIT_RADIUS,
            range: UNIT_RANGE,
            speed: UNIT_SPEED,
            angular_velocity: UNIT_ANGULAR_VELOCITY,
            damage: UNIT_DAMAGE,
            cooldown_secs: UNIT_SHOT_COOLDOWN_SECS,
            regen_per_sec: HEALTH_REGEN_PER_SEC,
        }
    }
}

/// One unit placed at scenario start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpawn {
    pub position: Vector2,
    #[serde(default)]
    pub team: Team,
    /// Initial facing; +x when absent.
    #[serde(default)]
    pub heading: Option<Vector2>,
    #[serde(default)]
    pub stats: UnitStats,
}

impl UnitSpawn {
    pub fn new(position: impl Into<Vector2>, team: u8) -> Self {
        Self {
            position: position.into(),
            team: Team(team),
            heading: None,
            stats: UnitStats::default(),
        }
    }

    fn validate(&self, index: usize) -> Result<(), ScenarioError> {
        let invalid = |reason| ScenarioError::InvalidUnit { index, reason };
        if !self.position.is_finite() {
            return Err(invalid("position is not finite"));
        }
        if self.heading.is_some_and(|h| !h.is_finite()) {
            return Err(invalid("heading is not finite"));
        }
        let positive = |v: f64| v > 0.0;
        let non_negative = |v: f64| v >= 0.0;
        let stats = &self.stats;
        if !positive(stats.radius) {
            return Err(invalid("radius must be positive"));
        }
        if !non_negative(stats.speed) || !non_negative(stats.angular_velocity) {
            return Err(invalid("speed and angular velocity must not be negative"));
        }
        if !positive(stats.range) || !non_negative(stats.cooldown_secs) || !non_negative(stats.damage) {
            return Err(invalid("weapon stats out of range"));
        }
        if !non_negative(stats.regen_per_sec) {
            return Err(invalid("regeneration must not be negative"));
        }
        Ok(())
    }
}

/// A named obstacle outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleLayout {
    pub name: String,
    #[serde(default)]
    pub kind: ObstacleKind,
    pub nodes: Vec<Vector2>,
}

impl ObstacleLayout {
    fn build(&self) -> Result<Obstacle, ScenarioError> {
        Obstacle::new(self.name.clone(), self.kind, self.nodes.clone()).map_err(|source| {
            ScenarioError::Obstacle {
                name: self.name.clone(),
                source,
            }
        })
    }
}

/// Complete initial layout of a battlefield.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub units: Vec<UnitSpawn>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleLayout>,
}

impl Scenario {
    /// The default skirmish: a friendly squad near the origin, one hostile
    /// to the north-east, a building and a pond.
    pub fn skirmish() -> Self {
        let squad = [(0.0, 0.0), (14.0, 25.0), (16.0, 55.0), (85.0, 66.0), (45.0, 5.0)];
        let mut units: Vec<UnitSpawn> = squad
            .into_iter()
            .map(|p| UnitSpawn::new(p, FRIENDLY_TEAM))
            .collect();
        units.push(UnitSpawn::new((100.0, -100.0), 1));

        let building = Polygon::rectangle(Vector2::new(40.0, -70.0), Vector2::new(75.0, -35.0))
            .map(Polygon::into_nodes)
            .unwrap_or_default();
        let pond = Polygon::regular(Vector2::new(-70.0, 40.0), 25.0, 8)
            .map(Polygon::into_nodes)
            .unwrap_or_default();

        Self {
            units,
            obstacles: vec![
                ObstacleLayout {
                    name: "warehouse".into(),
                    kind: ObstacleKind::Building,
                    nodes: building,
                },
                ObstacleLayout {
                    name: "pond".into(),
                    kind: ObstacleKind::Water,
                    nodes: pond,
                },
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check every unit entry and every obstacle outline.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (index, unit) in self.units.iter().enumerate() {
            unit.validate(index)?;
        }
        self.build_obstacles().map(|_| ())
    }

    pub fn build_obstacles(&self) -> Result<ObstacleField, ScenarioError> {
        self.obstacles.iter().map(ObstacleLayout::build).collect()
    }
}
