//! Read-only snapshot of the world taken at tick start.
//!
//! Every unit reads other units only through this view, so the result of a
//! tick does not depend on the order in which units are updated.

use std::collections::HashMap;

use skirmish_core::components::Team;
use skirmish_core::types::{UnitId, Vector2};
use skirmish_geometry::ObstacleField;

use crate::index::{IndexKind, UnitIndex};

/// What other units may know about a unit during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub team: Team,
    pub position: Vector2,
    pub direction: Vector2,
    pub radius: f64,
    pub health: f64,
    pub target: Option<UnitId>,
    pub spotted: bool,
}

/// Tick-start state of every unit plus the static obstacles.
pub struct WorldView<'a> {
    /// Sorted by id; slot order is the tie-break order everywhere.
    units: Vec<UnitSnapshot>,
    slots: HashMap<UnitId, usize>,
    /// Slots of the units targeting each unit.
    attackers: HashMap<UnitId, Vec<usize>>,
    index: Box<dyn UnitIndex>,
    max_radius: f64,
    obstacles: &'a ObstacleField,
}

impl<'a> WorldView<'a> {
    pub fn new(
        mut units: Vec<UnitSnapshot>,
        obstacles: &'a ObstacleField,
        index_kind: IndexKind,
    ) -> Self {
        units.sort_by_key(|u| u.id);

        let slots = units
            .iter()
            .enumerate()
            .map(|(slot, u)| (u.id, slot))
            .collect();

        let mut attackers: HashMap<UnitId, Vec<usize>> = HashMap::new();
        for (slot, unit) in units.iter().enumerate() {
            if let Some(target) = unit.target {
                attackers.entry(target).or_default().push(slot);
            }
        }

        let positions: Vec<Vector2> = units.iter().map(|u| u.position).collect();
        let max_radius = units.iter().map(|u| u.radius).fold(0.0, f64::max);

        Self {
            index: index_kind.build(&positions),
            units,
            slots,
            attackers,
            max_radius,
            obstacles,
        }
    }

    /// All units, ordered by id.
    pub fn units(&self) -> &[UnitSnapshot] {
        &self.units
    }

    /// Look up a live unit. Units at or below zero health resolve to `None`.
    pub fn get(&self, id: UnitId) -> Option<&UnitSnapshot> {
        self.slots
            .get(&id)
            .map(|&slot| &self.units[slot])
            .filter(|u| u.health > 0.0)
    }

    pub fn obstacles(&self) -> &ObstacleField {
        self.obstacles
    }

    /// Largest body radius among all units.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn line_of_sight(&self, from: Vector2, to: Vector2) -> bool {
        self.obstacles.line_of_sight(from, to)
    }

    /// Units within `radius` of `center`, ordered by id.
    pub fn units_within(&self, center: Vector2, radius: f64) -> Vec<&UnitSnapshot> {
        let mut slots = Vec::new();
        self.index.query_into(center, radius, &mut slots);
        slots.into_iter().map(|slot| &self.units[slot]).collect()
    }

    /// Units whose target is `id`, ordered by id.
    pub fn attackers_of(&self, id: UnitId) -> impl Iterator<Item = &UnitSnapshot> {
        self.attackers
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&slot| &self.units[slot])
    }

    /// Closest unit other than `id` within `max_distance` of `position`.
    /// Ties go to the lower id.
    pub fn nearest_other(
        &self,
        id: UnitId,
        position: Vector2,
        max_distance: f64,
    ) -> Option<&UnitSnapshot> {
        let mut best: Option<(&UnitSnapshot, f64)> = None;
        for unit in self.units_within(position, max_distance) {
            if unit.id == id {
                continue;
            }
            let dist_sq = unit.position.distance_squared(position);
            if best.map_or(true, |(_, d)| dist_sq < d) {
                best = Some((unit, dist_sq));
            }
        }
        best.map(|(unit, _)| unit)
    }
}
