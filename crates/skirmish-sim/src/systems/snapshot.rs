//! Snapshot system: queries the ECS world and builds a complete `WorldSnapshot`.
//!
//! This system is read-only: it never modifies the world.

use std::collections::HashMap;

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::SimEvent;
use skirmish_core::state::*;
use skirmish_core::types::{SimTime, UnitId, Vector2};
use skirmish_geometry::ObstacleField;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    obstacles: &ObstacleField,
    events: Vec<SimEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        phase,
        units: build_units(world),
        obstacles: build_obstacles(obstacles),
        events,
    }
}

/// One `UnitView` per live unit, ordered by id.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut query = world.query::<(
        &UnitId,
        &Team,
        &Body,
        &Health,
        &Weapon,
        &Targeting,
        &Orders,
        &Perception,
        &Selection,
    )>();
    let rows: Vec<_> = query.iter().map(|(_, row)| row).collect();

    let positions: HashMap<UnitId, Vector2> = rows
        .iter()
        .filter(|(_, _, _, health, ..)| health.current > 0.0)
        .map(|(id, _, body, ..)| (**id, body.position))
        .collect();

    let mut units: Vec<UnitView> = rows
        .into_iter()
        .map(
            |(id, team, body, health, weapon, targeting, orders, perception, selection)| {
                let target_position = targeting
                    .target
                    .and_then(|target| positions.get(&target).copied());
                UnitView {
                    id: *id,
                    team: team.0,
                    position: body.position,
                    direction: body.direction,
                    radius: body.radius,
                    health: health.current,
                    selected: selection.selected,
                    spotted: perception.spotted,
                    last_spotted_time: perception.last_spotted_time,
                    assaulting: orders.assaulting,
                    path: orders.path.iter().copied().collect(),
                    target: targeting.target,
                    target_position,
                    last_shot_time: weapon.last_shot_time,
                }
            },
        )
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

fn build_obstacles(obstacles: &ObstacleField) -> Vec<ObstacleView> {
    obstacles
        .iter()
        .map(|obstacle| ObstacleView {
            name: obstacle.name().to_string(),
            kind: obstacle.kind(),
            nodes: obstacle.polygon().nodes().to_vec(),
        })
        .collect()
}
