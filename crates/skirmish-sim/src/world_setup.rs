//! Entity spawn factories for setting up the simulation world.

use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::constants::MAX_HEALTH;
use skirmish_core::types::{UnitId, Vector2};

use crate::scenario::UnitSpawn;

/// Spawn one unit with its full component bundle, at full health and idle.
pub fn spawn_unit(world: &mut World, id: UnitId, spawn: &UnitSpawn) -> Entity {
    let stats = spawn.stats;
    let direction = spawn
        .heading
        .and_then(Vector2::try_normalize)
        .unwrap_or(Vector2::X);

    world.spawn((
        id,
        spawn.team,
        Body {
            position: spawn.position,
            direction,
            radius: stats.radius,
        },
        Mobility {
            speed: stats.speed,
            angular_velocity: stats.angular_velocity,
        },
        Health {
            current: MAX_HEALTH,
            regen_per_sec: stats.regen_per_sec,
        },
        Weapon {
            range: stats.range,
            damage: stats.damage,
            cooldown_secs: stats.cooldown_secs,
            last_shot_time: None,
        },
        Targeting::default(),
        Orders::default(),
        Perception::default(),
        Selection::default(),
    ))
}

/// Find the entity carrying `id`.
pub fn find_unit(world: &World, id: UnitId) -> Option<Entity> {
    world
        .query::<&UnitId>()
        .iter()
        .find(|(_, unit_id)| **unit_id == id)
        .map(|(entity, _)| entity)
}
