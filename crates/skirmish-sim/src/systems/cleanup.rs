//! Cleanup system: removes dead units and every reference to them.

use std::collections::HashSet;

use hecs::{Entity, World};
use log::info;

use skirmish_core::components::{Body, Health, Targeting, Team};
use skirmish_core::enums::TargetLossReason;
use skirmish_core::events::SimEvent;
use skirmish_core::types::UnitId;

/// Despawn units at or below zero health, then clear targets that no longer
/// resolve to a live unit. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    let mut dead: Vec<(UnitId, Entity, Team, Body)> = world
        .query::<(&UnitId, &Team, &Body, &Health)>()
        .iter()
        .filter(|(_, (_, _, _, health))| health.current <= 0.0)
        .map(|(entity, (id, team, body, _))| (*id, entity, *team, *body))
        .collect();
    dead.sort_unstable_by_key(|(id, ..)| *id);

    for (id, entity, team, body) in dead {
        info!("{id} destroyed at ({:.1}, {:.1})", body.position.x, body.position.y);
        events.push(SimEvent::UnitDestroyed {
            unit: id,
            team: team.0,
            position: body.position,
        });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    clear_dangling_targets(world, events);
}

fn clear_dangling_targets(world: &mut World, events: &mut Vec<SimEvent>) {
    let live: HashSet<UnitId> = world
        .query::<(&UnitId, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.current > 0.0)
        .map(|(_, (id, _))| *id)
        .collect();

    let mut cleared: Vec<(UnitId, UnitId)> = Vec::new();
    for (_, (id, targeting)) in world.query_mut::<(&UnitId, &mut Targeting)>() {
        if let Some(target) = targeting.target {
            if !live.contains(&target) {
                targeting.target = None;
                cleared.push((*id, target));
            }
        }
    }
    cleared.sort_unstable();

    events.extend(cleared.into_iter().map(|(unit, target)| SimEvent::TargetLost {
        unit,
        target,
        reason: TargetLossReason::Dead,
    }));
}
