//! Unit AI system: runs the per-unit pipeline for every live unit.
//!
//! Snapshot, compute, commit. All units read the same tick-start view, are
//! updated in id order, and damage is applied only after the last update.

use std::collections::HashMap;

use hecs::{Entity, World};
use log::trace;
use rand_chacha::ChaCha8Rng;

use skirmish_ai::index::IndexKind;
use skirmish_ai::{Shot, TickClock, UnitMut, UnitSnapshot, WorldView};
use skirmish_core::components::*;
use skirmish_core::events::SimEvent;
use skirmish_core::types::UnitId;
use skirmish_geometry::ObstacleField;

/// Run one tick of unit AI and commit the resulting damage.
pub fn run(
    world: &mut World,
    obstacles: &ObstacleField,
    index_kind: IndexKind,
    clock: TickClock,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    let view = WorldView::new(capture(world), obstacles, index_kind);

    let mut order: Vec<(UnitId, Entity)> = world
        .query::<&UnitId>()
        .iter()
        .map(|(entity, id)| (*id, entity))
        .collect();
    order.sort_unstable_by_key(|(id, _)| *id);

    let mut shots: Vec<(UnitId, Shot)> = Vec::new();
    for &(id, entity) in &order {
        let Ok((team, body, mobility, health, weapon, targeting, orders, perception)) = world
            .query_one_mut::<(
                &Team,
                &mut Body,
                &Mobility,
                &mut Health,
                &mut Weapon,
                &mut Targeting,
                &mut Orders,
                &mut Perception,
            )>(entity)
        else {
            continue;
        };

        let mut unit = UnitMut {
            id,
            team: *team,
            body,
            mobility,
            health,
            weapon,
            targeting,
            orders,
            perception,
        };
        let effects = unit.update(&view, clock, rng);

        if let Some((target, reason)) = effects.lost {
            events.push(SimEvent::TargetLost {
                unit: id,
                target,
                reason,
            });
        }
        if let Some(target) = effects.acquired {
            events.push(SimEvent::TargetAcquired { unit: id, target });
        }
        if let Some(shot) = effects.shot {
            shots.push((id, shot));
        }
    }

    let entities: HashMap<UnitId, Entity> = order.into_iter().collect();
    commit_shots(world, &entities, shots, events);
    trace!("unit ai: {} units at t={:.3}", entities.len(), clock.now);
}

/// Tick-start state of every unit.
fn capture(world: &World) -> Vec<UnitSnapshot> {
    world
        .query::<(&UnitId, &Team, &Body, &Health, &Targeting, &Perception)>()
        .iter()
        .map(|(_, (id, team, body, health, targeting, perception))| UnitSnapshot {
            id: *id,
            team: *team,
            position: body.position,
            direction: body.direction,
            radius: body.radius,
            health: health.current,
            target: targeting.target,
            spotted: perception.spotted,
        })
        .collect()
}

/// Apply damage in shooter id order. Health never drops below zero.
fn commit_shots(
    world: &mut World,
    entities: &HashMap<UnitId, Entity>,
    shots: Vec<(UnitId, Shot)>,
    events: &mut Vec<SimEvent>,
) {
    for (shooter, shot) in shots {
        let Some(&entity) = entities.get(&shot.target) else {
            continue;
        };
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.current = (health.current - shot.damage).max(0.0);
        }
        events.push(SimEvent::ShotFired {
            shooter,
            target: shot.target,
            damage: shot.damage,
            critical: shot.critical,
        });
    }
}
