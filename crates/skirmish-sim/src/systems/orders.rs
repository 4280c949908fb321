//! Player orders and selection, applied at the tick boundary.

use hecs::{Entity, World};
use log::debug;

use skirmish_ai::is_valid_path_target;
use skirmish_core::components::{Body, Orders, Selection, Team};
use skirmish_core::constants::{DRAG_WAYPOINT_SPACING, FRIENDLY_TEAM};
use skirmish_core::enums::PathMode;
use skirmish_core::types::{UnitId, Vector2};
use skirmish_geometry::ObstacleField;

/// Send `units` toward `target`, keeping their positions relative to the
/// group's average. Unknown ids are skipped; an empty group does nothing.
pub fn issue_path(
    world: &mut World,
    obstacles: &ObstacleField,
    units: &[UnitId],
    target: Vector2,
    assault: bool,
    mode: PathMode,
) {
    let mut group: Vec<(UnitId, Entity, Vector2)> = world
        .query::<(&UnitId, &Body)>()
        .iter()
        .filter(|(_, (id, _))| units.contains(*id))
        .map(|(entity, (id, body))| (*id, entity, body.position))
        .collect();
    if group.is_empty() {
        return;
    }
    group.sort_unstable_by_key(|(id, ..)| *id);

    let sum = group
        .iter()
        .fold(Vector2::ZERO, |acc, (_, _, position)| acc + *position);
    let average = sum / group.len() as f64;

    for (id, entity, position) in group {
        let point = target + (position - average);
        let Ok(orders) = world.query_one_mut::<&mut Orders>(entity) else {
            continue;
        };
        match mode {
            PathMode::Replace => {
                if is_valid_path_target(position, orders, obstacles, point, true) {
                    orders.path.clear();
                    orders.path.push_back(point);
                    orders.assaulting = assault;
                } else {
                    debug!("{id}: path to ({:.1}, {:.1}) blocked", point.x, point.y);
                }
            }
            PathMode::Append => {
                let last = orders.path.back().copied().unwrap_or(position);
                if last.distance(point) <= DRAG_WAYPOINT_SPACING {
                    continue;
                }
                if is_valid_path_target(position, orders, obstacles, point, false) {
                    orders.path.push_back(point);
                } else {
                    debug!("{id}: waypoint ({:.1}, {:.1}) blocked", point.x, point.y);
                }
            }
        }
    }
}

/// Ids of every selected unit, ascending.
pub fn selected_units(world: &World) -> Vec<UnitId> {
    let mut ids: Vec<UnitId> = world
        .query::<(&UnitId, &Selection)>()
        .iter()
        .filter(|(_, (_, selection))| selection.selected)
        .map(|(_, (id, _))| *id)
        .collect();
    ids.sort_unstable();
    ids
}

pub fn clear_selection(world: &mut World) {
    for (_, selection) in world.query_mut::<&mut Selection>() {
        selection.selected = false;
    }
}

/// Replace the selection with the friendly units strictly inside the
/// rectangle spanned by `from` and `to`. When the rectangle holds none,
/// fall back to the unit under `to`.
pub fn select_in_rect(world: &mut World, from: Vector2, to: Vector2) {
    clear_selection(world);

    let (min_x, max_x) = (from.x.min(to.x), from.x.max(to.x));
    let (min_y, max_y) = (from.y.min(to.y), from.y.max(to.y));
    let mut any = false;
    for (_, (team, body, selection)) in world.query_mut::<(&Team, &Body, &mut Selection)>() {
        let p = body.position;
        let inside = p.x > min_x && p.x < max_x && p.y > min_y && p.y < max_y;
        if inside && team.0 == FRIENDLY_TEAM {
            selection.selected = true;
            any = true;
        }
    }

    if !any {
        select_at(world, to);
    }
}

/// Replace the selection with the friendly unit whose body contains `point`.
/// Overlapping bodies resolve to the lowest id.
pub fn select_at(world: &mut World, point: Vector2) {
    clear_selection(world);

    let hit = world
        .query::<(&UnitId, &Team, &Body)>()
        .iter()
        .filter(|(_, (_, team, body))| {
            team.0 == FRIENDLY_TEAM && body.position.distance(point) < body.radius
        })
        .min_by_key(|(_, (id, _, _))| **id)
        .map(|(entity, _)| entity);

    if let Some(entity) = hit {
        if let Ok(mut selection) = world.get::<&mut Selection>(entity) {
            selection.selected = true;
        }
    }
}
