//! Fog of war: who can see whom.

use skirmish_core::components::Team;
use skirmish_core::constants::*;
use skirmish_core::types::{UnitId, Vector2};

use crate::view::{UnitSnapshot, WorldView};

/// How conspicuous a unit is. Busier units are seen from further away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Stationary,
    Moving,
    Firing,
}

impl Activity {
    pub fn of(has_path: bool, last_shot_time: Option<f64>, now: f64) -> Self {
        let fired_recently = last_shot_time.is_some_and(|t| now - t < RECENT_SHOT_WINDOW_SECS);
        if fired_recently {
            Activity::Firing
        } else if has_path {
            Activity::Moving
        } else {
            Activity::Stationary
        }
    }

    /// Distance under which an enemy can spot a unit doing this.
    pub fn spot_distance(self) -> f64 {
        match self {
            Activity::Stationary => SPOT_DISTANCE_STATIONARY,
            Activity::Moving => SPOT_DISTANCE_MOVING,
            Activity::Firing => SPOT_DISTANCE_FIRING,
        }
    }
}

/// True if `observer` faces `position` within the spotting cone and sees it.
pub fn observes(observer: &UnitSnapshot, position: Vector2, view: &WorldView) -> bool {
    let to_position = position - observer.position;
    observer.direction.angle_between(to_position) < SPOT_CONE
        && view.line_of_sight(observer.position, position)
}

/// True if any enemy of `team` spots a unit at `position` doing `activity`.
pub fn is_spotted(
    id: UnitId,
    team: Team,
    position: Vector2,
    activity: Activity,
    view: &WorldView,
) -> bool {
    let spot_distance = activity.spot_distance();
    view.units_within(position, spot_distance)
        .into_iter()
        .filter(|enemy| enemy.id != id && enemy.team != team && enemy.health > 0.0)
        .filter(|enemy| enemy.position.distance(position) < spot_distance)
        .any(|enemy| observes(enemy, position, view))
}
