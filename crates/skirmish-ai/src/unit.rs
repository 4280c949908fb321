//! The per-tick update of a single unit.
//!
//! `UnitMut` borrows one unit's components and runs the fixed pipeline:
//! targeting, heading, waypoint reaching, movement, obstacle push-out,
//! regeneration, and visibility. Other units are read from the tick-start
//! `WorldView`; damage to them is returned as a [`Shot`] for the caller to
//! commit once every unit has been updated.

use log::debug;
use rand::Rng;

use skirmish_core::components::*;
use skirmish_core::constants::{MAX_HEALTH, SEPARATION_MARGIN};
use skirmish_core::enums::TargetLossReason;
use skirmish_core::types::{UnitId, Vector2};
use skirmish_geometry::ObstacleField;

use crate::combat::{cooldown_elapsed, is_aimed, roll_damage, shot_cooldown};
use crate::steering::{seek_force, separation_force, steering_velocity, turn_towards};
use crate::targeting::{select_target, target_loss, Seeker};
use crate::view::{UnitSnapshot, WorldView};
use crate::visibility::{is_spotted, Activity};

/// Timing of the current tick.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    /// Step length in seconds.
    pub dt: f64,
    /// Simulation time at the end of this step.
    pub now: f64,
}

/// Damage dealt by one unit this tick, not yet applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub target: UnitId,
    pub damage: f64,
    pub critical: bool,
}

/// Everything a unit's update wants the world to know about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitEffects {
    pub shot: Option<Shot>,
    pub acquired: Option<UnitId>,
    pub lost: Option<(UnitId, TargetLossReason)>,
}

/// Mutable access to one unit's components.
pub struct UnitMut<'a> {
    pub id: UnitId,
    pub team: Team,
    pub body: &'a mut Body,
    pub mobility: &'a Mobility,
    pub health: &'a mut Health,
    pub weapon: &'a mut Weapon,
    pub targeting: &'a mut Targeting,
    pub orders: &'a mut Orders,
    pub perception: &'a mut Perception,
}

impl UnitMut<'_> {
    /// Run the full pipeline for one tick.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        view: &WorldView,
        clock: TickClock,
        rng: &mut R,
    ) -> UnitEffects {
        let mut effects = UnitEffects::default();
        self.update_target(view, clock.now, rng, &mut effects);
        self.update_direction(view, clock.dt);
        self.handle_path_point_reaching();
        self.flock_move(view, clock.dt);
        self.avoid_obstacles(view.obstacles());
        self.restore_health(clock.dt);
        self.update_visibility(view, clock.now);
        effects
    }

    fn seeker(&self) -> Seeker {
        Seeker {
            id: self.id,
            team: self.team,
            position: self.body.position,
            direction: self.body.direction,
            range: self.weapon.range,
        }
    }

    fn resolved_target<'v>(&self, view: &'v WorldView) -> Option<&'v UnitSnapshot> {
        self.targeting.target.and_then(|id| view.get(id))
    }

    fn update_target<R: Rng + ?Sized>(
        &mut self,
        view: &WorldView,
        now: f64,
        rng: &mut R,
        effects: &mut UnitEffects,
    ) {
        if let Some(target_id) = self.targeting.target {
            let target = self.resolved_target(view);
            if let Some(reason) = target_loss(&self.seeker(), target, self.targeting.acquired_at, now)
            {
                debug!("{} dropped {target_id}: {reason:?}", self.id);
                self.targeting.target = None;
                effects.lost = Some((target_id, reason));
                self.request_target(view, now, effects);
            }
        } else if self.orders.path.is_empty() || self.orders.assaulting {
            self.request_target(view, now, effects);
        }

        if let Some(target) = self.resolved_target(view) {
            if let Some(shot) = self.request_shoot_target(target, now, rng) {
                effects.shot = Some(shot);
            }
        }
    }

    fn request_target(&mut self, view: &WorldView, now: f64, effects: &mut UnitEffects) {
        if let Some(target) = select_target(&self.seeker(), view) {
            debug!("{} acquired {target}", self.id);
            self.targeting.target = Some(target);
            self.targeting.acquired_at = now;
            effects.acquired = Some(target);
        }
    }

    fn request_shoot_target<R: Rng + ?Sized>(
        &mut self,
        target: &UnitSnapshot,
        now: f64,
        rng: &mut R,
    ) -> Option<Shot> {
        let to_target = target.position - self.body.position;
        if !is_aimed(self.body.direction, to_target) {
            return None;
        }
        let cooldown = shot_cooldown(self.weapon.cooldown_secs, to_target.length(), self.weapon.range);
        if !cooldown_elapsed(self.weapon.last_shot_time, cooldown, now) {
            return None;
        }

        let roll = roll_damage(self.weapon.damage, rng);
        self.weapon.last_shot_time = Some(now);
        Some(Shot {
            target: target.id,
            damage: roll.amount,
            critical: roll.critical,
        })
    }

    fn update_direction(&mut self, view: &WorldView, dt: f64) {
        let aim_point = match self.resolved_target(view) {
            Some(target) => Some(target.position),
            None => self.orders.path.front().copied(),
        };
        if let Some(point) = aim_point {
            let max_delta = self.mobility.angular_velocity * dt;
            turn_towards(&mut self.body.direction, point - self.body.position, max_delta);
        }
    }

    fn handle_path_point_reaching(&mut self) {
        let reached = self
            .orders
            .path
            .front()
            .is_some_and(|&point| self.body.position.distance(point) < self.body.radius);
        if reached {
            self.orders.path.pop_front();
        }
    }

    fn flock_move(&mut self, view: &WorldView, dt: f64) {
        let position = self.body.position;
        let search = self.body.radius + view.max_radius() + SEPARATION_MARGIN;
        let neighbour = view.nearest_other(self.id, position, search);

        let separation = separation_force(position, self.body.radius, neighbour);
        let seek = if self.resolved_target(view).is_some() {
            Vector2::ZERO
        } else {
            seek_force(position, self.orders.path.front().copied())
        };

        let velocity = steering_velocity(separation, seek, self.mobility.speed);
        self.body.position += velocity * dt;
    }

    fn avoid_obstacles(&mut self, obstacles: &ObstacleField) {
        self.body.position = obstacles.resolve_penetration(self.body.position, self.body.radius);
    }

    fn restore_health(&mut self, dt: f64) {
        self.health.current = (self.health.current + self.health.regen_per_sec * dt).min(MAX_HEALTH);
    }

    fn update_visibility(&mut self, view: &WorldView, now: f64) {
        let activity = Activity::of(!self.orders.path.is_empty(), self.weapon.last_shot_time, now);
        self.perception.spotted = is_spotted(self.id, self.team, self.body.position, activity, view);
        if self.perception.spotted {
            self.perception.last_spotted_time = Some(now);
        }
    }
}

/// Whether a waypoint at `point` can be reached in a straight line.
///
/// The segment starts at the last queued waypoint, or at `position` when the
/// path is empty or `from_current_position` is set. Both obstacle kinds block.
pub fn is_valid_path_target(
    position: Vector2,
    orders: &Orders,
    obstacles: &ObstacleField,
    point: Vector2,
    from_current_position: bool,
) -> bool {
    let start = if from_current_position {
        position
    } else {
        orders.path.back().copied().unwrap_or(position)
    };
    obstacles.path_clear(start, point)
}
