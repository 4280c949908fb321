//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `WorldSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_ai::index::IndexKind;
use skirmish_ai::TickClock;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Body, Health, Orders, Targeting};
use skirmish_core::constants::{MAX_HEALTH, MAX_TICK_DT, MAX_TIME_SCALE};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::SimEvent;
use skirmish_core::state::WorldSnapshot;
use skirmish_core::types::{SimTime, UnitId, Vector2};
use skirmish_geometry::{Obstacle, ObstacleField};

use crate::error::ScenarioError;
use crate::scenario::{Scenario, UnitSpawn};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Longest step a single tick may take, in seconds.
    pub max_dt: f64,
    pub spatial_index: IndexKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            max_dt: MAX_TICK_DT,
            spatial_index: IndexKind::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    obstacles: ObstacleField,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    max_dt: f64,
    spatial_index: IndexKind,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an empty battlefield with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            obstacles: ObstacleField::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            max_dt: config.max_dt,
            spatial_index: config.spatial_index,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create an engine populated from `scenario`.
    pub fn from_scenario(config: SimConfig, scenario: &Scenario) -> Result<Self, ScenarioError> {
        let mut engine = Self::new(config);
        engine.load_scenario(scenario)?;
        Ok(engine)
    }

    /// Add every unit and obstacle of `scenario` to the battlefield.
    /// Nothing is added when any entry is invalid.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<(), ScenarioError> {
        scenario.validate()?;
        let field = scenario.build_obstacles()?;
        for obstacle in field.iter() {
            self.obstacles.push(obstacle.clone());
        }
        for spawn in &scenario.units {
            self.spawn_unit(spawn);
        }
        info!(
            "scenario loaded: {} units, {} obstacles",
            scenario.units.len(),
            scenario.obstacles.len()
        );
        Ok(())
    }

    /// Spawn a unit and return its id. Ids are never reused.
    pub fn spawn_unit(&mut self, spawn: &UnitSpawn) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        world_setup::spawn_unit(&mut self.world, id, spawn);
        id
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds of wall time and return the
    /// resulting snapshot.
    ///
    /// `dt` is clamped to the configured maximum, then scaled by the time
    /// scale. Paused or frozen ticks only apply commands.
    pub fn tick(&mut self, dt: f64) -> WorldSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let step = self.step_length(dt);
            if step > 0.0 {
                self.run_systems(step);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.obstacles,
            events,
        )
    }

    /// Whether a straight move for unit `id` to `point` is unobstructed.
    /// Measured from the unit's last waypoint unless `from_current_position`.
    pub fn is_valid_path_target(&self, id: UnitId, point: Vector2, from_current_position: bool) -> bool {
        let Some(entity) = world_setup::find_unit(&self.world, id) else {
            return false;
        };
        let Ok(mut query) = self.world.query_one::<(&Body, &Orders)>(entity) else {
            return false;
        };
        query.get().is_some_and(|(body, orders)| {
            skirmish_ai::is_valid_path_target(
                body.position,
                orders,
                &self.obstacles,
                point,
                from_current_position,
            )
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ids of the currently selected units.
    pub fn selected_units(&self) -> Vec<UnitId> {
        systems::orders::selected_units(&self.world)
    }

    /// Current health of a live unit.
    pub fn unit_health(&self, id: UnitId) -> Option<f64> {
        let entity = world_setup::find_unit(&self.world, id)?;
        let health = self.world.get::<&Health>(entity).ok()?;
        Some(health.current)
    }

    pub fn unit_body(&self, id: UnitId) -> Option<Body> {
        let entity = world_setup::find_unit(&self.world, id)?;
        let body = self.world.get::<&Body>(entity).ok()?;
        Some(*body)
    }

    pub fn unit_target(&self, id: UnitId) -> Option<UnitId> {
        let entity = world_setup::find_unit(&self.world, id)?;
        let targeting = self.world.get::<&Targeting>(entity).ok()?;
        targeting.target
    }

    /// Overwrite a unit's health, for scripted damage and tests. Clamped to the valid range.
    pub fn set_unit_health(&mut self, id: UnitId, value: f64) {
        if let Some(entity) = world_setup::find_unit(&self.world, id) {
            if let Ok(mut health) = self.world.get::<&mut Health>(entity) {
                health.current = value.clamp(0.0, MAX_HEALTH);
            }
        }
    }

    fn step_length(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        let clamped = if dt > self.max_dt {
            warn!("tick dt {dt:.3}s clamped to {:.3}s", self.max_dt);
            self.max_dt
        } else {
            dt
        };
        clamped * self.time_scale
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::IssuePath {
                units,
                target,
                assault,
                mode,
            } => {
                systems::orders::issue_path(
                    &mut self.world,
                    &self.obstacles,
                    &units,
                    target,
                    assault,
                    mode,
                );
            }
            PlayerCommand::OrderSelected {
                target,
                assault,
                mode,
            } => {
                let units = systems::orders::selected_units(&self.world);
                systems::orders::issue_path(
                    &mut self.world,
                    &self.obstacles,
                    &units,
                    target,
                    assault,
                    mode,
                );
            }
            PlayerCommand::SelectInRect { from, to } => {
                systems::orders::select_in_rect(&mut self.world, from, to);
            }
            PlayerCommand::SelectAt { point } => {
                systems::orders::select_at(&mut self.world, point);
            }
            PlayerCommand::ClearSelection => {
                systems::orders::clear_selection(&mut self.world);
            }
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order for a step of `dt` simulated seconds.
    fn run_systems(&mut self, dt: f64) {
        // 1. Purge units killed outside the tick (scripted damage)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 2. Clock
        self.time.advance(dt);
        let clock = TickClock {
            dt,
            now: self.time.elapsed_secs,
        };
        // 3. Unit pipeline, damage committed at the end
        systems::unit_ai::run(
            &mut self.world,
            &self.obstacles,
            self.spatial_index,
            clock,
            &mut self.rng,
            &mut self.events,
        );
        // 4. Remove this tick's casualties and every reference to them
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        trace!("tick {} done, dt={dt:.4}", self.time.tick);
    }
}
