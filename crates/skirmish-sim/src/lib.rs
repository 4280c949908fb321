//! Simulation engine for Skirmish.
//!
//! Owns the hecs ECS world, applies player commands at tick boundaries,
//! runs the unit pipeline for every live unit, and produces `WorldSnapshot`s
//! for the renderer.

pub mod engine;
pub mod error;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::ScenarioError;
pub use scenario::{ObstacleLayout, Scenario, UnitSpawn, UnitStats};
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
