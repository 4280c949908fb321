//! Unit AI for SKIRMISH.
//!
//! Implements the per-unit tick pipeline: target acquisition, combat,
//! steering, path following, and fog-of-war visibility.
//! No ECS dependency: operates on component borrows and a read-only
//! snapshot of the rest of the world.

pub mod combat;
pub mod index;
pub mod steering;
pub mod targeting;
pub mod unit;
pub mod view;
pub mod visibility;

pub use skirmish_core as core;
pub use unit::{is_valid_path_target, Shot, TickClock, UnitEffects, UnitMut};
pub use view::{UnitSnapshot, WorldView};
