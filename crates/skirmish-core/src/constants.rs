//! Simulation constants and tuning parameters.

use std::f64::consts::PI;

// --- Tick driver ---

/// Largest step the engine will integrate in one tick (seconds).
pub const MAX_TICK_DT: f64 = 0.5;

/// Upper bound for the player-controlled time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Teams ---

/// Team of the player-controlled units. Every other team is hostile to it.
pub const FRIENDLY_TEAM: u8 = 0;

// --- Unit defaults ---

/// Maximum (and starting) health.
pub const MAX_HEALTH: f64 = 100.0;

/// Body radius. Also the waypoint reach distance.
pub const UNIT_RADIUS: f64 = 5.0;

/// Weapon range.
pub const UNIT_RANGE: f64 = 150.0;

/// Movement speed (units per second).
pub const UNIT_SPEED: f64 = 25.0;

/// Turn rate (radians per second).
pub const UNIT_ANGULAR_VELOCITY: f64 = 2.0;

/// Base damage per shot.
pub const UNIT_DAMAGE: f64 = 10.0;

/// Base time between shots (seconds), before range scaling.
pub const UNIT_SHOT_COOLDOWN_SECS: f64 = 1.0;

/// Health regenerated per second.
pub const HEALTH_REGEN_PER_SEC: f64 = 1.0;

// --- Targeting ---

/// A held target is dropped and re-evaluated after this long (seconds).
pub const RETARGET_TIMEOUT_SECS: f64 = 2.0;

/// Cost multiplier for a candidate that is already targeting the evaluator.
pub const RECIPROCAL_TARGET_COST_FACTOR: f64 = 0.1;

/// Cost per radian of facing angle to a candidate.
pub const FACING_ANGLE_COST_WEIGHT: f64 = 30.0;

// --- Aiming ---

/// Below this remaining angle the heading snaps onto the aim point (radians).
pub const HEADING_SNAP_ANGLE: f64 = 0.03;

/// Maximum facing error that still allows a shot (radians).
pub const AIM_CONE: f64 = 0.02;

/// Chance that a shot deals critical damage.
pub const CRITICAL_HIT_CHANCE: f64 = 0.2;

/// Damage multiplier on a critical hit.
pub const CRITICAL_HIT_MULTIPLIER: f64 = 2.0;

/// Lower bound of the uniform damage multiplier (upper bound is 1.0).
pub const DAMAGE_VARIANCE_MIN: f64 = 0.5;

// --- Steering ---

/// Extra clearance on top of both radii before separation kicks in.
pub const SEPARATION_MARGIN: f64 = 5.0;

/// Relative weight of the separation term in the steering sum.
pub const SEPARATION_WEIGHT: f64 = 1.0;

/// Relative weight of the seek term in the steering sum.
pub const SEEK_WEIGHT: f64 = 3.0;

// --- Visibility ---

/// Half-angle of the cone in which a unit can spot enemies (radians).
pub const SPOT_CONE: f64 = 0.4 * PI;

/// Spotting distance for a unit that holds still.
pub const SPOT_DISTANCE_STATIONARY: f64 = 75.0;

/// Spotting distance for a unit following a path.
pub const SPOT_DISTANCE_MOVING: f64 = 120.0;

/// Spotting distance for a unit that fired recently.
pub const SPOT_DISTANCE_FIRING: f64 = 180.0;

/// How long a shot keeps the shooter conspicuous (seconds).
pub const RECENT_SHOT_WINDOW_SECS: f64 = 1.0;

// --- Orders ---

/// Minimum spacing between waypoints appended by a drag order.
pub const DRAG_WAYPOINT_SPACING: f64 = 20.0;

// --- Geometry ---

/// Segment-intersection denominators smaller than this count as parallel.
pub const PARALLEL_EPSILON: f64 = 1.0e-12;

// --- Spatial index ---

/// Default cell edge of the uniform grid index.
pub const SPATIAL_GRID_CELL_SIZE: f64 = 100.0;
