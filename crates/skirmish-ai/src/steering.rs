//! Heading control and the flocking force that moves units.

use skirmish_core::constants::*;
use skirmish_core::types::Vector2;

use crate::view::UnitSnapshot;

/// Turn `direction` toward `to_point` by at most `max_delta` radians.
///
/// Inside [`HEADING_SNAP_ANGLE`] the heading snaps straight onto the point,
/// which stops endless micro-corrections.
pub fn turn_towards(direction: &mut Vector2, to_point: Vector2, max_delta: f64) {
    if to_point.try_normalize().is_none() {
        return;
    }
    if to_point.angle_between(*direction) > HEADING_SNAP_ANGLE {
        let clockwise = direction.cross(to_point) > 0.0;
        direction.lerp_align_fixed(max_delta, clockwise, to_point);
    } else {
        direction.align_with(to_point);
    }
}

/// Push away from `neighbour` when the two bodies are closer than their radii
/// plus [`SEPARATION_MARGIN`].
pub fn separation_force(position: Vector2, radius: f64, neighbour: Option<&UnitSnapshot>) -> Vector2 {
    match neighbour {
        Some(other)
            if other.position.distance(position) < radius + other.radius + SEPARATION_MARGIN =>
        {
            (position - other.position).to_length(SEPARATION_WEIGHT)
        }
        _ => Vector2::ZERO,
    }
}

/// Pull toward the next waypoint.
pub fn seek_force(position: Vector2, waypoint: Option<Vector2>) -> Vector2 {
    waypoint.map_or(Vector2::ZERO, |point| (point - position).to_length(SEEK_WEIGHT))
}

/// Sum the steering terms and rescale the result to `speed`.
pub fn steering_velocity(separation: Vector2, seek: Vector2, speed: f64) -> Vector2 {
    let force = separation + seek;
    if force.length() > 0.0 {
        force.to_length(speed)
    } else {
        Vector2::ZERO
    }
}
