//! Named obstacles with precomputed bounding circles.

use serde::{Deserialize, Serialize};

use skirmish_core::enums::ObstacleKind;
use skirmish_core::types::Vector2;

use crate::error::GeometryError;
use crate::polygon::Polygon;

/// A static polygonal obstacle.
///
/// `center` and `bounding_radius` are derived once at construction; the
/// polygon is not exposed mutably so they cannot go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    name: String,
    kind: ObstacleKind,
    polygon: Polygon,
    center: Vector2,
    bounding_radius: f64,
}

impl Obstacle {
    pub fn new(
        name: impl Into<String>,
        kind: ObstacleKind,
        nodes: Vec<Vector2>,
    ) -> Result<Self, GeometryError> {
        Ok(Self::from_polygon(name, kind, Polygon::new(nodes)?))
    }

    pub fn from_polygon(name: impl Into<String>, kind: ObstacleKind, polygon: Polygon) -> Self {
        let center = polygon.center();
        let bounding_radius = polygon
            .nodes()
            .iter()
            .map(|node| node.distance(center))
            .fold(0.0, f64::max);
        Self {
            name: name.into(),
            kind,
            polygon,
            center,
            bounding_radius,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    pub fn point_inside(&self, point: Vector2) -> bool {
        point.distance_squared(self.center) <= self.bounding_radius * self.bounding_radius
            && self.polygon.point_inside(point)
    }

    /// True if segment `start..end` crosses the outline.
    pub fn blocks_segment(&self, start: Vector2, end: Vector2) -> bool {
        let reach_sq = Vector2::segment_distance_squared(start, end, self.center);
        reach_sq <= self.bounding_radius * self.bounding_radius
            && self.polygon.segment_intersects(start, end)
    }

    /// Where a body at `position` ends up after being pushed out of this obstacle.
    ///
    /// Returns `None` when `position` is already outside. Otherwise the body
    /// moves away from the center in steps of `radius` until it clears the
    /// outline. A body exactly at the center is pushed along +x.
    pub fn push_out(&self, position: Vector2, radius: f64) -> Option<Vector2> {
        if !self.point_inside(position) {
            return None;
        }
        let away = (position - self.center)
            .try_normalize()
            .unwrap_or(Vector2::X);

        if radius > 0.0 {
            let max_steps = (self.bounding_radius / radius).ceil() as usize + 1;
            let mut pushed = position;
            for _ in 0..max_steps {
                pushed += away * radius;
                if !self.point_inside(pushed) {
                    return Some(pushed);
                }
            }
        }
        Some(self.center + away * (self.bounding_radius + radius.max(0.0)))
    }
}
