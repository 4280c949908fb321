//! The static obstacle set of a battlefield and the queries units run against it.

use skirmish_core::types::Vector2;

use crate::obstacle::Obstacle;

/// All obstacles of a battlefield. Immutable while a tick runs.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// True if no sight-blocking obstacle lies between `from` and `to`.
    pub fn line_of_sight(&self, from: Vector2, to: Vector2) -> bool {
        !self
            .obstacles
            .iter()
            .filter(|o| o.kind().blocks_line_of_sight())
            .any(|o| o.blocks_segment(from, to))
    }

    /// True if a straight move from `from` to `to` crosses no obstacle of any kind.
    pub fn path_clear(&self, from: Vector2, to: Vector2) -> bool {
        !self.obstacles.iter().any(|o| o.blocks_segment(from, to))
    }

    /// First obstacle whose outline contains `point`.
    pub fn containing(&self, point: Vector2) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.point_inside(point))
    }

    /// Push a body of `radius` at `position` out of every obstacle it sits in.
    /// Obstacles are visited once, in order.
    pub fn resolve_penetration(&self, position: Vector2, radius: f64) -> Vector2 {
        self.obstacles.iter().fold(position, |pos, obstacle| {
            obstacle.push_out(pos, radius).unwrap_or(pos)
        })
    }
}

impl FromIterator<Obstacle> for ObstacleField {
    fn from_iter<T: IntoIterator<Item = Obstacle>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
