//! Closed polygons and the segment-intersection routine behind path and sight checks.
//!
//! A polygon is a loop of nodes: the last node connects back to the first.
//! Points exactly on an edge may test either way.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::PARALLEL_EPSILON;
use skirmish_core::types::Vector2;

use crate::error::GeometryError;

/// Area below which a node loop is treated as degenerate.
const MIN_AREA: f64 = 1e-9;

/// An ordered loop of at least three nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    nodes: Vec<Vector2>,
}

/// The polygon edge nearest to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestEdge {
    /// Index of the edge's first node.
    pub index: usize,
    /// Index of the edge's second node (wraps to 0).
    pub next_index: usize,
    /// Distance from the query point to the edge.
    pub distance: f64,
}

impl Polygon {
    /// Build a polygon, rejecting loops that are too short, non-finite, or flat.
    pub fn new(nodes: Vec<Vector2>) -> Result<Self, GeometryError> {
        if nodes.len() < 3 {
            return Err(GeometryError::TooFewNodes { count: nodes.len() });
        }
        if let Some(index) = nodes.iter().position(|n| !n.is_finite()) {
            return Err(GeometryError::NonFiniteNode { index });
        }
        let polygon = Self { nodes };
        if polygon.signed_area().abs() < MIN_AREA {
            return Err(GeometryError::ZeroArea);
        }
        Ok(polygon)
    }

    /// Axis-aligned rectangle spanned by two opposite corners.
    pub fn rectangle(a: Vector2, b: Vector2) -> Result<Self, GeometryError> {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
        Self::new(vec![
            Vector2::new(min_x, min_y),
            Vector2::new(max_x, min_y),
            Vector2::new(max_x, max_y),
            Vector2::new(min_x, max_y),
        ])
    }

    /// Regular polygon with `sides` nodes on a circle of `radius` around `center`.
    pub fn regular(center: Vector2, radius: f64, sides: usize) -> Result<Self, GeometryError> {
        if sides < 3 {
            return Err(GeometryError::TooFewNodes { count: sides });
        }
        let step = std::f64::consts::TAU / sides as f64;
        let nodes = (0..sides)
            .map(|i| center + Vector2::X.rotated(step * i as f64) * radius)
            .collect();
        Self::new(nodes)
    }

    pub fn nodes(&self) -> &[Vector2] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Vector2> {
        self.nodes
    }

    /// Every edge as `(index, start, end)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Vector2, Vector2)> + '_ {
        let len = self.nodes.len();
        (0..len).map(move |i| (i, self.nodes[i], self.nodes[(i + 1) % len]))
    }

    /// Arithmetic mean of the nodes.
    pub fn center(&self) -> Vector2 {
        let sum = self
            .nodes
            .iter()
            .fold(Vector2::ZERO, |acc, &node| acc + node);
        sum / self.nodes.len() as f64
    }

    /// Shoelace area; the sign depends on winding.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(_, a, b)| a.cross(b)).sum::<f64>() * 0.5
    }

    /// Even-odd test: cast a ray toward +y and count the edges it crosses.
    ///
    /// An edge counts only when its endpoints lie on opposite sides of the
    /// ray's x, with the left endpoint inclusive. A ray through a node
    /// therefore crosses exactly one of the two edges meeting there.
    pub fn point_inside(&self, point: Vector2) -> bool {
        let crossings = self
            .edges()
            .filter(|&(_, a, b)| {
                if (a.x > point.x) == (b.x > point.x) {
                    return false;
                }
                let y = a.y + (point.x - a.x) * (b.y - a.y) / (b.x - a.x);
                y >= point.y
            })
            .count();
        crossings % 2 == 1
    }

    /// True if segment `start..end` crosses any edge.
    pub fn segment_intersects(&self, start: Vector2, end: Vector2) -> bool {
        self.edges()
            .any(|(_, a, b)| segments_intersect(a, b, start, end))
    }

    /// Edge nearest to `point`. Ties go to the first edge in node order.
    pub fn closest_vertex(&self, point: Vector2) -> ClosestEdge {
        let mut min_sq = f64::INFINITY;
        let mut min_index = 0;
        for (i, a, b) in self.edges() {
            let dist_sq = Vector2::segment_distance_squared(a, b, point);
            if dist_sq < min_sq {
                min_sq = dist_sq;
                min_index = i;
            }
        }
        ClosestEdge {
            index: min_index,
            next_index: (min_index + 1) % self.nodes.len(),
            distance: min_sq.sqrt(),
        }
    }

    /// Unit normal of the edge nearest to `point`.
    ///
    /// The edge direction `next - current` turned a quarter turn with
    /// [`Vector2::perpendicular`]; outward for loops wound clockwise on screen.
    pub fn closest_normal(&self, point: Vector2) -> Vector2 {
        let edge = self.closest_vertex(point);
        (self.nodes[edge.next_index] - self.nodes[edge.index])
            .perpendicular()
            .normalize_or_zero()
    }

    /// Distance from `point` to the outline.
    pub fn point_distance(&self, point: Vector2) -> f64 {
        self.closest_vertex(point).distance
    }

    /// Scale every node about the origin.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for node in &mut self.nodes {
            *node *= factor;
        }
        self
    }

    /// Scale every node about `pivot`.
    pub fn scale_about(&mut self, factor: f64, pivot: Vector2) -> &mut Self {
        for node in &mut self.nodes {
            *node = (*node - pivot) * factor + pivot;
        }
        self
    }

    pub fn scale_about_center(&mut self, factor: f64) -> &mut Self {
        let pivot = self.center();
        self.scale_about(factor, pivot)
    }

    /// Shift every node. Accepts a `Vector2` or an `(dx, dy)` pair.
    pub fn translate(&mut self, offset: impl Into<Vector2>) -> &mut Self {
        let offset = offset.into();
        for node in &mut self.nodes {
            *node += offset;
        }
        self
    }

    /// Rotate every node by `angle` radians about `pivot`.
    pub fn rotate(&mut self, angle: f64, pivot: Vector2) -> &mut Self {
        for node in &mut self.nodes {
            *node = node.rotated_about(angle, pivot);
        }
        self
    }

    pub fn rotate_about_center(&mut self, angle: f64) -> &mut Self {
        let pivot = self.center();
        self.rotate(angle, pivot)
    }
}

/// Parametric segment test: solve `start0 + t·s1 = start1 + s·s2` and require
/// both parameters in [0, 1]. Parallel and collinear segments never intersect.
pub fn segments_intersect(start0: Vector2, end0: Vector2, start1: Vector2, end1: Vector2) -> bool {
    let s1 = end0 - start0;
    let s2 = end1 - start1;
    let denom = -s2.x * s1.y + s1.x * s2.y;
    if denom.abs() < PARALLEL_EPSILON {
        return false;
    }
    let d = start0 - start1;
    let s = (-s1.y * d.x + s1.x * d.y) / denom;
    let t = (s2.x * d.y - s2.y * d.x) / denom;
    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
}
