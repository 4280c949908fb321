//! Spatial indices over unit positions.
//!
//! Every index answers the same radius query and returns matches in
//! ascending slot order, so swapping the index never changes simulation results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::SPATIAL_GRID_CELL_SIZE;
use skirmish_core::types::Vector2;

/// Radius queries over a fixed set of positions, addressed by slot.
pub trait UnitIndex {
    /// Replace the indexed positions.
    fn rebuild(&mut self, positions: &[Vector2]);

    /// Write the slots within `radius` of `center` into `out`, ascending.
    /// `out` is cleared first.
    fn query_into(&self, center: Vector2, radius: f64, out: &mut Vec<usize>);
}

/// Which index a world view builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IndexKind {
    /// Check every unit. Best for a few dozen units.
    #[default]
    Linear,
    /// Uniform grid hash with square cells of `cell_size`.
    Grid { cell_size: f64 },
}

impl IndexKind {
    /// Grid with the default cell size.
    pub fn grid() -> Self {
        IndexKind::Grid {
            cell_size: SPATIAL_GRID_CELL_SIZE,
        }
    }

    pub fn build(self, positions: &[Vector2]) -> Box<dyn UnitIndex> {
        let mut index: Box<dyn UnitIndex> = match self {
            IndexKind::Linear => Box::new(LinearScan::default()),
            IndexKind::Grid { cell_size } => Box::new(SpatialGrid::new(cell_size)),
        };
        index.rebuild(positions);
        index
    }
}

/// Brute-force index: O(n) per query.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    positions: Vec<Vector2>,
}

impl UnitIndex for LinearScan {
    fn rebuild(&mut self, positions: &[Vector2]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }

    fn query_into(&self, center: Vector2, radius: f64, out: &mut Vec<usize>) {
        out.clear();
        let radius_sq = radius * radius;
        out.extend(
            self.positions
                .iter()
                .enumerate()
                .filter(|(_, p)| p.distance_squared(center) <= radius_sq)
                .map(|(slot, _)| slot),
        );
    }
}

/// Uniform grid hash: a query touches only the occupied cells its circle overlaps.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    positions: Vec<Vector2>,
    cells: FxHashMap<(i64, i64), Vec<usize>>,
    /// Smallest and largest occupied cell keys, per axis.
    occupied: Option<((i64, i64), (i64, i64))>,
}

impl SpatialGrid {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size: cell_size.max(1.0),
            positions: Vec::new(),
            cells: FxHashMap::default(),
            occupied: None,
        }
    }

    fn cell_key(&self, p: Vector2) -> (i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
        )
    }
}

impl UnitIndex for SpatialGrid {
    fn rebuild(&mut self, positions: &[Vector2]) {
        self.cells.clear();
        self.occupied = None;
        self.positions.clear();
        self.positions.extend_from_slice(positions);
        for (slot, &p) in positions.iter().enumerate() {
            let key = self.cell_key(p);
            self.cells.entry(key).or_default().push(slot);
            self.occupied = Some(match self.occupied {
                None => (key, key),
                Some((lo, hi)) => (
                    (lo.0.min(key.0), lo.1.min(key.1)),
                    (hi.0.max(key.0), hi.1.max(key.1)),
                ),
            });
        }
    }

    fn query_into(&self, center: Vector2, radius: f64, out: &mut Vec<usize>) {
        out.clear();
        let Some((lo, hi)) = self.occupied else {
            return;
        };
        let radius_sq = radius * radius;
        let within = |slot: &usize| self.positions[*slot].distance_squared(center) <= radius_sq;

        let (min_x, min_y) = self.cell_key(center - Vector2::new(radius, radius));
        let (max_x, max_y) = self.cell_key(center + Vector2::new(radius, radius));
        let (min_x, min_y) = (min_x.max(lo.0), min_y.max(lo.1));
        let (max_x, max_y) = (max_x.min(hi.0), max_y.min(hi.1));
        if min_x > max_x || min_y > max_y {
            return;
        }

        let span = (max_x - min_x + 1).saturating_mul(max_y - min_y + 1);
        if span > self.cells.len() as i64 {
            // Fewer occupied cells than cells in range
            for (&(ix, iy), slots) in &self.cells {
                if (min_x..=max_x).contains(&ix) && (min_y..=max_y).contains(&iy) {
                    out.extend(slots.iter().copied().filter(within));
                }
            }
        } else {
            for ix in min_x..=max_x {
                for iy in min_y..=max_y {
                    if let Some(slots) = self.cells.get(&(ix, iy)) {
                        out.extend(slots.iter().copied().filter(within));
                    }
                }
            }
        }
        out.sort_unstable();
    }
}
