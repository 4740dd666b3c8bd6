//! Fundamental geometric types for the grid world.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer grid coordinate (terminal column/row). Plain value type.
pub type GridPos = IVec2;

/// Squared Euclidean distance between two grid positions. All proximity
/// comparisons stay in squared integer form.
pub fn distance_sq(a: GridPos, b: GridPos) -> i32 {
    (b - a).length_squared()
}

/// Manhattan distance, used for troop attack ranges.
pub fn manhattan(a: GridPos, b: GridPos) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Whether `b` lies within the adjacency threshold of `a`, close enough for
/// a hostile to lock on and attack (Euclidean distance < 2).
pub fn within_attack_range(a: GridPos, b: GridPos) -> bool {
    distance_sq(a, b) < crate::constants::ATTACK_RANGE_SQ
}

/// Axis-aligned footprint of a structure on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Top-left corner.
    pub min: GridPos,
    /// Width and height in cells.
    pub size: IVec2,
}

impl BoundingBox {
    pub fn new(min: GridPos, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Strict overlap test: boxes that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let a_max = self.min + self.size;
        let b_max = other.min + other.size;
        !(a_max.x <= other.min.x
            || b_max.x <= self.min.x
            || a_max.y <= other.min.y
            || b_max.y <= self.min.y)
    }

    /// Whether the box covers the given cell.
    pub fn contains(&self, p: GridPos) -> bool {
        p.x >= self.min.x
            && p.x < self.min.x + self.size.x
            && p.y >= self.min.y
            && p.y < self.min.y + self.size.y
    }
}
