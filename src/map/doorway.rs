// src/map/doorway.rs

use crate::map::Coord;

/// A row whose wall was clamped onto the well's outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The boundary column, `0` or `width - 1`.
    pub column: i32,
    /// The row that produced the record.
    pub row: i32,
}

/// A vertical opening carved through a boundary wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doorway {
    pub column: i32,
    /// Bottom row of the opening. The opening extends upward from here.
    pub row: i32,
    pub height: i32,
    /// Tiles that were Solid before the carve and Empty after.
    pub tiles: Vec<Coord>,
}

impl Doorway {
    /// Top row of the opening.
    pub fn top(&self) -> i32 {
        self.row - self.height + 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.tiles.iter().any(|c| c.x == x && c.y == y)
    }
}
