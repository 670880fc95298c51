// src/map/tile.rs

/// State of a single cell in a well or room grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
    Platform,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        self == Tile::Solid
    }

    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }
}

/// A grid coordinate. `x` is the column, `y` is the row and grows with depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}
