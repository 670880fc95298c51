// src/map/grid.rs

use crate::map::Tile;

/// Largest number of cells a grid may hold (4096 x 4096).
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// A rectangular, bounds-checked array of [`Tile`]s.
///
/// Writes outside `[0, width) x [0, height)` are dropped and reads outside
/// return [`Tile::Empty`], so generation code never has to guard its own
/// arithmetic against the edges of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates an all-`Empty` grid. Negative dimensions are treated as zero.
    ///
    /// Callers are expected to stay within [`MAX_GRID_CELLS`]; see
    /// [`Grid::try_new`] for a checked variant.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Grid {
            width,
            height,
            tiles: vec![Tile::Empty; Self::cell_count(width, height)],
        }
    }

    /// Like [`Grid::new`], but `None` when the grid would exceed [`MAX_GRID_CELLS`].
    pub fn try_new(width: i32, height: i32) -> Option<Self> {
        if Self::fits(width, height) {
            Some(Grid::new(width, height))
        } else {
            None
        }
    }

    /// True when a `width x height` grid stays within [`MAX_GRID_CELLS`].
    pub fn fits(width: i32, height: i32) -> bool {
        Self::cell_count(width.max(0), height.max(0)) <= MAX_GRID_CELLS
    }

    fn cell_count(width: i32, height: i32) -> usize {
        (width as usize).saturating_mul(height as usize)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.index(x, y).map_or(Tile::Empty, |i| self.tiles[i])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    /// Resets every tile to `Empty` without reallocating.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Empty);
    }

    /// Clears in place when the dimensions match, reallocates otherwise.
    pub fn reset(&mut self, width: i32, height: i32) {
        if width == self.width && height == self.height {
            self.clear();
        } else {
            *self = Grid::new(width, height);
        }
    }

    /// The tiles of one row, left to right. Empty slice for rows out of range.
    pub fn row(&self, y: i32) -> &[Tile] {
        if y < 0 || y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.tiles[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}
