// src/generator/corridor.rs

use rand::Rng;

use crate::generator::platform;
use crate::generator::CORRIDOR_WIDTH_RANGE;
use crate::map::{Edge, Grid, Path, Tile};

/// The wall columns of one row. Columns strictly between them are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub left: i32,
    pub right: i32,
}

impl RowSpan {
    /// True when `x` lies strictly inside the corridor.
    pub fn contains(&self, x: i32) -> bool {
        x > self.left && x < self.right
    }

    pub fn opening(&self) -> i32 {
        (self.right - self.left - 1).max(0)
    }
}

/// What the synthesizer produced besides the tiles themselves.
#[derive(Debug, Default)]
pub struct Synthesis {
    pub spans: Vec<RowSpan>,
    pub edges: Vec<Edge>,
    pub platforms: usize,
}

/// Computes the wall columns for a walker column and corridor half-width.
///
/// Both walls are clamped into the grid. A corridor that collapses
/// (`left >= right`) is widened to a single open tile on the walker column.
pub fn wall_span(walker_x: i32, half_width: i32, width: i32) -> RowSpan {
    let last = width - 1;
    let left = (walker_x - half_width).clamp(0, last);
    let right = (walker_x + half_width).clamp(0, last);
    if left < right - 1 {
        return RowSpan { left, right };
    }
    // Collapsed: open the walker's own column.
    let x = walker_x.clamp(1, (last - 1).max(1));
    RowSpan {
        left: (x - 1).max(0),
        right: (x + 1).min(last),
    }
}

/// Writes one row: walls Solid, corridor Empty, everything outside Solid.
pub fn fill_row(grid: &mut Grid, row: i32, span: RowSpan) {
    for x in 0..grid.width() {
        let tile = if span.contains(x) { Tile::Empty } else { Tile::Solid };
        grid.set(x, row, tile);
    }
}

/// Fills every row of `grid` around `path`, placing platforms and recording
/// boundary edges as it goes.
///
/// Rows the walker never reached hold the last column it recorded above
/// them, or the centre column if there is none.
pub fn fill<R: Rng + ?Sized>(grid: &mut Grid, path: &Path, rng: &mut R) -> Synthesis {
    let width = grid.width();
    let last = width - 1;
    let mut out = Synthesis {
        spans: Vec::with_capacity(grid.height() as usize),
        ..Synthesis::default()
    };

    for row in 0..grid.height() {
        let recorded = path.column_at(row);
        let walker_x = recorded
            .or_else(|| path.column_at_or_above(row))
            .unwrap_or(width / 2);

        // Resampled every row; adjacent rows are not correlated.
        let corridor_width = rng.random_range(CORRIDOR_WIDTH_RANGE);
        let span = wall_span(walker_x, corridor_width / 2, width);

        if span.left == 0 {
            out.edges.push(Edge { column: 0, row });
        }
        if span.right == last {
            out.edges.push(Edge { column: last, row });
        }

        fill_row(grid, row, span);

        if recorded.is_some() && platform::place(grid, row, walker_x, span.left, span.right, rng) {
            out.platforms += 1;
        }
        out.spans.push(span);
    }
    out
}
