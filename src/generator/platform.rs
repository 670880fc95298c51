// src/generator/platform.rs

use rand::Rng;

use crate::generator::PLATFORM_INTERVALS;
use crate::map::{Grid, Tile};

/// Drops a one-tile platform on the walker's column when the row falls on
/// this row's randomly drawn cadence and the walker has clearance from both
/// walls. Returns whether a platform was placed.
pub fn place<R: Rng + ?Sized>(
    grid: &mut Grid,
    row: i32,
    walker_x: i32,
    left_wall: i32,
    right_wall: i32,
    rng: &mut R,
) -> bool {
    let interval = PLATFORM_INTERVALS[rng.random_range(0..PLATFORM_INTERVALS.len())];

    let clear_of_walls = left_wall + 1 < walker_x && walker_x < right_wall - 1;
    if !clear_of_walls || row % interval != 0 {
        return false;
    }
    if grid.get(walker_x, row) != Tile::Empty {
        return false;
    }
    grid.set(walker_x, row, Tile::Platform);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::corridor::{fill_row, RowSpan};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn open_row(width: i32, row: i32, span: RowSpan) -> Grid {
        let mut grid = Grid::new(width, row + 1);
        fill_row(&mut grid, row, span);
        grid
    }

    #[test]
    fn test_places_on_every_multiple_of_ten() {
        let mut rng = StdRng::seed_from_u64(1);
        for row in [0, 10, 20, 30] {
            let mut grid = open_row(20, row, RowSpan { left: 4, right: 16 });
            assert!(place(&mut grid, row, 10, 4, 16, &mut rng));
            assert_eq!(grid.get(10, row), Tile::Platform);
        }
    }

    #[test]
    fn test_never_places_off_cadence() {
        let mut rng = StdRng::seed_from_u64(1);
        for row in [1, 3, 7, 11, 13, 27] {
            let mut grid = open_row(20, row, RowSpan { left: 4, right: 16 });
            assert!(!place(&mut grid, row, 10, 4, 16, &mut rng));
        }
    }

    #[test]
    fn test_needs_clearance_from_walls() {
        let mut rng = StdRng::seed_from_u64(1);
        let span = RowSpan { left: 4, right: 16 };
        for x in [5, 15] {
            let mut grid = open_row(20, 0, span);
            assert!(!place(&mut grid, 0, x, span.left, span.right, &mut rng));
            assert_eq!(grid.get(x, 0), Tile::Empty);
        }
        let mut grid = open_row(20, 0, span);
        assert!(place(&mut grid, 0, 6, span.left, span.right, &mut rng));
    }

    #[test]
    fn test_row_five_is_hit_only_sometimes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = 0;
        for _ in 0..200 {
            let mut grid = open_row(20, 5, RowSpan { left: 4, right: 16 });
            if place(&mut grid, 5, 10, 4, 16, &mut rng) {
                hits += 1;
            }
        }
        assert!(hits > 0 && hits < 200);
    }
}
