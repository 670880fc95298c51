// src/generator/doorway.rs

use log::debug;
use rand::Rng;

use crate::generator::room;
use crate::generator::{DOORWAY_INTERVAL, DOOR_HEIGHT_RANGE};
use crate::map::{Coord, Doorway, Edge, Grid, Room, RoomAnchor, RoomSide, Tile};

#[derive(Debug, Default)]
pub struct Carving {
    pub doorways: Vec<Doorway>,
    pub rooms: Vec<Room>,
}

/// The column just inside a boundary wall.
pub fn inner_column(edge_column: i32) -> i32 {
    if edge_column == 0 {
        edge_column + 1
    } else {
        edge_column - 1
    }
}

/// Rows on which carving is attempted: every interval, with the whole
/// three-row window beside the wall inside the grid.
pub fn carve_rows(height: i32) -> impl Iterator<Item = i32> {
    (DOORWAY_INTERVAL..)
        .step_by(DOORWAY_INTERVAL as usize)
        .take_while(move |row| row + 1 < height)
}

/// A doorway fits at `(edge_column, row)` when the wall is still standing
/// there and the corridor side of it is open on the row and both neighbours.
pub fn can_carve(grid: &Grid, edge_column: i32, row: i32) -> bool {
    let inner = inner_column(edge_column);
    grid.get(edge_column, row) == Tile::Solid
        && (row - 1..=row + 1).all(|y| grid.get(inner, y) == Tile::Empty)
}

/// Opens `door_height` tiles of `column` from `row` upward.
pub fn carve(grid: &mut Grid, column: i32, row: i32, door_height: i32) -> Doorway {
    let mut tiles = Vec::with_capacity(door_height.max(0) as usize);
    for y in (row - door_height + 1..=row).rev() {
        if grid.get(column, y) == Tile::Solid {
            grid.set(column, y, Tile::Empty);
            tiles.push(Coord::new(column, y));
        }
    }
    Doorway {
        column,
        row,
        height: door_height,
        tiles,
    }
}

/// Walks the carve rows and tries every recorded edge on each one. Each
/// successful carve gets a room `room_width` wide.
pub fn carve_all<R: Rng + ?Sized>(
    grid: &mut Grid,
    edges: &[Edge],
    room_width: i32,
    rng: &mut R,
) -> Carving {
    let mut out = Carving::default();

    for row in carve_rows(grid.height()) {
        for edge in edges {
            if !can_carve(grid, edge.column, row) {
                continue;
            }
            let door_height = rng.random_range(DOOR_HEIGHT_RANGE);
            let doorway = carve(grid, edge.column, row, door_height);
            debug!(
                "Carved doorway at column {} row {} ({} tiles)",
                edge.column,
                row,
                doorway.tiles.len()
            );

            let anchor = RoomAnchor {
                column: edge.column,
                row,
                side: RoomSide::from_boundary(edge.column),
            };
            out.rooms.push(room::build(room_width, door_height, anchor));
            out.doorways.push(doorway);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::corridor::{fill_row, RowSpan};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A 20 x 60 well whose corridor hugs the left wall everywhere.
    fn left_hugging_well() -> Grid {
        let mut grid = Grid::new(20, 60);
        for y in 0..60 {
            fill_row(&mut grid, y, RowSpan { left: 0, right: 8 });
        }
        grid
    }

    #[test]
    fn test_inner_column_is_inside_the_wall() {
        assert_eq!(inner_column(0), 1);
        assert_eq!(inner_column(19), 18);
    }

    #[test]
    fn test_carve_rows_skip_zero_and_the_bottom() {
        assert_eq!(carve_rows(100).collect::<Vec<_>>(), vec![25, 50, 75]);
        assert_eq!(carve_rows(77).collect::<Vec<_>>(), vec![25, 50, 75]);
        assert_eq!(carve_rows(76).collect::<Vec<_>>(), vec![25, 50]);
        assert_eq!(carve_rows(20).count(), 0);
    }

    #[test]
    fn test_doorway_at_row_25_height_4() {
        let mut grid = left_hugging_well();
        for y in 22..=25 {
            assert_eq!(grid.get(0, y), Tile::Solid);
        }
        assert!(can_carve(&grid, 0, 25));

        let doorway = carve(&mut grid, 0, 25, 4);
        for y in 22..=25 {
            assert_eq!(grid.get(0, y), Tile::Empty);
        }
        assert_eq!(grid.get(0, 21), Tile::Solid);
        assert_eq!(grid.get(0, 26), Tile::Solid);
        assert_eq!(doorway.tiles.len(), 4);
        assert_eq!(doorway.top(), 22);
        assert!(doorway.contains(0, 22) && doorway.contains(0, 25));
    }

    #[test]
    fn test_blocked_inner_column_does_not_carve() {
        let mut grid = left_hugging_well();
        grid.set(1, 26, Tile::Platform);
        assert!(!can_carve(&grid, 0, 25));
        grid.set(1, 26, Tile::Empty);
        grid.set(1, 24, Tile::Solid);
        assert!(!can_carve(&grid, 0, 25));
    }

    #[test]
    fn test_duplicate_edges_carve_once_per_row() {
        let mut grid = left_hugging_well();
        let edges: Vec<Edge> = (0..60).map(|row| Edge { column: 0, row }).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let carving = carve_all(&mut grid, &edges, 8, &mut rng);

        assert_eq!(carving.doorways.len(), 2);
        assert_eq!(carving.rooms.len(), 2);
        for (doorway, room) in carving.doorways.iter().zip(&carving.rooms) {
            assert!((3..6).contains(&doorway.height));
            assert_eq!(doorway.tiles.len() as i32, doorway.height);
            assert_eq!(room.door_height, doorway.height);
            assert_eq!(room.anchor.row, doorway.row);
            assert_eq!(room.anchor.side, RoomSide::Left);
        }
    }

    #[test]
    fn test_right_wall_edges_never_carve_into_rock() {
        // Corridor hugs the left wall; the right wall has solid rock inside it.
        let mut grid = left_hugging_well();
        let edges = vec![Edge { column: 19, row: 30 }];
        let mut rng = StdRng::seed_from_u64(3);
        let carving = carve_all(&mut grid, &edges, 8, &mut rng);
        assert!(carving.doorways.is_empty());
        assert!((0..60).all(|y| grid.get(19, y) == Tile::Solid));
    }
}
