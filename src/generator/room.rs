// src/generator/room.rs

use crate::map::{Grid, Room, RoomAnchor, RoomSide, Tile};

/// Rows of the door band in a room of `room_height` with a door `door_height` tall.
pub fn door_band(room_height: i32, door_height: i32) -> std::ops::Range<i32> {
    let start = (room_height - door_height) / 2;
    start..start + door_height
}

/// Lays out a room grid `width x (door_height + 2)` for a room on `side`.
///
/// Perimeter is Solid except a band of `door_height` rows in the column
/// facing the well.
pub fn build_grid(width: i32, door_height: i32, side: RoomSide) -> Grid {
    let height = door_height + 2;
    let mut grid = Grid::new(width, height);

    let (back, door_side) = match side {
        RoomSide::Left => (0, width - 1),
        RoomSide::Right => (width - 1, 0),
    };
    let band = door_band(height, door_height);

    for y in 0..height {
        for x in 0..width {
            let top = y == 0;
            let bottom = y == height - 1;
            let back_wall = x == back;
            let door_wall = x == door_side && !band.contains(&y);
            if top || bottom || back_wall || door_wall {
                grid.set(x, y, Tile::Solid);
            }
        }
    }
    grid
}

/// Builds the room that hangs off a doorway.
pub fn build(width: i32, door_height: i32, anchor: RoomAnchor) -> Room {
    Room {
        grid: build_grid(width, door_height, anchor.side),
        anchor,
        door_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_rows(room: &Room) -> Vec<i32> {
        let x = room.door_column();
        (0..room.height())
            .filter(|&y| room.grid.get(x, y) == Tile::Empty)
            .collect()
    }

    #[test]
    fn test_room_dimensions() {
        let anchor = RoomAnchor { column: 0, row: 25, side: RoomSide::Left };
        let room = build(8, 4, anchor);
        assert_eq!(room.width(), 8);
        assert_eq!(room.height(), 6);
        assert_eq!(room.anchor, anchor);
    }

    #[test]
    fn test_opening_is_door_height_and_centred() {
        for door_height in 3..6 {
            for side in [RoomSide::Left, RoomSide::Right] {
                let anchor = RoomAnchor { column: 0, row: 50, side };
                let room = build(7, door_height, anchor);
                let rows = opening_rows(&room);
                assert_eq!(rows.len() as i32, door_height);
                assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));
                let above = rows[0];
                let below = room.height() - 1 - rows[rows.len() - 1];
                assert!((above - below).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_back_wall_faces_away_from_well() {
        let left = build(6, 3, RoomAnchor { column: 0, row: 25, side: RoomSide::Left });
        assert_eq!(left.back_column(), 0);
        assert_eq!(left.door_column(), 5);

        let right = build(6, 3, RoomAnchor { column: 19, row: 25, side: RoomSide::Right });
        assert_eq!(right.back_column(), 5);
        assert_eq!(right.door_column(), 0);

        for room in [&left, &right] {
            for y in 0..room.height() {
                assert_eq!(room.grid.get(room.back_column(), y), Tile::Solid);
            }
        }
    }

    #[test]
    fn test_interior_is_open_and_perimeter_closed() {
        let room = build(6, 4, RoomAnchor { column: 0, row: 25, side: RoomSide::Left });
        for x in 0..6 {
            assert_eq!(room.grid.get(x, 0), Tile::Solid);
            assert_eq!(room.grid.get(x, 5), Tile::Solid);
        }
        for y in 1..5 {
            for x in 1..5 {
                assert_eq!(room.grid.get(x, y), Tile::Empty);
            }
        }
        assert_eq!(room.grid.get(5, 0), Tile::Solid);
        assert_eq!(room.grid.get(5, 1), Tile::Empty);
        assert_eq!(room.grid.get(5, 4), Tile::Empty);
    }
}
