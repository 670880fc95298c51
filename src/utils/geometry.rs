// src/utils/geometry.rs
//! Placement helpers for renderers.
//!
//! Cell `(x, y)` of a grid `W` columns wide, shifted by `(ox, oy)`, sits at
//! `(-(W / 2) + x + ox, -y - oy)` in world space, with `W / 2` rounded down.
//! Rows grow downward in the grid and upward-negative in the world.

use crate::map::{Room, RoomSide};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// World position of a grid cell.
pub fn world_position(x: i32, y: i32, grid_width: i32, offset: (i32, i32)) -> Point2D {
    let (ox, oy) = offset;
    Point2D::new(
        f64::from(-(grid_width / 2) + x + ox),
        f64::from(-y - oy),
    )
}

/// Offset that lines a room's opening up with the doorway it hangs off.
pub fn room_offset(room: &Room, well_width: i32) -> (i32, i32) {
    let ox = match room.anchor.side {
        RoomSide::Left => -room.width(),
        RoomSide::Right => well_width,
    };
    // Room rows 1..=door_height land on the carved well rows.
    let oy = room.anchor.row - room.door_height;
    (ox, oy)
}

/// World position of a cell inside a room. Rooms share the well's centring
/// term, so `W` is the well's width here.
pub fn room_cell_position(room: &Room, well_width: i32, x: i32, y: i32) -> Point2D {
    world_position(x, y, well_width, room_offset(room, well_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::room;
    use crate::map::RoomAnchor;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_well_cells_are_centred() {
        let p = world_position(0, 0, 20, (0, 0));
        assert_approx_eq!(p.x, -10.0);
        assert_approx_eq!(p.y, 0.0);

        let p = world_position(19, 7, 20, (0, 0));
        assert_approx_eq!(p.x, 9.0);
        assert_approx_eq!(p.y, -7.0);
    }

    #[test]
    fn test_odd_width_rounds_half_down() {
        let p = world_position(0, 3, 7, (0, 0));
        assert_approx_eq!(p.x, -3.0);
        assert_approx_eq!(p.y, -3.0);
    }

    #[test]
    fn test_offsets_shift_both_axes() {
        let p = world_position(2, 4, 10, (5, -1));
        assert_approx_eq!(p.x, 2.0);
        assert_approx_eq!(p.y, -3.0);
    }

    #[test]
    fn test_room_offsets_follow_the_attached_side() {
        let left = room::build(8, 4, RoomAnchor { column: 0, row: 25, side: RoomSide::Left });
        assert_eq!(room_offset(&left, 20), (-8, 21));

        let right = room::build(6, 3, RoomAnchor { column: 19, row: 50, side: RoomSide::Right });
        assert_eq!(room_offset(&right, 20), (20, 47));
    }

    #[test]
    fn test_room_door_rows_line_up_with_the_doorway() {
        let room = room::build(8, 4, RoomAnchor { column: 0, row: 25, side: RoomSide::Left });
        // Top door row of the room against the top carved row (22).
        let p = room_cell_position(&room, 20, room.door_column(), 1);
        assert_approx_eq!(p.y, world_position(0, 22, 20, (0, 0)).y);
        // Bottom door row against the anchor row.
        let p = room_cell_position(&room, 20, room.door_column(), 4);
        assert_approx_eq!(p.y, world_position(0, 25, 20, (0, 0)).y);
    }

    #[test]
    fn test_room_door_column_touches_the_well_wall() {
        for well_width in [10, 20, 21] {
            for room_width in [3, 6, 8] {
                let left = room::build(room_width, 4, RoomAnchor { column: 0, row: 25, side: RoomSide::Left });
                let door = room_cell_position(&left, well_width, left.door_column(), 1);
                let wall = world_position(0, 25, well_width, (0, 0));
                assert_approx_eq!(door.x, wall.x - 1.0);

                let last = well_width - 1;
                let right = room::build(room_width, 4, RoomAnchor { column: last, row: 25, side: RoomSide::Right });
                let door = room_cell_position(&right, well_width, right.door_column(), 1);
                let wall = world_position(last, 25, well_width, (0, 0));
                assert_approx_eq!(door.x, wall.x + 1.0);

                // Back walls sit a full room width out from the well.
                let back = room_cell_position(&left, well_width, left.back_column(), 1);
                assert_approx_eq!(back.x, wall_x(0, well_width) - f64::from(room_width));
                let back = room_cell_position(&right, well_width, right.back_column(), 1);
                assert_approx_eq!(back.x, wall_x(last, well_width) + f64::from(room_width));
            }
        }
    }

    fn wall_x(column: i32, well_width: i32) -> f64 {
        world_position(column, 0, well_width, (0, 0)).x
    }
}
