// src/utils/debug_viz.rs
//! Plain-text dumps of generated grids for logs and the command line.
//!
//! `#` Solid, `.` Empty, `=` Platform, `+` a carved doorway tile.

use std::fmt::Write;

use crate::document::Well;
use crate::map::{Grid, Room, Tile};
use crate::utils::geometry::room_offset;

pub fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Empty => '.',
        Tile::Solid => '#',
        Tile::Platform => '=',
    }
}

/// One line per row, top row first.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for row in grid.rows() {
        out.extend(row.iter().map(|&t| tile_char(t)));
        out.push('\n');
    }
    out
}

/// Renders the well with doorway tiles marked and the row number on the right.
pub fn render_well(well: &Well) -> String {
    let mut out = String::new();
    for y in 0..well.height() {
        for x in 0..well.width() {
            let carved = well.doorways().any(|d| d.contains(x, y));
            out.push(if carved { '+' } else { tile_char(well.tile(x, y)) });
        }
        let _ = writeln!(out, " {:>4}", y);
    }
    out
}

/// Header line describing where a room attaches, followed by its grid.
pub fn render_room(room: &Room, well_width: i32) -> String {
    let (ox, oy) = room_offset(room, well_width);
    let mut out = format!(
        "room {:?} at column {} row {} (door {}, offset {}, {})\n",
        room.anchor.side, room.anchor.column, room.anchor.row, room.door_height, ox, oy
    );
    out.push_str(&render_grid(&room.grid));
    out
}
