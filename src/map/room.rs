// src/map/room.rs

use crate::map::Grid;

/// Which boundary of the well a room hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomSide {
    /// Attached at column `0`; the room sits left of the well.
    Left,
    /// Attached at column `width - 1`; the room sits right of the well.
    Right,
}

impl RoomSide {
    /// The side a boundary column belongs to.
    pub fn from_boundary(column: i32) -> Self {
        if column == 0 {
            RoomSide::Left
        } else {
            RoomSide::Right
        }
    }
}

/// Where a room attaches to the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomAnchor {
    pub column: i32,
    pub row: i32,
    pub side: RoomSide,
}

/// A side room: its own grid plus the anchor used to position it.
///
/// Rooms never touch the well grid. Renderers place them through
/// [`crate::utils::geometry::room_offset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub grid: Grid,
    pub anchor: RoomAnchor,
    pub door_height: i32,
}

impl Room {
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// The column facing the well, where the opening is.
    pub fn door_column(&self) -> i32 {
        match self.anchor.side {
            RoomSide::Left => self.width() - 1,
            RoomSide::Right => 0,
        }
    }

    /// The wall facing away from the well.
    pub fn back_column(&self) -> i32 {
        match self.anchor.side {
            RoomSide::Left => 0,
            RoomSide::Right => self.width() - 1,
        }
    }
}
