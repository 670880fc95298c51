// src/map/mod.rs
pub mod tile;
pub mod grid;
pub mod path;
pub mod doorway;
pub mod room;

pub use tile::{Coord, Tile};
pub use grid::{Grid, MAX_GRID_CELLS};
pub use path::Path;
pub use doorway::{Doorway, Edge};
pub use room::{Room, RoomAnchor, RoomSide};
