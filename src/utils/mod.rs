// src/utils/mod.rs
pub mod debug_viz;
pub mod geometry;

pub use geometry::{room_cell_position, room_offset, world_position, Point2D};
