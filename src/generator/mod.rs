// src/generator/mod.rs
//! # Well Generation
//!
//! One pass runs the walker, fills the grid row by row around its path
//! (placing platforms and recording boundary edges on the way), then carves
//! doorways through recorded edges and builds a room behind each one.

pub mod corridor;
pub mod doorway;
pub mod platform;
pub mod room;
pub mod walker;

pub use corridor::RowSpan;
pub use walker::{Direction, Personality, Walker};

use std::ops::Range;

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::map::{Doorway, Edge, Grid, Path, Room};

/// Narrowest well the walker can move in: two walls and one interior column.
pub const MIN_WELL_WIDTH: i32 = 3;
pub const MIN_ROOM_WIDTH: i32 = 3;
pub const DEFAULT_ROOM_WIDTH: i32 = 8;

/// Total corridor width, drawn per row.
pub const CORRIDOR_WIDTH_RANGE: Range<i32> = 10..14;
pub const PLATFORM_INTERVALS: [i32; 2] = [5, 10];
pub const DOORWAY_INTERVAL: i32 = 25;
pub const DOOR_HEIGHT_RANGE: Range<i32> = 3..6;

/// Repeats of one direction tolerated before the walker is turned around.
pub const MAX_DIRECTION_STREAK: u32 = 2;
pub const NOISE_HOLD_LOW: f64 = 0.4;
pub const NOISE_HOLD_HIGH: f64 = 0.6;

/// Everything one pass produces besides the tiles written into the grid.
#[derive(Debug, Default)]
pub struct Pass {
    pub path: Path,
    pub spans: Vec<RowSpan>,
    pub edges: Vec<Edge>,
    pub doorways: Vec<Doorway>,
    pub rooms: Vec<Room>,
    pub platforms: usize,
}

/// Runs a full generation pass into `grid`, which must already be sized to
/// the configured well and cleared. The configuration is assumed validated.
pub fn run<R: Rng + ?Sized>(grid: &mut Grid, config: &GeneratorConfig, rng: &mut R) -> Pass {
    let noise_seed: u32 = rng.random();
    let mut walker = Walker::new(config.personality, config.randomize_personality, noise_seed)
        .with_noise_frequency(config.noise_x_frequency, config.noise_y_frequency);
    let path = walker.generate(
        config.walk_length(),
        config.start_column(),
        grid.width(),
        rng,
    );

    let synthesis = corridor::fill(grid, &path, rng);
    let carving = doorway::carve_all(grid, &synthesis.edges, config.room_width, rng);

    Pass {
        path,
        spans: synthesis.spans,
        edges: synthesis.edges,
        doorways: carving.doorways,
        rooms: carving.rooms,
        platforms: synthesis.platforms,
    }
}
