// src/lib.rs
//! # wellgen
//!
//! Procedural generation of vertical "well" levels on a tile grid. A biased
//! random walk descends the well, walls and platforms are laid around it row
//! by row, doorways are punched through the outer walls where the corridor
//! touches them, and a side room is built behind every doorway.
//!
//! ```
//! use wellgen::{GeneratorConfig, Tile, Well};
//!
//! let config = GeneratorConfig { seed: Some(42), ..GeneratorConfig::default() };
//! let well = Well::from_config(&config).unwrap();
//! assert_eq!(well.tile(0, 0), Tile::Solid);
//! for room in well.rooms() {
//!     let (_ox, _oy) = wellgen::utils::room_offset(room, well.width());
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod map;
pub mod utils;

pub use config::GeneratorConfig;
pub use document::{generate_batch, GenerationStats, Well, WellHandle};
pub use error::{ConfigError, WellError};
pub use generator::Personality;
pub use map::{Coord, Doorway, Edge, Grid, Path, Room, RoomAnchor, RoomSide, Tile};
