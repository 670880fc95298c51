// src/document/well.rs

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::WellError;
use crate::generator::{self, RowSpan};
use crate::map::{Coord, Doorway, Edge, Grid, Path, Room, Tile};

/// Summary of the last generation pass.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// The seed actually used, so unseeded runs can be replayed.
    pub seed: u64,
    /// Wall-clock seconds spent generating.
    pub generation_time: f64,
    pub path_len: usize,
    pub edge_count: usize,
    pub doorway_count: usize,
    pub room_count: usize,
    pub platform_count: usize,
}

/// Shared access for collaborators. Generation takes the write lock.
pub type WellHandle = Arc<RwLock<Well>>;

/// One generated well and everything attached to it.
///
/// A `Well` owns its grid, the walker path, per-row wall spans, the boundary
/// edge records, carved doorways and the rooms behind them. Regenerating
/// throws all of it away and builds it again from scratch.
#[derive(Debug, Default)]
pub struct Well {
    grid: Grid,
    path: Path,
    spans: Vec<RowSpan>,
    edges: Vec<Edge>,
    doorways: Vec<Doorway>,
    rooms: Vec<Room>,
    stats: Option<GenerationStats>,
}

impl Well {
    /// Creates an empty, zero-sized well.
    pub fn new() -> Self {
        Well::default()
    }

    /// Creates and generates a well in one go.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, WellError> {
        let mut well = Well::new();
        well.generate(config)?;
        Ok(well)
    }

    /// Clears all state and runs a full generation pass.
    ///
    /// The configuration is validated before anything is touched, so a
    /// rejected config leaves the previous well intact.
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<&GenerationStats, WellError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        info!(
            "Generating {}x{} well (seed {}, {:?}{})",
            config.width,
            config.height,
            seed,
            config.personality,
            if config.randomize_personality { ", randomized" } else { "" }
        );

        let start = Instant::now();
        self.clear();
        self.grid.reset(config.width, config.height);

        let pass = generator::run(&mut self.grid, config, &mut rng);
        self.path = pass.path;
        self.spans = pass.spans;
        self.edges = pass.edges;
        self.doorways = pass.doorways;
        self.rooms = pass.rooms;

        let stats = GenerationStats {
            seed,
            generation_time: start.elapsed().as_secs_f64(),
            path_len: self.path.len(),
            edge_count: self.edges.len(),
            doorway_count: self.doorways.len(),
            room_count: self.rooms.len(),
            platform_count: pass.platforms,
        };
        info!(
            "Generated well in {:.3} ms: {} path steps, {} edges, {} doorways, {} platforms",
            stats.generation_time * 1000.0,
            stats.path_len,
            stats.edge_count,
            stats.doorway_count,
            stats.platform_count
        );
        Ok(&*self.stats.insert(stats))
    }

    /// Resets the grid to `Empty` (same dimensions) and empties every list.
    pub fn clear(&mut self) {
        debug!("Clearing well state");
        self.grid.clear();
        self.path.clear();
        self.spans.clear();
        self.edges.clear();
        self.doorways.clear();
        self.rooms.clear();
        self.stats = None;
    }

    pub fn into_handle(self) -> WellHandle {
        Arc::new(RwLock::new(self))
    }

    // --- Read interface ---

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn tile(&self, x: i32, y: i32) -> Tile {
        self.grid.get(x, y)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wall columns of each row as synthesized, before doorways were carved.
    pub fn spans(&self) -> &[RowSpan] {
        &self.spans
    }

    pub fn span(&self, row: i32) -> Option<RowSpan> {
        usize::try_from(row).ok().and_then(|r| self.spans.get(r).copied())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn doorways(&self) -> impl Iterator<Item = &Doorway> {
        self.doorways.iter()
    }

    /// Every carved doorway tile, in carve order.
    pub fn doorway_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.doorways.iter().flat_map(|d| d.tiles.iter().copied())
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn stats(&self) -> Option<&GenerationStats> {
        self.stats.as_ref()
    }
}

/// Generates one independent well per seed, in parallel.
pub fn generate_batch(config: &GeneratorConfig, seeds: &[u64]) -> Result<Vec<Well>, WellError> {
    config.validate()?;
    seeds
        .par_iter()
        .map(|&seed| Well::from_config(&config.clone().with_seed(seed)))
        .collect()
}
