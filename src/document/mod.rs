// src/document/mod.rs
mod well;

pub use self::well::{generate_batch, GenerationStats, Well, WellHandle};
