// src/error.rs

use std::io;

use thiserror::Error;

/// Errors raised while loading or validating a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The well must have at least one interior column for the walker.
    #[error("well width must be at least {min}, got {width}")]
    WidthTooSmall { width: i32, min: i32 },

    #[error("well height must be positive, got {0}")]
    NonPositiveHeight(i32),

    /// Walk length is zero/negative or longer than the well is deep.
    #[error("walk length must be in 1..={height}, got {length}")]
    InvalidWalkLength { length: i32, height: i32 },

    /// The well grid would hold more than `max` cells.
    #[error("well of {width}x{height} exceeds the {max} cell limit")]
    GridTooLarge { width: i32, height: i32, max: usize },

    #[error("room width must be at least {min}, got {width}")]
    RoomWidthTooSmall { width: i32, min: i32 },

    #[error("noise frequencies must be finite, got ({x}, {y})")]
    NonFiniteNoiseFrequency { x: f64, y: f64 },

    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors returned by the generation entry points.
#[derive(Error, Debug)]
pub enum WellError {
    #[error("invalid generator configuration: {0}")]
    Config(#[from] ConfigError),
}
