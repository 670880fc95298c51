// src/generator/walker.rs

use log::debug;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::{MAX_DIRECTION_STREAK, NOISE_HOLD_HIGH, NOISE_HOLD_LOW};
use crate::map::{Coord, Path};

/// How the walker turns a drawn direction into horizontal displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Personality {
    /// One column in the drawn direction.
    #[default]
    Random,
    /// One or two columns in the drawn direction.
    Drunkard,
    /// Two steps left, two steps right, regardless of the draw.
    ZigZag,
    /// Follows a coherent noise curve; holds still in the middle band.
    PerlinNoise,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Random,
        Personality::Drunkard,
        Personality::ZigZag,
        Personality::PerlinNoise,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn flip(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A single-use random walker producing one descending [`Path`].
pub struct Walker {
    current_x: i32,
    last_direction: Option<Direction>,
    streak: u32,
    personality: Personality,
    randomize: bool,
    noise: Perlin,
    x_frequency: f64,
    y_frequency: f64,
}

impl Walker {
    pub fn new(personality: Personality, randomize: bool, noise_seed: u32) -> Self {
        Walker {
            current_x: 0,
            last_direction: None,
            streak: 0,
            personality,
            randomize,
            noise: Perlin::new(noise_seed),
            x_frequency: 0.15,
            y_frequency: 0.35,
        }
    }

    pub fn with_noise_frequency(mut self, x_frequency: f64, y_frequency: f64) -> Self {
        self.x_frequency = x_frequency;
        self.y_frequency = y_frequency;
        self
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Walks `length` rows starting from `start_column` in a well `width` wide.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        length: i32,
        start_column: i32,
        width: i32,
        rng: &mut R,
    ) -> Path {
        let max_x = (width - 2).max(1);
        self.current_x = start_column.clamp(1, max_x);
        self.last_direction = None;
        self.streak = 0;

        let mut path = Path::with_capacity(length.max(0) as usize);
        for step in 0..length {
            let x = self.step(step, max_x, rng);
            // Unreachable after the clamp above, kept for narrow wells.
            if x < 0 || x >= width {
                debug!("Walker dropped out-of-bounds step {} at column {}", step, x);
                continue;
            }
            path.push(Coord::new(x, step));
        }
        path
    }

    fn step<R: Rng + ?Sized>(&mut self, step: i32, max_x: i32, rng: &mut R) -> i32 {
        let direction = self.draw_direction(rng);

        if self.randomize {
            self.personality = Personality::ALL[rng.random_range(0..Personality::ALL.len())];
        }

        let dx = match self.personality {
            Personality::Random => direction.sign(),
            Personality::Drunkard => direction.sign() * rng.random_range(1..=2),
            Personality::ZigZag => {
                if step % 4 < 2 {
                    -1
                } else {
                    1
                }
            }
            Personality::PerlinNoise => {
                let sample = self.sample_noise(step);
                if sample < NOISE_HOLD_LOW {
                    -1
                } else if sample > NOISE_HOLD_HIGH {
                    1
                } else {
                    0
                }
            }
        };

        self.current_x = (self.current_x + dx).clamp(1, max_x);
        self.current_x
    }

    /// Draws a direction, flipping it once the same one has repeated too often.
    fn draw_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Direction {
        let mut direction = if rng.random_bool(0.5) {
            Direction::Left
        } else {
            Direction::Right
        };

        if self.last_direction == Some(direction) {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        if self.streak > MAX_DIRECTION_STREAK {
            direction = direction.flip();
            self.streak = 0;
        }
        self.last_direction = Some(direction);
        direction
    }

    /// Noise in `[0, 1]`.
    fn sample_noise(&self, step: i32) -> f64 {
        let raw = self
            .noise
            .get([step as f64 * self.x_frequency, self.y_frequency]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
