use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board (the board wraps on both axes)
    pub board_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Number of obstacle cells placed at game start
    pub obstacle_count: usize,
    /// Points for regular food
    pub food_points: u32,
    /// Points for big food
    pub big_food_points: u32,
    /// Every Nth consumed food spawns as big
    pub foods_per_big: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 20,
            initial_snake_length: 1,
            obstacle_count: 5,
            food_points: 10,
            big_food_points: 20,
            foods_per_big: 6,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Small board without obstacles, used by tests that need tight control
    pub fn small() -> Self {
        Self {
            board_size: 10,
            obstacle_count: 0,
            ..Default::default()
        }
    }
}

/// Speed preset selecting the tick interval of the host loop.
///
/// The engine itself is timer-free; the host drives `tick()` at this cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tick period for this preset
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }
}
