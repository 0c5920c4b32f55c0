//! Core game logic: the grid, the snake, and the tick state machine.
//!
//! No I/O and no timers live here. The host drives [`GameEngine::tick`] at
//! its chosen cadence and renders from the [`GameState`] snapshot.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::{Difficulty, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionKind, Food, GameState, GameStatus, Position, Snake};
