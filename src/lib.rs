//! Snake on a torus board, played in the terminal.
//!
//! - `game`: the engine state machine (movement, collisions, food, score)
//! - `store`: the high-score persistence port
//! - `input` / `render`: crossterm key mapping and ratatui view
//! - `modes`: the interactive host loop that drives the engine
//! - `metrics`: session timing shown in the header

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod store;
