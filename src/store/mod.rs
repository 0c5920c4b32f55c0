//! High-score persistence port.
//!
//! The engine talks to a [`HighScoreStore`] and never to a concrete backend,
//! so tests run against an in-memory fake while the binary wires up the JSON
//! file store.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persisted high-score state, loaded once at startup and written whenever a
/// new high score is reached.
pub trait HighScoreStore: Send {
    /// Stored high score, defaulting to 0 when absent or unreadable
    fn load(&mut self) -> u32;

    /// Persist a new high score
    fn save(&mut self, high_score: u32) -> Result<()>;
}

/// On-disk layout of the save file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveData {
    #[serde(rename = "snakeHighScore", default)]
    snake_high_score: u32,
}

/// JSON file backend for the high score
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str::<SaveData>(&text)
                .map(|data| data.snake_high_score)
                .unwrap_or(0),
            Err(_) => 0,
        }
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        let data = SaveData {
            snake_high_score: high_score,
        };
        let text = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write save file {}", self.path.display()))
    }
}

/// In-memory store for tests; clones share the same value
#[derive(Clone, Default)]
pub struct MemoryStore {
    value: Arc<Mutex<u32>>,
}

impl MemoryStore {
    pub fn new(initial: u32) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
        }
    }

    /// Current stored value, for assertions
    pub fn value(&self) -> u32 {
        *self.value.lock().unwrap()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        *self.value.lock().unwrap()
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        *self.value.lock().unwrap() = high_score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_save_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snake_store_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let mut store = JsonFileStore::new(temp_save_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let path = temp_save_path("malformed");
        fs::write(&path, "not json at all").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load(), 0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_save_path("roundtrip");

        let mut store = JsonFileStore::new(&path);
        store.save(120).unwrap();
        assert_eq!(store.load(), 120);

        // Stored under the expected key
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("snakeHighScore"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_memory_store_clones_share_value() {
        let store = MemoryStore::new(5);
        let mut writer = store.clone();

        assert_eq!(writer.load(), 5);
        writer.save(42).unwrap();
        assert_eq!(store.value(), 42);
    }
}
