//! Persisted tile metadata grouped by biome
//!
//! Keeps hand-edited weights and flags across runs so a folder only needs to be
//! scanned once per biome.

use crate::io::error::{GenerationError, Result};
use crate::spatial::tiles::Tile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Tile lists keyed by biome name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLibrary {
    biomes: BTreeMap<String, Vec<Tile>>,
}

impl TileLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a library from JSON, returning an empty one if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No tile library yet");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(GenerationError::FileSystem {
                    path: path.to_path_buf(),
                    operation: "read library",
                    source: e,
                });
            }
        };

        serde_json::from_str(&json).map_err(|e| GenerationError::Library {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the library as pretty-printed JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| GenerationError::Library {
            path: path.to_path_buf(),
            source: e,
        })?;

        std::fs::write(path, json).map_err(|e| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation: "write library",
            source: e,
        })?;

        tracing::info!(path = %path.display(), biomes = self.biomes.len(), "Saved tile library");
        Ok(())
    }

    /// Tiles stored for `biome`
    pub fn tiles(&self, biome: &str) -> Option<&[Tile]> {
        self.biomes.get(biome).map(Vec::as_slice)
    }

    /// Replace the tiles stored for `biome`
    pub fn set_tiles(&mut self, biome: impl Into<String>, tiles: Vec<Tile>) {
        self.biomes.insert(biome.into(), tiles);
    }

    /// Stored biome names in order
    pub fn biomes(&self) -> impl Iterator<Item = &str> {
        self.biomes.keys().map(String::as_str)
    }
}
