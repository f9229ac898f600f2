//! Memoized decoding of tile images

use crate::io::error::{GenerationError, Result};
use image::DynamicImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Decoded tile images keyed by path
///
/// Entries are created on first access and live as long as the cache. Cached
/// images are handed out by shared reference only; resizing for rendering
/// always produces a new image. Access needs `&mut self`, so sharing one cache
/// across threads requires wrapping it in a lock.
#[derive(Default)]
pub struct AssetCache {
    images: HashMap<PathBuf, DynamicImage>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Lookup counters for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups served from memory
    pub hits: usize,
    /// Number of lookups that decoded from disk
    pub misses: usize,
}

impl AssetCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoded image for `path`, loading it on first access
    ///
    /// # Errors
    ///
    /// Returns `AssetLoad` if the file cannot be read or decoded; nothing is cached
    pub fn get(&mut self, path: &Path) -> Result<&DynamicImage> {
        use std::collections::hash_map::Entry;

        match self.images.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let decoded = image::open(path).map_err(|source| GenerationError::AssetLoad {
                    path: path.to_path_buf(),
                    source,
                })?;
                self.stats.misses += 1;
                Ok(entry.insert(decoded))
            }
        }
    }

    /// Store an already decoded image under `path`, replacing any previous entry
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: DynamicImage) {
        self.images.insert(path.into(), image);
    }

    /// Whether `path` has been decoded
    pub fn contains(&self, path: &Path) -> bool {
        self.images.contains_key(path)
    }

    /// Number of cached images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
