use crate::{
    io::error::{GenerationError, Result},
    spatial::tiles::{Category, Tile},
};
use rand::Rng;

/// Identifies the pool a selection draws from, for error reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSource {
    /// Category the pool belongs to
    pub category: Category,
    /// Whether this is the blank sub-pool
    pub blank: bool,
}

impl PoolSource {
    /// Source describing one category's blank or non-blank pool
    pub const fn new(category: Category, blank: bool) -> Self {
        Self { category, blank }
    }

    /// Error raised when this pool cannot supply a tile
    pub const fn empty_error(self) -> GenerationError {
        GenerationError::EmptyCandidatePool {
            category: self.category,
            blank: self.blank,
        }
    }
}

/// Sum of selectable weight in a pool
pub fn total_weight(pool: &[&Tile]) -> u64 {
    pool.iter().map(|tile| u64::from(tile.weight)).sum()
}

/// Draw one tile with probability proportional to its weight
///
/// Zero-weight tiles are never returned. A single-tile pool returns that tile
/// without consuming randomness.
///
/// # Errors
///
/// Returns `EmptyCandidatePool` naming `source` if the pool is empty or its
/// total weight is zero
pub fn select<'a, R: Rng + ?Sized>(
    pool: &[&'a Tile],
    source: PoolSource,
    rng: &mut R,
) -> Result<&'a Tile> {
    if let [only] = pool {
        return if only.is_selectable() {
            Ok(*only)
        } else {
            Err(source.empty_error())
        };
    }

    let total = total_weight(pool);
    if total == 0 {
        return Err(source.empty_error());
    }

    let mut remaining = rng.random_range(0..total);
    for &tile in pool {
        let weight = u64::from(tile.weight);
        if remaining < weight {
            return Ok(tile);
        }
        remaining -= weight;
    }

    // `remaining < total` guarantees a hit above
    pool.iter()
        .rev()
        .find(|tile| tile.is_selectable())
        .copied()
        .ok_or_else(|| source.empty_error())
}
