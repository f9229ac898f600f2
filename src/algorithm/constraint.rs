//! Special tile limit enforcement for the middle segment
//!
//! Repair is a single bounded pass: feasibility is checked before any padding
//! is drawn, so an exhausted padding pool fails instead of looping.

use crate::{
    algorithm::selection::{PoolSource, select},
    io::error::{GenerationError, Result},
    spatial::tiles::{Category, Tile},
};
use rand::Rng;

/// Bring the number of special tiles in `middle` down to `special_limit`
///
/// When the limit is exceeded the segment is rebuilt from its non-special
/// tiles, one weighted draw from its specials (none when the limit is zero),
/// and padding drawn from `middle_nonblank` restricted to non-special tiles
/// until `middle_size` is reached. Blank tiles are never used as padding.
///
/// # Errors
///
/// Returns `ConstraintUnsatisfiable` if padding is needed but no non-special,
/// non-blank middle tile is selectable
pub fn enforce_special_limit<'a, R: Rng + ?Sized>(
    middle: Vec<&'a Tile>,
    middle_nonblank: &[&'a Tile],
    special_limit: usize,
    middle_size: usize,
    rng: &mut R,
) -> Result<Vec<&'a Tile>> {
    let special_count = middle.iter().filter(|tile| tile.special).count();
    if special_count <= special_limit {
        return Ok(middle);
    }

    let (specials, mut repaired): (Vec<&Tile>, Vec<&Tile>) =
        middle.into_iter().partition(|tile| tile.special);

    if special_limit > 0 {
        repaired.push(select(
            &specials,
            PoolSource::new(Category::Middle, false),
            rng,
        )?);
    }

    let padding: Vec<&Tile> = middle_nonblank
        .iter()
        .copied()
        .filter(|tile| !tile.special && tile.is_selectable())
        .collect();

    if repaired.len() < middle_size && padding.is_empty() {
        return Err(GenerationError::ConstraintUnsatisfiable {
            required: middle_size,
            available: repaired.len(),
        });
    }

    tracing::debug!(
        special_count,
        special_limit,
        padded = middle_size.saturating_sub(repaired.len()),
        "Repairing special tiles in middle segment"
    );

    let padding_source = PoolSource::new(Category::Middle, false);
    while repaired.len() < middle_size {
        repaired.push(select(&padding, padding_source, rng)?);
    }

    Ok(repaired)
}
