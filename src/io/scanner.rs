//! Tile discovery from a folder tree using the filename labelling convention
//!
//! Labels are read from the path below the scanned folder, so subfolder names
//! count too:
//! - `Middle`, else `Side`, else upper placement
//! - `Special`, `Blank` and `Repeatable` set the matching flags
//! - The first two consecutive digits give the sampling weight
//!
//! Files that break the convention are skipped with a warning rather than
//! failing the scan.

use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{GenerationError, Result};
use crate::spatial::tiles::{Category, CategorySet, Tile};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file was left out of a scan
#[derive(Debug)]
pub enum TileRejection {
    /// No two consecutive digits in the path
    MissingWeight,
    /// The weight digits read as zero
    ZeroWeight,
    /// The path could not be canonicalized
    Unresolvable(std::io::Error),
}

impl fmt::Display for TileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWeight => write!(f, "no two-digit weight in path"),
            Self::ZeroWeight => write!(f, "weight must be at least 1"),
            Self::Unresolvable(source) => write!(f, "cannot resolve path: {source}"),
        }
    }
}

impl std::error::Error for TileRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unresolvable(source) => Some(source),
            _ => None,
        }
    }
}

/// Collect every labelled tile image below `folder`, sorted by path
///
/// # Errors
///
/// Returns `FileSystem` if `folder` or one of its subdirectories cannot be read
pub fn scan_tiles(folder: &Path, biome: &str) -> Result<Vec<Tile>> {
    let mut paths = BTreeSet::new();
    collect_image_paths(folder, &mut paths)?;

    let mut tiles = Vec::with_capacity(paths.len());
    for path in paths {
        match parse_tile(folder, &path, biome) {
            Ok(tile) => tiles.push(tile),
            Err(reason) => {
                tracing::warn!(path = %path.display(), reason = %reason, "Skipping tile image");
            }
        }
    }

    tracing::info!(count = tiles.len(), folder = %folder.display(), "Scanned tiles");
    Ok(tiles)
}

fn collect_image_paths(dir: &Path, paths: &mut BTreeSet<PathBuf>) -> Result<()> {
    let read_error = |source: std::io::Error| GenerationError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_dir() {
            collect_image_paths(&path, paths)?;
        } else if has_tile_extension(&path) {
            paths.insert(path);
        }
    }
    Ok(())
}

/// Whether the file extension is a supported image format
pub fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Build a tile from the labels in `path` relative to `root`
///
/// The stored path is canonicalized so cache keys stay stable.
///
/// # Errors
///
/// Returns the `TileRejection` explaining why the file cannot be used
pub fn parse_tile(
    root: &Path,
    path: &Path,
    biome: &str,
) -> std::result::Result<Tile, TileRejection> {
    let text = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

    let weight = parse_weight(&text).ok_or(TileRejection::MissingWeight)?;
    if weight == 0 {
        return Err(TileRejection::ZeroWeight);
    }

    let resolved = path.canonicalize().map_err(TileRejection::Unresolvable)?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Tile::new(name, resolved, placement(&text))
        .with_weight(weight)
        .with_repeatable(text.contains("Repeatable"))
        .with_special(text.contains("Special"))
        .with_blank(text.contains("Blank"))
        .with_biome(biome))
}

/// Category implied by the path labels
pub fn placement(text: &str) -> CategorySet {
    if text.contains("Middle") {
        CategorySet::of(Category::Middle)
    } else if text.contains("Side") {
        CategorySet::of(Category::Side)
    } else {
        CategorySet::of(Category::Upper)
    }
}

/// First run of two consecutive ASCII digits, as a number
pub fn parse_weight(text: &str) -> Option<u32> {
    text.as_bytes().windows(2).find_map(|pair| match *pair {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    })
}
