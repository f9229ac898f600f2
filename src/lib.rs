//! Weighted random generation of dungeon entrance tile maps
//!
//! Tiles labelled with the regions they may occupy are drawn into a grid of
//! upper rows and a three-segment bottom row, the middle segment is held to a
//! special tile limit, and the result is composited into a single image.

#![forbid(unsafe_code)]

/// Pool partitioning, weighted selection, constraint repair and grid composition
pub mod algorithm;
/// Configuration, errors, image caching and compositing, tile discovery and the CLI
pub mod io;
/// Tile records and the generated grid
pub mod spatial;

pub use algorithm::composer::generate;
pub use io::cache::AssetCache;
pub use io::configuration::GenerationConfig;
pub use io::error::{GenerationError, Result};
pub use io::image::render;
pub use spatial::{Grid, tiles::Tile};
