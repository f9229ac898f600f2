//! Map compositing from cached tile images and PNG export

use crate::io::cache::AssetCache;
use crate::io::configuration::canvas_size;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::Grid;
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::path::Path;

// Bicubic resampling for tiles scaled to the cell size
const TILE_FILTER: FilterType = FilterType::CatmullRom;

/// Composite `grid` into one RGB image of `tile_px` square cells
///
/// Upper rows are drawn top down; the bottom row joins the left, middle and
/// right segments. Alpha in tile images is discarded. Rendering is a pure
/// function of the grid and the cache contents.
///
/// # Errors
///
/// Returns an error if:
/// - `tile_px` is zero or the canvas would overflow
/// - The grid rows do not match its declared width and height
/// - Any tile image cannot be loaded; no partial image is returned
pub fn render(grid: &Grid<'_>, tile_px: u32, cache: &mut AssetCache) -> Result<RgbImage> {
    let (canvas_width, canvas_height) = canvas_size(grid.width, grid.height, tile_px)?;
    if !grid.is_complete() {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width, grid.height),
            &"every row must hold exactly `width` tiles",
        ));
    }

    let mut canvas = RgbImage::new(canvas_width, canvas_height);

    for (col, row, tile) in grid.cells() {
        let source = cache.get(tile.path())?;
        let cell = source.resize_exact(tile_px, tile_px, TILE_FILTER).to_rgb8();
        let x = i64::from(tile_px) * col as i64;
        let y = i64::from(tile_px) * row as i64;
        imageops::replace(&mut canvas, &cell, x, y);
    }

    tracing::debug!(
        width = canvas_width,
        height = canvas_height,
        cached = cache.len(),
        "Rendered grid"
    );

    Ok(canvas)
}

/// Save a rendered map, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Write the grid as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails
pub fn export_layout(grid: &Grid<'_>, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(grid).map_err(|e| GenerationError::Library {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    std::fs::write(output_path, json).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write layout",
        source: e,
    })
}
