//! Generation defaults and runtime configuration validation

use crate::io::error::{Result, invalid_parameter};

// Defaults for configurable generation parameters
/// Chance in percent that a bottom row cell is drawn from a blank pool
pub const DEFAULT_LOWER_BLANK_PERCENTAGE: f64 = 30.0;
/// Chance in percent that an upper row cell is drawn from a blank pool
pub const DEFAULT_UPPER_BLANK_PERCENTAGE: f64 = 30.0;
/// Maximum number of special tiles in the middle segment
pub const DEFAULT_SPECIAL_LIMIT: usize = 1;
/// Cells in the middle segment of the bottom row
pub const DEFAULT_MIDDLE_SIZE: usize = 3;
/// Cells in each side segment of the bottom row
pub const DEFAULT_SIDE_SIZE: usize = 3;
/// Total rows including the bottom row
pub const DEFAULT_HEIGHT: usize = 2;
/// Rendered edge length of one cell in pixels
pub const DEFAULT_TILE_PX: u32 = 250;

// Safety limit to prevent excessive memory allocation
/// Maximum number of cells along either grid axis
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum number of pixels in a rendered map
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Biome tag given to scanned tiles
pub const DEFAULT_BIOME: &str = "Cave";
/// Number of maps generated per invocation
pub const DEFAULT_MAP_COUNT: usize = 1;

// Output settings
/// Default rendered map path
pub const DEFAULT_OUTPUT: &str = "map.png";
/// Extension of the grid layout written beside each map
pub const LAYOUT_EXTENSION: &str = "json";
/// Image file extensions accepted by the tile scanner, compared case-insensitively
pub const TILE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Parameters controlling a single generation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Blank chance for bottom row cells, 0 to 100
    pub lower_blank_percentage: f64,
    /// Blank chance for upper row cells, 0 to 100
    pub upper_blank_percentage: f64,
    /// Maximum special tiles allowed in the middle segment
    pub special_limit: usize,
    /// Cells in the middle segment
    pub middle_size: usize,
    /// Cells in each side segment
    pub side_size: usize,
    /// Total rows, at least 2
    pub height: usize,
    /// Rendered cell size in pixels
    pub tile_px: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            lower_blank_percentage: DEFAULT_LOWER_BLANK_PERCENTAGE,
            upper_blank_percentage: DEFAULT_UPPER_BLANK_PERCENTAGE,
            special_limit: DEFAULT_SPECIAL_LIMIT,
            middle_size: DEFAULT_MIDDLE_SIZE,
            side_size: DEFAULT_SIDE_SIZE,
            height: DEFAULT_HEIGHT,
            tile_px: DEFAULT_TILE_PX,
        }
    }
}

impl GenerationConfig {
    /// Cells per row: both side segments plus the middle
    pub const fn width(&self) -> usize {
        self.side_size
            .saturating_mul(2)
            .saturating_add(self.middle_size)
    }

    /// Check every parameter against its valid range
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the first parameter out of range
    pub fn validate(&self) -> Result<()> {
        validate_percentage("lower_blank_percentage", self.lower_blank_percentage)?;
        validate_percentage("upper_blank_percentage", self.upper_blank_percentage)?;
        validate_count("middle_size", self.middle_size, 1)?;
        validate_count("side_size", self.side_size, 1)?;
        validate_count("height", self.height, 2)?;

        if self.width() > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &self.width(),
                &format!("grid width must not exceed {MAX_GRID_DIMENSION} cells"),
            ));
        }

        canvas_size(self.width(), self.height, self.tile_px).map(|_| ())
    }
}

fn validate_percentage(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be between 0 and 100",
        ))
    }
}

fn validate_count(parameter: &'static str, value: usize, minimum: usize) -> Result<()> {
    if value < minimum {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be at least {minimum}"),
        ));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Pixel dimensions `(width, height)` of a rendered grid
///
/// # Errors
///
/// Returns a `Configuration` error if `tile_px` is zero, either dimension
/// does not fit in `u32`, or the canvas exceeds `MAX_CANVAS_PIXELS`
pub fn canvas_size(width: usize, height: usize, tile_px: u32) -> Result<(u32, u32)> {
    if tile_px == 0 {
        return Err(invalid_parameter(
            "tile_px",
            &tile_px,
            &"must be greater than 0",
        ));
    }

    let scale = |cells: usize, parameter: &'static str| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(tile_px))
            .ok_or_else(|| {
                invalid_parameter(
                    parameter,
                    &cells,
                    &format!("{cells} cells of {tile_px}px overflow the canvas"),
                )
            })
    };

    let (width_px, height_px) = (scale(width, "width")?, scale(height, "height")?);
    let pixels = u64::from(width_px) * u64::from(height_px);
    if pixels > MAX_CANVAS_PIXELS {
        return Err(invalid_parameter(
            "tile_px",
            &tile_px,
            &format!("{width_px}x{height_px} canvas exceeds {MAX_CANVAS_PIXELS} pixels"),
        ));
    }

    Ok((width_px, height_px))
}
