//! Command-line interface for generating entrance maps from a tile folder

use crate::algorithm::composer::generate;
use crate::io::cache::AssetCache;
use crate::io::configuration::{
    DEFAULT_BIOME, DEFAULT_HEIGHT, DEFAULT_LOWER_BLANK_PERCENTAGE, DEFAULT_MAP_COUNT,
    DEFAULT_MIDDLE_SIZE, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_SIDE_SIZE, DEFAULT_SPECIAL_LIMIT,
    DEFAULT_TILE_PX, DEFAULT_UPPER_BLANK_PERCENTAGE, GenerationConfig, LAYOUT_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_layout, export_png, render};
use crate::io::library::TileLibrary;
use crate::io::progress::ProgressManager;
use crate::io::scanner::scan_tiles;
use crate::spatial::tiles::Tile;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dungeontiles")]
#[command(
    author,
    version,
    about = "Generate dungeon entrance maps from labelled tile images"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Folder of labelled tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_COUNT)]
    pub count: usize,

    /// Output image path; numbered when generating several maps
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Percent chance a bottom row cell is blank
    #[arg(long, default_value_t = DEFAULT_LOWER_BLANK_PERCENTAGE)]
    pub lower_blank: f64,

    /// Percent chance an upper row cell is blank
    #[arg(long, default_value_t = DEFAULT_UPPER_BLANK_PERCENTAGE)]
    pub upper_blank: f64,

    /// Maximum special tiles in the middle segment
    #[arg(long, default_value_t = DEFAULT_SPECIAL_LIMIT)]
    pub special_limit: usize,

    /// Cells in the middle segment
    #[arg(long, default_value_t = DEFAULT_MIDDLE_SIZE)]
    pub middle_size: usize,

    /// Cells in each side segment
    #[arg(long, default_value_t = DEFAULT_SIDE_SIZE)]
    pub side_size: usize,

    /// Total rows including the bottom row
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Rendered cell size in pixels
    #[arg(short = 'p', long, default_value_t = DEFAULT_TILE_PX)]
    pub tile_px: u32,

    /// Biome tag for scanned tiles and library lookups
    #[arg(short, long, default_value = DEFAULT_BIOME)]
    pub biome: String,

    /// Tile library JSON holding edited tile metadata
    #[arg(short, long)]
    pub library: Option<PathBuf>,

    /// Rescan the tile folder even if the library has this biome
    #[arg(short, long)]
    pub rescan: bool,

    /// Write each grid layout as JSON beside its image
    #[arg(long)]
    pub layout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation parameters taken from the flags
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            lower_blank_percentage: self.lower_blank,
            upper_blank_percentage: self.upper_blank,
            special_limit: self.special_limit,
            middle_size: self.middle_size,
            side_size: self.side_size,
            height: self.height,
            tile_px: self.tile_px,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates tile loading, generation, rendering and export
pub struct MapProcessor {
    cli: Cli,
    cache: AssetCache,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            cache: AssetCache::new(),
            progress_manager,
        }
    }

    /// Generate and write every requested map
    ///
    /// Returns the paths of the written images.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, tiles cannot be loaded,
    /// or any map fails to generate, render or save
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let config = self.cli.generation_config();
        config.validate()?;
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must be at least 1",
            ));
        }

        let tiles = self.load_tiles()?;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let output_path = self.output_path(index);
            let grid = generate(&tiles, &config, &mut rng)?;
            let image = render(&grid, config.tile_px, &mut self.cache)?;
            export_png(&image, &output_path)?;

            if self.cli.layout {
                export_layout(&grid, &output_path.with_extension(LAYOUT_EXTENSION))?;
            }

            tracing::debug!(path = %output_path.display(), "Wrote map");
            if let Some(ref pm) = self.progress_manager {
                pm.complete_map(&output_path);
            }
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        tracing::info!(
            maps = written.len(),
            decoded = self.cache.stats.misses,
            reused = self.cache.stats.hits,
            "Generation complete"
        );
        Ok(written)
    }

    /// Tiles from the library when available, otherwise from a folder scan
    ///
    /// A scan result is stored back into the library if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the library or tile folder cannot be read
    pub fn load_tiles(&self) -> Result<Vec<Tile>> {
        let Some(library_path) = self.cli.library.as_deref() else {
            return scan_tiles(&self.cli.tiles, &self.cli.biome);
        };

        let mut library = TileLibrary::load(library_path)?;
        if !self.cli.rescan {
            if let Some(tiles) = library.tiles(&self.cli.biome) {
                tracing::info!(
                    biome = %self.cli.biome,
                    count = tiles.len(),
                    "Using tiles from library"
                );
                return Ok(tiles.to_vec());
            }
        }

        let tiles = scan_tiles(&self.cli.tiles, &self.cli.biome)?;
        library.set_tiles(self.cli.biome.clone(), tiles.clone());
        library.save(library_path)?;
        Ok(tiles)
    }

    /// Output path for the map at `index`
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }
        Self::numbered_path(&self.cli.output, index + 1)
    }

    fn numbered_path(path: &Path, number: usize) -> PathBuf {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let name = match path.extension() {
            Some(ext) => format!("{stem}_{number}.{}", ext.to_string_lossy()),
            None => format!("{stem}_{number}"),
        };

        if let Some(parent) = path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
