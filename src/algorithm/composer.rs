use crate::{
    algorithm::{
        constraint::enforce_special_limit,
        selection::{PoolSource, select, total_weight},
    },
    io::configuration::GenerationConfig,
    io::error::Result,
    spatial::{
        Grid,
        tiles::{Category, Tile, partition},
    },
};
use rand::Rng;

/// Blank and non-blank pools for one category
#[derive(Clone, Debug)]
pub struct CategoryPools<'a> {
    /// Category the pools were built for
    pub category: Category,
    /// Eligible tiles flagged blank
    pub blank: Vec<&'a Tile>,
    /// Eligible tiles not flagged blank
    pub nonblank: Vec<&'a Tile>,
}

impl<'a> CategoryPools<'a> {
    /// Partition the eligible tiles of `category`
    pub fn build(tileset: &'a [Tile], category: Category) -> Self {
        let (blank, nonblank) = partition(tileset, |tile| tile.is_eligible(category));
        Self {
            category,
            blank,
            nonblank,
        }
    }

    /// Fail unless every pool a draw at `blank_percentage` can reach is selectable
    ///
    /// # Errors
    ///
    /// Returns `EmptyCandidatePool` for the first reachable pool with no selectable weight
    pub fn ensure_drawable(&self, blank_percentage: f64) -> Result<()> {
        if blank_percentage > 0.0 && total_weight(&self.blank) == 0 {
            return Err(PoolSource::new(self.category, true).empty_error());
        }
        if blank_percentage < 100.0 && total_weight(&self.nonblank) == 0 {
            return Err(PoolSource::new(self.category, false).empty_error());
        }
        Ok(())
    }

    /// Draw `count` cells, each blank with probability `blank_percentage`
    ///
    /// # Errors
    ///
    /// Returns `EmptyCandidatePool` if a draw lands on an empty pool
    pub fn fill<R: Rng + ?Sized>(
        &self,
        count: usize,
        blank_percentage: f64,
        rng: &mut R,
    ) -> Result<Vec<&'a Tile>> {
        (0..count)
            .map(|_| {
                let blank = rng.random_range(0.0..100.0) < blank_percentage;
                let pool = if blank { &self.blank } else { &self.nonblank };
                select(pool, PoolSource::new(self.category, blank), rng)
            })
            .collect()
    }
}

/// Generate a fresh grid from `tileset`
///
/// Upper rows draw from the upper pools, the bottom row's side segments from the
/// side pools and its middle from the middle pools. The middle segment is then
/// repaired down to `special_limit` specials and every row and segment is
/// shuffled independently.
///
/// # Errors
///
/// Returns an error if:
/// - A configuration parameter is out of range
/// - A pool needed for some cell has no selectable tile
/// - Special tile repair cannot pad the middle segment
pub fn generate<'a, R: Rng + ?Sized>(
    tileset: &'a [Tile],
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Grid<'a>> {
    config.validate()?;

    let upper = CategoryPools::build(tileset, Category::Upper);
    let side = CategoryPools::build(tileset, Category::Side);
    let middle = CategoryPools::build(tileset, Category::Middle);

    upper.ensure_drawable(config.upper_blank_percentage)?;
    side.ensure_drawable(config.lower_blank_percentage)?;
    middle.ensure_drawable(config.lower_blank_percentage)?;

    let width = config.width();
    tracing::debug!(
        width,
        height = config.height,
        tiles = tileset.len(),
        "Generating grid"
    );

    let mut grid = Grid::new(width, config.height);
    for _ in 1..config.height {
        let row = upper.fill(width, config.upper_blank_percentage, rng)?;
        grid.upper.push(row);
    }

    grid.bottom_left = side.fill(config.side_size, config.lower_blank_percentage, rng)?;
    let drawn_middle = middle.fill(config.middle_size, config.lower_blank_percentage, rng)?;
    grid.bottom_right = side.fill(config.side_size, config.lower_blank_percentage, rng)?;

    grid.middle = enforce_special_limit(
        drawn_middle,
        &middle.nonblank,
        config.special_limit,
        config.middle_size,
        rng,
    )?;

    grid.shuffle(rng);
    Ok(grid)
}
