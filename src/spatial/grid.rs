//! Generated map layout
//!
//! The bottom row is kept as three segments so constraints can be applied to the
//! middle segment alone; renderers join them back together left to right.

use crate::spatial::tiles::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Tile arrangement produced by one generation run
///
/// Holds shared references into the caller's tileset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid<'a> {
    /// Cells per row
    pub width: usize,
    /// Number of rows including the bottom row
    pub height: usize,
    /// Rows above the bottom row, top first
    pub upper: Vec<Vec<&'a Tile>>,
    /// Left segment of the bottom row
    pub bottom_left: Vec<&'a Tile>,
    /// Centre segment of the bottom row
    pub middle: Vec<&'a Tile>,
    /// Right segment of the bottom row
    pub bottom_right: Vec<&'a Tile>,
}

impl<'a> Grid<'a> {
    /// Create a grid with empty rows and segments
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            upper: Vec::with_capacity(height.saturating_sub(1)),
            bottom_left: Vec::new(),
            middle: Vec::new(),
            bottom_right: Vec::new(),
        }
    }

    /// Bottom row cells from left to right
    pub fn bottom_row(&self) -> impl Iterator<Item = &'a Tile> + '_ {
        self.bottom_left
            .iter()
            .chain(&self.middle)
            .chain(&self.bottom_right)
            .copied()
    }

    /// Every cell as `(column, row, tile)`, top row first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &'a Tile)> + '_ {
        let bottom = self.upper.len();
        self.upper
            .iter()
            .enumerate()
            .flat_map(|(row, tiles)| {
                tiles
                    .iter()
                    .enumerate()
                    .map(move |(col, &tile)| (col, row, tile))
            })
            .chain(
                self.bottom_row()
                    .enumerate()
                    .map(move |(col, tile)| (col, bottom, tile)),
            )
    }

    /// Number of special tiles in the middle segment
    pub fn special_count(&self) -> usize {
        self.middle.iter().filter(|tile| tile.special).count()
    }

    /// Whether every row holds exactly `width` tiles and the height matches
    pub fn is_complete(&self) -> bool {
        self.upper.len() + 1 == self.height
            && self.upper.iter().all(|row| row.len() == self.width)
            && self.bottom_left.len() + self.middle.len() + self.bottom_right.len() == self.width
    }

    /// Permute each upper row and each bottom segment independently
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in &mut self.upper {
            row.shuffle(rng);
        }
        self.bottom_left.shuffle(rng);
        self.middle.shuffle(rng);
        self.bottom_right.shuffle(rng);
    }
}
