//! Tile records, region categories and pool partitioning
//!
//! A tile may be eligible for any subset of the three map regions. Generation
//! splits each region's eligible tiles into a blank and a non-blank pool; this
//! module owns that partitioning so selection never sees a tile outside its region.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Map region a tile may be placed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rows above the bottom row
    Upper,
    /// Left and right thirds of the bottom row
    Side,
    /// Centre of the bottom row
    Middle,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Self; 3] = [Self::Upper, Self::Side, Self::Middle];

    const fn bit(self) -> u8 {
        match self {
            Self::Upper => 0b001,
            Self::Side => 0b010,
            Self::Middle => 0b100,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upper => "upper",
            Self::Side => "side",
            Self::Middle => "middle",
        };
        f.write_str(name)
    }
}

/// Set of categories a tile is eligible for
///
/// Serialized as a list of category names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Category>", from = "Vec<Category>")]
pub struct CategorySet(u8);

impl CategorySet {
    /// Set containing no categories
    pub const EMPTY: Self = Self(0);

    /// Set containing a single category
    pub const fn of(category: Category) -> Self {
        Self(category.bit())
    }

    /// Copy of this set with `category` added
    #[must_use]
    pub const fn with(self, category: Category) -> Self {
        Self(self.0 | category.bit())
    }

    /// Whether `category` is a member
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    /// Whether the set has no members
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in declaration order
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(move |&category| self.contains(category))
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        Self::of(category)
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

/// A labelled, weighted image asset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Display name, not required to be unique
    pub name: String,
    /// Location of the backing image
    pub path: PathBuf,
    /// Editor hint only, ignored by generation
    pub repeatable: bool,
    /// Sampling weight; zero makes the tile unselectable
    pub weight: u32,
    /// Regions the tile may be placed in
    pub categories: CategorySet,
    /// Informational biome tag
    pub biome: String,
    /// Counts against the special limit in the middle segment
    pub special: bool,
    /// Places the tile in its categories' blank pools
    pub is_blank: bool,
}

impl Tile {
    /// Create a weight-1, non-special, non-blank tile
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        categories: impl Into<CategorySet>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            repeatable: false,
            weight: 1,
            categories: categories.into(),
            biome: String::new(),
            special: false,
            is_blank: false,
        }
    }

    /// Set the sampling weight
    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the special flag
    #[must_use]
    pub const fn with_special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    /// Set the blank flag
    #[must_use]
    pub const fn with_blank(mut self, is_blank: bool) -> Self {
        self.is_blank = is_blank;
        self
    }

    /// Set the repeatable flag
    #[must_use]
    pub const fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Set the biome tag
    #[must_use]
    pub fn with_biome(mut self, biome: impl Into<String>) -> Self {
        self.biome = biome.into();
        self
    }

    /// Whether the tile may be placed in `category`
    pub const fn is_eligible(&self, category: Category) -> bool {
        self.categories.contains(category)
    }

    /// Whether selection can ever return this tile
    pub const fn is_selectable(&self) -> bool {
        self.weight > 0
    }

    /// Image location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Split the tiles matching `predicate` into `(blank, nonblank)` pools
///
/// Relative order is preserved in both pools; either may be empty.
pub fn partition<'a, P>(tiles: &'a [Tile], predicate: P) -> (Vec<&'a Tile>, Vec<&'a Tile>)
where
    P: Fn(&Tile) -> bool,
{
    tiles
        .iter()
        .filter(|tile| predicate(tile))
        .partition(|tile| tile.is_blank)
}
