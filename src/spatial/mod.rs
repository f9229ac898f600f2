//! Spatial data structures
//!
//! This module contains:
//! - Tile records with their region categories and pool partitioning
//! - The generated grid layout

/// Generated grid layout
pub mod grid;
/// Tile records, categories and pool partitioning
pub mod tiles;

pub use grid::Grid;
