//! Error types for tile map generation, rendering and tile library persistence

use crate::spatial::tiles::Category;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and rendering operations
#[derive(Debug)]
pub enum GenerationError {
    /// A generation or rendering parameter is outside its valid range
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A category pool required for at least one cell has no selectable tile
    EmptyCandidatePool {
        /// Category the pool was built for
        category: Category,
        /// Whether the blank or the non-blank sub-pool was empty
        blank: bool,
    },

    /// Special tile repair ran out of padding material
    ConstraintUnsatisfiable {
        /// Number of middle cells that must be filled
        required: usize,
        /// Number of cells that could be filled without padding
        available: usize,
    },

    /// Failed to load or decode a tile image
    AssetLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted tile library could not be read or written as JSON
    Library {
        /// Path of the library document
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCandidatePool { category, blank } => {
                let state = if *blank { "blank" } else { "non-blank" };
                write!(
                    f,
                    "No selectable {state} tiles for the {category} category (add tiles or adjust the blank percentage)"
                )
            }
            Self::ConstraintUnsatisfiable {
                required,
                available,
            } => {
                write!(
                    f,
                    "Cannot limit special tiles: {required} middle cells required but only {available} can be filled without non-special, non-blank middle tiles"
                )
            }
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Library { path, source } => {
                write!(f, "Invalid tile library '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Library { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
