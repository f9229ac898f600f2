/// Asset cache for decoded tile images
pub mod cache;
/// Command-line interface
pub mod cli;
/// Generation defaults and configuration validation
pub mod configuration;
/// Error types
pub mod error;
/// Map compositing and export
pub mod image;
/// Persisted tile metadata
pub mod library;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Tile folder scanning
pub mod scanner;
