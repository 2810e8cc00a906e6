//! Rasterization and PNG export.

/// Export options.
pub mod opts;
/// Rasterize, encode, and write PNG files.
pub mod png;
