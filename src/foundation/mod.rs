/// Geometry re-exports, colors and pixel helpers.
pub mod core;
/// Error taxonomy.
pub mod error;
