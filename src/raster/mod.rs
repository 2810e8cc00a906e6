//! Owned raster pixels and borrowed views over them.

/// Owned premultiplied RGBA8 buffer.
pub mod buffer;
/// Borrowed pixel views.
pub mod view;
