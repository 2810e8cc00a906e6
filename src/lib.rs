//! Pictor is a small picture abstraction: one handle over raster pixels and recorded vector
//! drawing commands.
//!
//! # Model
//!
//! - A [`Picture`] holds exactly one of: a declared size, a [`RasterBuffer`], or a
//!   [`VectorRecording`].
//! - A [`RecordingSession`] borrows a picture mutably, hands out a [`RecordingCanvas`], and on
//!   scope exit freezes the captured commands into a vector recording stored back in the picture.
//! - Export normalizes any variant onto a temporary CPU surface (`vello_cpu`) and encodes PNG.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Premultiplied RGBA8** in memory; PNG files are written with straight alpha.
//! - **Exhaustive dispatch**: every operation matches all picture variants explicitly.
//!
//! ```
//! use pictor::{ExportOpts, Picture, Rect, Rgba8, Size};
//!
//! let mut picture = Picture::new(Size::new(16.0, 16.0));
//! picture.record_with(|canvas| {
//!     canvas
//!         .set_paint(Rgba8::opaque(255, 64, 0))
//!         .fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0));
//!     Ok(())
//! })?;
//! let png = picture.to_png_bytes(&ExportOpts::default())?;
//! assert!(!png.is_empty());
//! # Ok::<(), pictor::PictorError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod render;

/// Image decoding (the loader).
pub mod assets;
/// Rasterization and PNG export (the exporter).
pub mod export;
/// The picture handle.
pub mod picture;
/// Raster buffers and pixel views.
pub mod raster;
/// Recording sessions, canvases and vector recordings.
pub mod recording;

pub use crate::foundation::core::{
    Affine, BYTES_PER_PIXEL, BezPath, PixelSize, Point, Rect, Rgba8, Rgba8Premul, Size,
};
pub use crate::foundation::error::{BoxError, DecodeErrorKind, PictorError, PictorResult};

pub use crate::assets::decode::{decode_bytes, decode_file};
pub use crate::export::opts::{ExportOpts, PNG_COMPRESSION_ENV, PngCompression};
pub use crate::picture::model::{Picture, PictureContent, PictureKind};
pub use crate::raster::buffer::{AllocationError, RasterBuffer};
pub use crate::raster::view::{PixelView, PixelViewMut};
pub use crate::recording::canvas::RecordingCanvas;
pub use crate::recording::command::{DrawCommand, LineCap, LineJoin, Paint, StrokeStyle};
pub use crate::recording::session::RecordingSession;
pub use crate::recording::vector::VectorRecording;
