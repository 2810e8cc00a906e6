use std::path::Path;

use crate::assets::decode::{decode_bytes, decode_file};
use crate::export::opts::ExportOpts;
use crate::export::png;
use crate::foundation::core::Size;
use crate::foundation::error::PictorResult;
use crate::raster::buffer::RasterBuffer;
use crate::raster::view::{PixelView, PixelViewMut};
use crate::recording::canvas::RecordingCanvas;
use crate::recording::session::RecordingSession;
use crate::recording::vector::VectorRecording;

/// What a [`Picture`] currently holds.
#[derive(Clone, Debug)]
pub enum PictureContent {
    /// Declared size only, no content yet.
    SizeOnly(Size),
    /// Decoded or rasterized pixels.
    Raster(RasterBuffer),
    /// Frozen command list with its bounding extent.
    Vector(VectorRecording),
}

/// Variant tag of a [`Picture`], for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PictureKind {
    /// See [`PictureContent::SizeOnly`].
    SizeOnly,
    /// See [`PictureContent::Raster`].
    Raster,
    /// See [`PictureContent::Vector`].
    Vector,
}

/// A drawable image: either a declared size, raster pixels, or a vector recording.
///
/// Every operation dispatches over all three variants explicitly. The only content transition in
/// normal use is into `Vector`, performed when a [`RecordingSession`] bound to this picture ends.
#[derive(Clone, Debug)]
pub struct Picture {
    content: PictureContent,
}

impl Picture {
    /// Create an empty picture with a declared size. Never fails.
    pub fn new(size: Size) -> Self {
        Self {
            content: PictureContent::SizeOnly(size),
        }
    }

    /// Decode an image file into a raster picture.
    pub fn load(path: impl AsRef<Path>) -> PictorResult<Self> {
        let buffer = decode_file(path.as_ref())?;
        Ok(Self::from_raster(buffer))
    }

    /// Decode encoded image bytes into a raster picture.
    pub fn from_bytes(bytes: &[u8]) -> PictorResult<Self> {
        Ok(Self::from_raster(decode_bytes(bytes)?))
    }

    /// Wrap an existing raster buffer.
    pub fn from_raster(buffer: RasterBuffer) -> Self {
        Self {
            content: PictureContent::Raster(buffer),
        }
    }

    /// Current content.
    pub fn content(&self) -> &PictureContent {
        &self.content
    }

    /// Consume the picture and return its content.
    pub fn into_content(self) -> PictureContent {
        self.content
    }

    /// Variant tag.
    pub fn kind(&self) -> PictureKind {
        match &self.content {
            PictureContent::SizeOnly(_) => PictureKind::SizeOnly,
            PictureContent::Raster(_) => PictureKind::Raster,
            PictureContent::Vector(_) => PictureKind::Vector,
        }
    }

    /// Logical size: the declared size, the buffer dimensions, or the recording extent.
    pub fn size(&self) -> Size {
        match &self.content {
            PictureContent::SizeOnly(size) => *size,
            PictureContent::Raster(buffer) => buffer.size(),
            PictureContent::Vector(recording) => recording.cull_size(),
        }
    }

    /// Raster buffer, if this picture holds one.
    pub fn as_raster(&self) -> Option<&RasterBuffer> {
        match &self.content {
            PictureContent::Raster(buffer) => Some(buffer),
            PictureContent::SizeOnly(_) | PictureContent::Vector(_) => None,
        }
    }

    /// Vector recording, if this picture holds one.
    pub fn as_recording(&self) -> Option<&VectorRecording> {
        match &self.content {
            PictureContent::Vector(recording) => Some(recording),
            PictureContent::SizeOnly(_) | PictureContent::Raster(_) => None,
        }
    }

    /// Read-only pixel access. `None` unless the picture holds a raster.
    pub fn pixels(&self) -> Option<PixelView<'_>> {
        match &self.content {
            PictureContent::Raster(buffer) => Some(buffer.view()),
            PictureContent::SizeOnly(_) | PictureContent::Vector(_) => None,
        }
    }

    /// Mutable pixel access. `None` unless the picture holds a raster.
    pub fn pixels_mut(&mut self) -> Option<PixelViewMut<'_>> {
        match &mut self.content {
            PictureContent::Raster(buffer) => Some(buffer.view_mut()),
            PictureContent::SizeOnly(_) | PictureContent::Vector(_) => None,
        }
    }

    /// Open a recording session on this picture.
    pub fn record(&mut self) -> PictorResult<RecordingSession<'_>> {
        RecordingSession::begin(self)
    }

    /// Record with a closure; the session is finalized even when `draw` fails.
    pub fn record_with<F>(&mut self, draw: F) -> PictorResult<()>
    where
        F: FnOnce(&mut RecordingCanvas) -> PictorResult<()>,
    {
        let mut session = self.record()?;
        draw(session.canvas())
    }

    /// Rasterize whatever this picture holds into a fresh buffer.
    pub fn rasterize(&self, opts: &ExportOpts) -> PictorResult<RasterBuffer> {
        png::rasterize(self, opts)
    }

    /// Rasterize and encode as PNG bytes.
    pub fn to_png_bytes(&self, opts: &ExportOpts) -> PictorResult<Vec<u8>> {
        png::export(self, opts)
    }

    /// Write this picture as a PNG file with default options.
    pub fn export_png(&self, path: impl AsRef<Path>) -> PictorResult<()> {
        self.export_png_with(path, &ExportOpts::default())
    }

    /// Write this picture as a PNG file.
    pub fn export_png_with(&self, path: impl AsRef<Path>, opts: &ExportOpts) -> PictorResult<()> {
        png::export_png(self, path.as_ref(), opts)
    }

    pub(crate) fn replace_content(&mut self, content: PictureContent) {
        self.content = content;
    }
}

impl From<RasterBuffer> for Picture {
    fn from(buffer: RasterBuffer) -> Self {
        Self::from_raster(buffer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/picture/model.rs"]
mod tests;
