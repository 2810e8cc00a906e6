use std::fmt;

use vello_cpu::peniko::color::PremulRgba8;

use crate::foundation::core::{BYTES_PER_PIXEL, PixelSize, Rgba8Premul, Size};
use crate::foundation::error::{PictorError, PictorResult};
use crate::raster::view::{PixelView, PixelViewMut};

/// A raster buffer could not be allocated at the requested size.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot allocate {width}x{height} RGBA8 buffer")]
pub struct AllocationError {
    /// Requested width in pixels.
    pub width: u32,
    /// Requested height in pixels.
    pub height: u32,
}

/// Owned premultiplied RGBA8 pixels with fixed dimensions.
///
/// Layout is row-major with a top-left origin and a stride of `width * 4` bytes. The size is fixed
/// at allocation; only pixel values can change afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl RasterBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, AllocationError> {
        Self::filled(width, height, Rgba8Premul::transparent())
    }

    /// Allocate a buffer with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8Premul) -> Result<Self, AllocationError> {
        let err = AllocationError { width, height };
        let len = PixelSize::new(width, height).byte_len().ok_or(err)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| err)?;
        if px == Rgba8Premul::transparent() {
            data.resize(len, 0);
        } else {
            let bytes = px.to_array();
            for _ in 0..(len / BYTES_PER_PIXEL) {
                data.extend_from_slice(&bytes);
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap already-premultiplied, tightly packed RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> PictorResult<Self> {
        let expected = PixelSize::new(width, height)
            .byte_len()
            .ok_or_else(|| PictorError::validation("raster dimensions overflow"))?;
        if data.len() != expected {
            return Err(PictorError::validation(format!(
                "raster byte len mismatch: expected {expected}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions.
    pub fn pixel_size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Logical extent (one unit per pixel).
    pub fn size(&self) -> Size {
        self.pixel_size().to_size()
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Raw premultiplied bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Raw premultiplied bytes, mutable. The length cannot change.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        self.view().pixel(x, y)
    }

    /// Read-only view over the pixels.
    pub fn view(&self) -> PixelView<'_> {
        PixelView::new(self.width, self.height, &self.data)
    }

    /// Mutable view over the pixels.
    pub fn view_mut(&mut self) -> PixelViewMut<'_> {
        PixelViewMut::new(self.width, self.height, &mut self.data)
    }

    /// Return `true` when every pixel equals `px`.
    pub fn is_uniform(&self, px: Rgba8Premul) -> bool {
        let want = px.to_array();
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .all(|p| p == want.as_slice())
    }

    /// Copy pixels into a `vello_cpu` pixmap of the same size.
    pub(crate) fn to_pixmap(&self) -> PictorResult<vello_cpu::Pixmap> {
        let (w, h) = pixmap_dims(self.pixel_size())?;
        // Pixmap stores PremulRgba8; our bytes are already premultiplied.
        let mut pixels = Vec::<PremulRgba8>::with_capacity(self.pixel_size().area());
        for px in self.data.chunks_exact(BYTES_PER_PIXEL) {
            pixels.push(PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]));
        }
        let opaque = self.data.chunks_exact(BYTES_PER_PIXEL).all(|px| px[3] == 255);
        Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, opaque))
    }

    /// Snapshot a `vello_cpu` pixmap into an owned buffer.
    pub(crate) fn from_pixmap(pixmap: &vello_cpu::Pixmap) -> Result<Self, AllocationError> {
        let width = u32::from(pixmap.width());
        let height = u32::from(pixmap.height());
        let src = pixmap.data_as_u8_slice();
        let mut data = Vec::new();
        data.try_reserve_exact(src.len())
            .map_err(|_| AllocationError { width, height })?;
        data.extend_from_slice(src);
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Allocate a transparent `vello_cpu` surface, reporting allocation failure as an error.
pub(crate) fn alloc_pixmap(size: PixelSize) -> PictorResult<vello_cpu::Pixmap> {
    let (w, h) = pixmap_dims(size)?;
    let pixels = alloc_surface_pixels(size.area())?;
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, false))
}

fn alloc_surface_pixels(area: usize) -> PictorResult<Vec<PremulRgba8>> {
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(area).map_err(|e| {
        PictorError::encode(format!("cannot allocate surface of {area} pixels: {e}"))
    })?;
    pixels.resize(area, PremulRgba8::from_u8_array([0, 0, 0, 0]));
    Ok(pixels)
}

/// Validate that a pixel grid fits the `u16` surfaces `vello_cpu` works with.
pub(crate) fn pixmap_dims(size: PixelSize) -> PictorResult<(u16, u16)> {
    if size.is_empty() {
        return Err(PictorError::encode(format!(
            "surface size {}x{} is empty",
            size.width, size.height
        )));
    }
    let w: u16 = size
        .width
        .try_into()
        .map_err(|_| PictorError::encode("surface width exceeds u16"))?;
    let h: u16 = size
        .height
        .try_into()
        .map_err(|_| PictorError::encode("surface height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
