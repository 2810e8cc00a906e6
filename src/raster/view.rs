use crate::foundation::core::{BYTES_PER_PIXEL, Rgba8Premul};

/// Borrowed read-only access to premultiplied RGBA8 pixels.
///
/// Row-major, top-left origin, `stride() == width * 4`.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelView<'a> {
    pub(crate) fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// Return `true` when the view holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride();
        self.data.get(start..start + self.stride())
    }

    /// Pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let i = x as usize * BYTES_PER_PIXEL;
        Some(Rgba8Premul::from_array([
            row[i],
            row[i + 1],
            row[i + 2],
            row[i + 3],
        ]))
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8Premul> + use<'a> {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|p| Rgba8Premul::from_array([p[0], p[1], p[2], p[3]]))
    }
}

/// Borrowed mutable access to premultiplied RGBA8 pixels.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    width: u32,
    height: u32,
    data: &'a mut [u8],
}

impl<'a> PixelViewMut<'a> {
    pub(crate) fn new(width: u32, height: u32, data: &'a mut [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView::new(self.width, self.height, &*self.data)
    }

    /// All bytes, mutable.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8Premul) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px.to_array());
        true
    }

    /// Set every pixel to `px`.
    pub fn fill(&mut self, px: Rgba8Premul) {
        let bytes = px.to_array();
        for p in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            p.copy_from_slice(&bytes);
        }
    }
}
