use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::ImageEncoder;
use image::codecs::png::{FilterType, PngEncoder};

use crate::export::opts::ExportOpts;
use crate::foundation::core::{PixelSize, unpremultiply_rgba8_in_place};
use crate::foundation::error::{PictorError, PictorResult};
use crate::picture::model::{Picture, PictureContent};
use crate::raster::buffer::{RasterBuffer, alloc_pixmap};
use crate::render::cpu::{clear_pixmap, over_in_place, render_recording};

/// Normalize any picture variant into raster pixels.
///
/// A temporary surface of `ceil(picture.size())` pixels is allocated: size-only pictures stay
/// blank (or the background color), rasters are blitted, and recordings are replayed in order.
#[tracing::instrument(level = "debug", skip(picture, opts), fields(kind = ?picture.kind()))]
pub fn rasterize(picture: &Picture, opts: &ExportOpts) -> PictorResult<RasterBuffer> {
    let size = picture.size();
    let px = PixelSize::covering(size).ok_or_else(|| {
        PictorError::encode(format!(
            "cannot rasterize picture of size {}x{}",
            size.width, size.height
        ))
    })?;
    let mut surface = alloc_pixmap(px)?;

    match picture.content() {
        PictureContent::SizeOnly(_) => {
            if let Some(bg) = opts.background {
                clear_pixmap(&mut surface, bg.premultiply());
            }
        }
        PictureContent::Raster(buffer) => match opts.background {
            None => surface
                .data_as_u8_slice_mut()
                .copy_from_slice(buffer.as_bytes()),
            Some(bg) => {
                clear_pixmap(&mut surface, bg.premultiply());
                over_in_place(surface.data_as_u8_slice_mut(), buffer.as_bytes())?;
            }
        },
        PictureContent::Vector(recording) => {
            let mut ctx = vello_cpu::RenderContext::new(surface.width(), surface.height());
            render_recording(recording, opts.background, &mut ctx, &mut surface)?;
        }
    }

    RasterBuffer::from_pixmap(&surface).map_err(|e| PictorError::encode(e.to_string()))
}

/// Encode premultiplied pixels as PNG bytes (straight alpha on disk).
pub fn encode_png(buffer: RasterBuffer, opts: &ExportOpts) -> PictorResult<Vec<u8>> {
    let (width, height) = (buffer.width(), buffer.height());
    if width == 0 || height == 0 {
        return Err(PictorError::encode(format!(
            "cannot encode empty {width}x{height} image"
        )));
    }
    let mut straight = buffer.into_bytes();
    unpremultiply_rgba8_in_place(&mut straight);

    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, opts.compression.into(), FilterType::Adaptive)
        .write_image(&straight, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| PictorError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Rasterize a picture and encode it as PNG bytes.
pub fn export(picture: &Picture, opts: &ExportOpts) -> PictorResult<Vec<u8>> {
    let raster = rasterize(picture, opts)?;
    encode_png(raster, opts)
}

/// Rasterize, encode, and write a picture to `path`.
///
/// The bytes are fully encoded before the destination is touched, then written to a sibling
/// temporary file and renamed into place. On failure an existing file at `path` is left as is.
#[tracing::instrument(level = "debug", skip(picture, opts), fields(path = %path.display()))]
pub fn export_png(picture: &Picture, path: &Path, opts: &ExportOpts) -> PictorResult<()> {
    let bytes = export(picture, opts)?;
    write_replacing(path, &bytes)?;
    tracing::debug!(bytes = bytes.len(), "png written");
    Ok(())
}

fn write_replacing(path: &Path, bytes: &[u8]) -> PictorResult<()> {
    let file_name = path.file_name().ok_or_else(|| {
        PictorError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "destination has no file name",
            ),
        )
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp_path = dir.join(format!(
        ".{}.{}.pictor-tmp",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let mut tmp = TempFileGuard(Some(tmp_path.clone()));
    {
        let mut f = File::create(&tmp_path).map_err(|e| PictorError::io(path, e))?;
        f.write_all(bytes).map_err(|e| PictorError::io(path, e))?;
        f.sync_all().map_err(|e| PictorError::io(path, e))?;
    }
    std::fs::rename(&tmp_path, path).map_err(|e| PictorError::io(path, e))?;
    tmp.0 = None;
    Ok(())
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
