use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use crate::foundation::core::premultiply_rgba8_in_place;
use crate::foundation::error::{DecodeErrorKind, PictorError, PictorResult};
use crate::raster::buffer::RasterBuffer;

/// Decode an image file into premultiplied RGBA8.
///
/// The format is sniffed from the file contents, not the extension.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn decode_file(path: &Path) -> PictorResult<RasterBuffer> {
    let file = File::open(path).map_err(|e| PictorError::decode(path, DecodeErrorKind::Open, e))?;
    let reader = image::ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| PictorError::decode(path, DecodeErrorKind::Open, e))?;
    decode_reader(reader, path)
}

/// Decode encoded image bytes into premultiplied RGBA8.
pub fn decode_bytes(bytes: &[u8]) -> PictorResult<RasterBuffer> {
    let origin = Path::new("<memory>");
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PictorError::decode(origin, DecodeErrorKind::Open, e))?;
    decode_reader(reader, origin)
}

fn decode_reader<R: BufRead + Seek>(
    reader: image::ImageReader<R>,
    origin: &Path,
) -> PictorResult<RasterBuffer> {
    let Some(format) = reader.format() else {
        return Err(PictorError::decode(
            origin,
            DecodeErrorKind::UnrecognizedFormat,
            "no known image signature",
        ));
    };

    let dyn_img = reader
        .decode()
        .map_err(|e| PictorError::decode(origin, classify(&e), e))?;
    let rgba = dyn_img.into_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    tracing::debug!(?format, width, height, "decoded image");

    RasterBuffer::from_premul_rgba8(width, height, rgba8_premul)
        .map_err(|e| PictorError::decode(origin, DecodeErrorKind::Pixels, e))
}

fn classify(err: &image::ImageError) -> DecodeErrorKind {
    match err {
        image::ImageError::Limits(_) => DecodeErrorKind::Allocation,
        image::ImageError::Unsupported(_) => DecodeErrorKind::UnrecognizedFormat,
        _ => DecodeErrorKind::Pixels,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
