use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul() {
    let buf = png_bytes(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let decoded = decode_bytes(&buf).unwrap();
    assert_eq!(decoded.width(), 1);
    assert_eq!(decoded.height(), 1);
    assert_eq!(
        decoded.as_bytes(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn unknown_bytes_are_unrecognized() {
    let err = decode_bytes(b"definitely not an image").unwrap_err();
    assert_eq!(err.decode_kind(), Some(DecodeErrorKind::UnrecognizedFormat));

    let err = decode_bytes(&[]).unwrap_err();
    assert_eq!(err.decode_kind(), Some(DecodeErrorKind::UnrecognizedFormat));
}

#[test]
fn truncated_png_is_a_pixel_error() {
    let mut buf = png_bytes(8, 8, vec![7u8; 8 * 8 * 4]);
    buf.truncate(buf.len() / 2);
    let err = decode_bytes(&buf).unwrap_err();
    assert_eq!(err.decode_kind(), Some(DecodeErrorKind::Pixels));
}

#[test]
fn missing_file_is_an_open_error() {
    let err = decode_file(Path::new("/nonexistent/pictor/path.png")).unwrap_err();
    assert_eq!(err.decode_kind(), Some(DecodeErrorKind::Open));
    assert!(err.to_string().contains("/nonexistent/pictor/path.png"));
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= u32::from(b);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    !crc
}

#[test]
fn oversized_declared_dimensions_are_an_allocation_error() {
    // Rewrite IHDR to claim 60000x60000 and fix up its CRC.
    let mut buf = png_bytes(1, 1, vec![0u8; 4]);
    assert_eq!(&buf[12..16], b"IHDR");
    buf[16..20].copy_from_slice(&60_000u32.to_be_bytes());
    buf[20..24].copy_from_slice(&60_000u32.to_be_bytes());
    let crc = crc32(&buf[12..29]);
    buf[29..33].copy_from_slice(&crc.to_be_bytes());

    let err = decode_bytes(&buf).unwrap_err();
    assert_eq!(err.decode_kind(), Some(DecodeErrorKind::Allocation), "{err}");
}

#[test]
fn open_failure_exposes_io_source() {
    use std::error::Error as _;

    let err = decode_file(Path::new("/nonexistent/pictor/source.png")).unwrap_err();
    let source = err.source().expect("open failure keeps its cause");
    assert!(source.downcast_ref::<std::io::Error>().is_some());
}
