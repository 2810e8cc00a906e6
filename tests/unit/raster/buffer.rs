use super::*;

#[test]
fn new_buffer_is_transparent_with_fixed_layout() {
    let buf = RasterBuffer::new(3, 2).unwrap();
    assert_eq!(buf.width(), 3);
    assert_eq!(buf.height(), 2);
    assert_eq!(buf.stride(), 12);
    assert_eq!(buf.as_bytes().len(), 3 * 2 * 4);
    assert!(buf.is_uniform(Rgba8Premul::transparent()));
}

#[test]
fn filled_sets_every_pixel() {
    let px = Rgba8Premul::from_straight_rgba(10, 20, 30, 255);
    let buf = RasterBuffer::filled(4, 4, px).unwrap();
    assert!(buf.is_uniform(px));
    assert_eq!(buf.pixel(3, 3), Some(px));
    assert_eq!(buf.pixel(4, 0), None);
    assert_eq!(buf.pixel(0, 4), None);
}

#[test]
fn overflowing_allocation_is_reported() {
    let err = RasterBuffer::new(u32::MAX, u32::MAX).unwrap_err();
    assert_eq!(err.width, u32::MAX);
    assert!(err.to_string().contains("cannot allocate"));
}

#[test]
fn from_premul_rgba8_validates_length() {
    assert!(RasterBuffer::from_premul_rgba8(2, 2, vec![0; 16]).is_ok());
    let err = RasterBuffer::from_premul_rgba8(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, PictorError::Validation(_)));
}

#[test]
fn view_mut_writes_are_visible_row_major() {
    let mut buf = RasterBuffer::new(2, 2).unwrap();
    let red = Rgba8Premul::from_straight_rgba(255, 0, 0, 255);
    {
        let mut v = buf.view_mut();
        assert!(v.set_pixel(1, 0, red));
        assert!(!v.set_pixel(2, 0, red));
    }
    assert_eq!(&buf.as_bytes()[4..8], &[255, 0, 0, 255]);
    assert_eq!(buf.view().row(0).map(<[u8]>::len), Some(8));
    assert_eq!(buf.view().row(2), None);
    assert_eq!(buf.view().pixels().filter(|p| *p == red).count(), 1);
}

#[test]
fn pixmap_roundtrip_preserves_bytes() {
    let mut buf = RasterBuffer::new(3, 1).unwrap();
    buf.view_mut()
        .set_pixel(0, 0, Rgba8Premul::from_straight_rgba(0, 255, 0, 128));
    let pixmap = buf.to_pixmap().unwrap();
    assert_eq!(pixmap.width(), 3);
    assert_eq!(pixmap.height(), 1);
    let back = RasterBuffer::from_pixmap(&pixmap).unwrap();
    assert_eq!(back, buf);
}

#[test]
fn pixmap_dims_reject_empty_and_oversized() {
    assert!(pixmap_dims(PixelSize::new(0, 1)).is_err());
    assert!(pixmap_dims(PixelSize::new(70_000, 1)).is_err());
    assert_eq!(pixmap_dims(PixelSize::new(7, 9)).unwrap(), (7, 9));
}

#[test]
fn surface_allocation_is_transparent_and_sized() {
    let pixmap = alloc_pixmap(PixelSize::new(5, 3)).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (5, 3));
    assert!(pixmap.data_as_u8_slice().iter().all(|b| *b == 0));
    assert!(matches!(
        alloc_pixmap(PixelSize::new(0, 3)),
        Err(PictorError::Encode(_))
    ));
}

#[test]
fn unreservable_surface_is_an_encode_error() {
    let err = alloc_surface_pixels(usize::MAX).unwrap_err();
    assert!(matches!(err, PictorError::Encode(_)), "{err}");
    assert!(err.to_string().contains("cannot allocate surface"));
}
