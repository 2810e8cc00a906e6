use super::*;
use crate::foundation::core::{Rect, Rgba8, Rgba8Premul};
use crate::foundation::error::PictorError;

#[test]
fn new_reports_declared_size() {
    for (w, h) in [(1.0, 1.0), (100.0, 100.0), (12.5, 3.25), (4096.0, 1.0)] {
        let p = Picture::new(Size::new(w, h));
        assert_eq!(p.size(), Size::new(w, h));
        assert_eq!(p.kind(), PictureKind::SizeOnly);
    }
}

#[test]
fn pixel_access_only_for_raster() {
    let mut sized = Picture::new(Size::new(2.0, 2.0));
    assert!(sized.pixels().is_none());
    assert!(sized.pixels_mut().is_none());
    assert!(sized.as_raster().is_none());

    let mut raster = Picture::from_raster(RasterBuffer::new(2, 3).unwrap());
    assert_eq!(raster.size(), Size::new(2.0, 3.0));
    let view = raster.pixels().unwrap();
    assert_eq!((view.width(), view.height()), (2, 3));
    assert_eq!(view.len(), 6);

    let red = Rgba8Premul::from_straight_rgba(255, 0, 0, 255);
    raster.pixels_mut().unwrap().fill(red);
    assert!(raster.as_raster().unwrap().is_uniform(red));
}

#[test]
fn record_with_turns_picture_into_vector() {
    let mut p = Picture::new(Size::new(5.0, 5.0));
    p.record_with(|c| {
        c.set_paint(Rgba8::opaque(1, 2, 3))
            .fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        Ok(())
    })
    .unwrap();
    assert_eq!(p.kind(), PictureKind::Vector);
    assert!(p.pixels().is_none());
    assert_eq!(p.as_recording().unwrap().drawing_command_count(), 1);
}

#[test]
fn record_with_finalizes_on_draw_error() {
    let mut p = Picture::new(Size::new(5.0, 5.0));
    let err = p
        .record_with(|c| {
            c.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
            c.pop_layer()?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, PictorError::Recording(_)));
    assert_eq!(p.kind(), PictureKind::Vector);
    assert_eq!(p.as_recording().unwrap().len(), 1);
}

#[test]
fn picture_kind_serializes_snake_case() {
    let s = serde_json::to_string(&PictureKind::SizeOnly).unwrap();
    assert_eq!(s, "\"size_only\"");
}
