use super::*;
use crate::foundation::core::{Rect, Rgba8};
use crate::picture::model::PictureKind;
use crate::raster::buffer::RasterBuffer;

#[test]
fn drop_finalizes_into_vector() {
    let mut p = Picture::new(Size::new(20.0, 10.0));
    {
        let mut s = RecordingSession::begin(&mut p).unwrap();
        assert_eq!(s.extent(), Size::new(20.0, 10.0));
        s.canvas()
            .set_paint(Rgba8::WHITE)
            .fill_rect(Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(s.command_count(), 2);
    }
    assert_eq!(p.kind(), PictureKind::Vector);
    let rec = p.as_recording().unwrap();
    assert_eq!(rec.len(), 2);
    assert_eq!(rec.cull_size(), Size::new(20.0, 10.0));
    assert_eq!(p.size(), Size::new(20.0, 10.0));
}

#[test]
fn explicit_finish_finalizes_once() {
    let mut p = Picture::new(Size::new(4.0, 4.0));
    let s = RecordingSession::begin(&mut p).unwrap();
    s.finish();
    assert_eq!(p.kind(), PictureKind::Vector);
    assert!(p.as_recording().unwrap().is_empty());
}

#[test]
fn empty_or_invalid_extent_is_rejected() {
    for size in [
        Size::new(0.0, 10.0),
        Size::new(10.0, -1.0),
        Size::new(f64::INFINITY, 1.0),
    ] {
        let mut p = Picture::new(size);
        let err = RecordingSession::begin(&mut p).err().unwrap();
        assert!(matches!(err, PictorError::Recording(_)));
        assert_eq!(p.kind(), PictureKind::SizeOnly);
    }
}

#[test]
fn re_recording_a_vector_fails_fast() {
    let mut p = Picture::new(Size::new(4.0, 4.0));
    RecordingSession::begin(&mut p).unwrap().finish();
    let err = RecordingSession::begin(&mut p).err().unwrap();
    assert!(err.to_string().contains("already holds a vector recording"));
}

#[test]
fn recording_over_raster_replaces_it() {
    let mut p = Picture::from_raster(RasterBuffer::new(3, 2).unwrap());
    assert!(p.pixels().is_some());
    RecordingSession::begin(&mut p).unwrap().finish();
    assert_eq!(p.kind(), PictureKind::Vector);
    assert!(p.pixels().is_none());
    assert_eq!(p.size(), Size::new(3.0, 2.0));
}
