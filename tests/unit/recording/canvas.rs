use super::*;
use crate::foundation::core::Rgba8;
use kurbo::Shape;

#[test]
fn commands_are_kept_in_issue_order() {
    let mut c = RecordingCanvas::new(Size::new(10.0, 10.0));
    c.set_paint(Rgba8::opaque(255, 0, 0))
        .fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0))
        .set_paint(Rgba8::opaque(0, 0, 255))
        .fill_rect(Rect::new(5.0, 5.0, 10.0, 10.0));
    assert_eq!(c.command_count(), 4);

    let cmds = c.into_commands();
    assert!(matches!(cmds[0], DrawCommand::SetPaint(Paint::Solid(c)) if c.r == 255));
    assert!(matches!(cmds[1], DrawCommand::FillRect(r) if r.x0 == 0.0));
    assert!(matches!(cmds[2], DrawCommand::SetPaint(Paint::Solid(c)) if c.b == 255));
    assert!(matches!(cmds[3], DrawCommand::FillRect(r) if r.x0 == 5.0));
}

#[test]
fn pop_without_push_is_rejected() {
    let mut c = RecordingCanvas::new(Size::new(1.0, 1.0));
    let err = c.pop_layer().unwrap_err();
    assert!(matches!(err, PictorError::Recording(_)));
    assert_eq!(c.command_count(), 0);
}

#[test]
fn open_layers_are_closed_on_finalize() {
    let mut c = RecordingCanvas::new(Size::new(1.0, 1.0));
    c.push_opacity_layer(0.5)
        .push_clip_layer(Rect::new(0.0, 0.0, 1.0, 1.0).to_path(0.1));
    assert_eq!(c.layer_depth(), 2);
    c.pop_layer().unwrap();
    assert_eq!(c.layer_depth(), 1);

    let cmds = c.into_commands();
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds.last(), Some(DrawCommand::PopLayer)));
}

#[test]
fn opacity_is_clamped() {
    let mut c = RecordingCanvas::new(Size::new(1.0, 1.0));
    c.push_opacity_layer(3.0);
    let cmds = c.into_commands();
    assert!(matches!(cmds[0], DrawCommand::PushOpacityLayer(o) if o == 1.0));
}
