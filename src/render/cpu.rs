use std::sync::Arc;

use crate::foundation::core::{Affine, BezPath, Rect, Rgba8, Rgba8Premul};
use crate::foundation::error::{PictorError, PictorResult};
use crate::raster::buffer::RasterBuffer;
use crate::recording::command::{DrawCommand, LineCap, LineJoin, Paint, StrokeStyle};
use crate::recording::vector::VectorRecording;

type PremulRgba8 = [u8; 4];

/// Replay a recording onto a `vello_cpu` context and resolve it into `dst`.
///
/// `dst` must have the same dimensions as `ctx`. When `background` is set, the whole surface is
/// filled with it before the first recorded command.
pub(crate) fn render_recording(
    recording: &VectorRecording,
    background: Option<Rgba8>,
    ctx: &mut vello_cpu::RenderContext,
    dst: &mut vello_cpu::Pixmap,
) -> PictorResult<()> {
    if ctx.width() != dst.width() || ctx.height() != dst.height() {
        return Err(PictorError::encode("render context and pixmap size differ"));
    }
    ctx.reset();

    if let Some(bg) = background {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(bg));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(ctx.width()),
            f64::from(ctx.height()),
        ));
    }

    replay(recording, ctx)?;

    ctx.flush();
    ctx.render_to_pixmap(dst);
    Ok(())
}

fn replay(recording: &VectorRecording, ctx: &mut vello_cpu::RenderContext) -> PictorResult<()> {
    let mut transform = Affine::IDENTITY;
    let mut paint = Paint::default();

    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(transform));
    apply_paint(ctx, paint);
    ctx.set_stroke(stroke_to_cpu(StrokeStyle::default()));

    for cmd in recording.commands() {
        match cmd {
            DrawCommand::SetTransform(t) => {
                transform = *t;
                ctx.set_transform(affine_to_cpu(transform));
            }
            DrawCommand::SetPaint(p) => {
                paint = *p;
                apply_paint(ctx, paint);
            }
            DrawCommand::SetStroke(s) => ctx.set_stroke(stroke_to_cpu(*s)),
            DrawCommand::FillRect(r) => ctx.fill_rect(&rect_to_cpu(*r)),
            DrawCommand::FillPath(p) => ctx.fill_path(&bezpath_to_cpu(p)),
            DrawCommand::StrokePath(p) => ctx.stroke_path(&bezpath_to_cpu(p)),
            DrawCommand::DrawImage { image, dest } => {
                draw_image(ctx, image, *dest, transform)?;
                // Image draws temporarily replace the paint and transform.
                ctx.set_transform(affine_to_cpu(transform));
                apply_paint(ctx, paint);
            }
            DrawCommand::PushOpacityLayer(opacity) => ctx.push_opacity_layer(*opacity),
            DrawCommand::PushClipLayer(clip) => ctx.push_clip_layer(&bezpath_to_cpu(clip)),
            DrawCommand::PopLayer => ctx.pop_layer(),
        }
    }
    Ok(())
}

fn draw_image(
    ctx: &mut vello_cpu::RenderContext,
    image: &Arc<RasterBuffer>,
    dest: Rect,
    transform: Affine,
) -> PictorResult<()> {
    let dest = dest.abs();
    if image.width() == 0 || image.height() == 0 || dest.area() <= 0.0 {
        return Ok(());
    }
    let w = f64::from(image.width());
    let h = f64::from(image.height());

    let pixmap = image.to_pixmap()?;
    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };

    let placed = transform
        * Affine::translate((dest.x0, dest.y0))
        * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);
    ctx.set_transform(affine_to_cpu(placed));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    Ok(())
}

fn apply_paint(ctx: &mut vello_cpu::RenderContext, paint: Paint) {
    match paint {
        Paint::Solid(c) => ctx.set_paint(color_to_cpu(c)),
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stroke_to_cpu(s: StrokeStyle) -> vello_cpu::kurbo::Stroke {
    let join = match s.join {
        LineJoin::Miter => vello_cpu::kurbo::Join::Miter,
        LineJoin::Bevel => vello_cpu::kurbo::Join::Bevel,
        LineJoin::Round => vello_cpu::kurbo::Join::Round,
    };
    let cap = match s.cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
    };
    vello_cpu::kurbo::Stroke::new(s.width)
        .with_join(join)
        .with_caps(cap)
        .with_miter_limit(s.miter_limit)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Fill every pixel of `pixmap` with a premultiplied color.
pub(crate) fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, px: Rgba8Premul) {
    let rgba = px.to_array();
    for dst in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        dst.copy_from_slice(&rgba);
    }
}

/// Porter-Duff source-over of premultiplied `src` onto `dst` (equal-length RGBA8 buffers).
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> PictorResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PictorError::encode(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
