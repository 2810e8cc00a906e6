use std::sync::Arc;

use crate::foundation::core::{Affine, BezPath, Rect, Size};
use crate::foundation::error::{PictorError, PictorResult};
use crate::raster::buffer::RasterBuffer;
use crate::recording::command::{DrawCommand, Paint, StrokeStyle};

/// Drawing surface handed out by a [`crate::RecordingSession`].
///
/// Every call appends one [`DrawCommand`]; nothing is interpreted or reordered here.
#[derive(Debug)]
pub struct RecordingCanvas {
    extent: Size,
    commands: Vec<DrawCommand>,
    layer_depth: usize,
}

impl RecordingCanvas {
    pub(crate) fn new(extent: Size) -> Self {
        Self {
            extent,
            commands: Vec::new(),
            layer_depth: 0,
        }
    }

    /// Logical extent fixed when the session began.
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Number of commands recorded so far.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of currently open layers.
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    /// Replace the current transform.
    pub fn set_transform(&mut self, transform: Affine) -> &mut Self {
        self.push(DrawCommand::SetTransform(transform))
    }

    /// Replace the current paint.
    pub fn set_paint(&mut self, paint: impl Into<Paint>) -> &mut Self {
        self.push(DrawCommand::SetPaint(paint.into()))
    }

    /// Replace the current stroke style.
    pub fn set_stroke(&mut self, stroke: StrokeStyle) -> &mut Self {
        self.push(DrawCommand::SetStroke(stroke))
    }

    /// Fill a rectangle with the current paint.
    pub fn fill_rect(&mut self, rect: Rect) -> &mut Self {
        self.push(DrawCommand::FillRect(rect))
    }

    /// Fill a path with the current paint.
    pub fn fill_path(&mut self, path: BezPath) -> &mut Self {
        self.push(DrawCommand::FillPath(path))
    }

    /// Stroke a path with the current paint and stroke style.
    pub fn stroke_path(&mut self, path: BezPath) -> &mut Self {
        self.push(DrawCommand::StrokePath(path))
    }

    /// Draw `image` scaled into `dest`.
    pub fn draw_image(&mut self, image: Arc<RasterBuffer>, dest: Rect) -> &mut Self {
        self.push(DrawCommand::DrawImage { image, dest })
    }

    /// Open a group composited at `opacity` (clamped to `0..=1`).
    pub fn push_opacity_layer(&mut self, opacity: f32) -> &mut Self {
        self.layer_depth += 1;
        self.push(DrawCommand::PushOpacityLayer(opacity.clamp(0.0, 1.0)))
    }

    /// Open a group clipped to `clip`.
    pub fn push_clip_layer(&mut self, clip: BezPath) -> &mut Self {
        self.layer_depth += 1;
        self.push(DrawCommand::PushClipLayer(clip))
    }

    /// Close the innermost group.
    pub fn pop_layer(&mut self) -> PictorResult<&mut Self> {
        if self.layer_depth == 0 {
            return Err(PictorError::recording("pop_layer without an open layer"));
        }
        self.layer_depth -= 1;
        Ok(self.push(DrawCommand::PopLayer))
    }

    fn push(&mut self, cmd: DrawCommand) -> &mut Self {
        self.commands.push(cmd);
        self
    }

    /// Close any open layers and hand over the command list.
    pub(crate) fn into_commands(mut self) -> Vec<DrawCommand> {
        while self.layer_depth > 0 {
            self.layer_depth -= 1;
            self.commands.push(DrawCommand::PopLayer);
        }
        self.commands
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recording/canvas.rs"]
mod tests;
