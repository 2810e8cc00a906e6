use std::sync::Arc;

use crate::foundation::core::{Affine, BezPath, Rect, Rgba8};
use crate::raster::buffer::RasterBuffer;

/// Paint applied to subsequent fills and strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Uniform straight-alpha color.
    Solid(Rgba8),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Rgba8::BLACK)
    }
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}

/// Shape at the open ends of stroked paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat end at the endpoint.
    #[default]
    Butt,
    /// Flat end extended by half the stroke width.
    Square,
    /// Semicircular end.
    Round,
}

/// Shape at corners of stroked paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Sharp corner, limited by the miter limit.
    #[default]
    Miter,
    /// Cut-off corner.
    Bevel,
    /// Rounded corner.
    Round,
}

/// Stroke parameters applied to subsequent `stroke_path` calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in user units.
    pub width: f64,
    /// Corner style.
    pub join: LineJoin,
    /// End style.
    pub cap: LineCap,
    /// Miter limit ratio.
    pub miter_limit: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
            miter_limit: 4.0,
        }
    }
}

impl StrokeStyle {
    /// Default style with the given width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Return this style with a different join.
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Return this style with a different cap.
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// One recorded drawing command. Recordings replay these strictly in order.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// Replace the current transform.
    SetTransform(Affine),
    /// Replace the current paint.
    SetPaint(Paint),
    /// Replace the current stroke style.
    SetStroke(StrokeStyle),
    /// Fill an axis-aligned rectangle.
    FillRect(Rect),
    /// Fill a path (non-zero winding).
    FillPath(BezPath),
    /// Stroke a path with the current stroke style.
    StrokePath(BezPath),
    /// Draw a raster image scaled into `dest`.
    DrawImage {
        /// Shared source pixels.
        image: Arc<RasterBuffer>,
        /// Destination rectangle in user space.
        dest: Rect,
    },
    /// Begin a group composited with the given opacity.
    PushOpacityLayer(f32),
    /// Begin a group clipped to the given path.
    PushClipLayer(BezPath),
    /// End the innermost group.
    PopLayer,
}

impl DrawCommand {
    /// Return `true` for commands that put pixels on the surface.
    pub fn is_drawing(&self) -> bool {
        match self {
            Self::FillRect(_)
            | Self::FillPath(_)
            | Self::StrokePath(_)
            | Self::DrawImage { .. } => true,
            Self::SetTransform(_)
            | Self::SetPaint(_)
            | Self::SetStroke(_)
            | Self::PushOpacityLayer(_)
            | Self::PushClipLayer(_)
            | Self::PopLayer => false,
        }
    }
}
