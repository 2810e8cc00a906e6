use crate::foundation::core::Size;
use crate::foundation::error::{PictorError, PictorResult};
use crate::picture::model::{Picture, PictureContent};
use crate::recording::canvas::RecordingCanvas;
use crate::recording::vector::VectorRecording;

enum SessionState {
    Recording(RecordingCanvas),
    Finalized,
}

/// Scoped recording bound to one [`Picture`].
///
/// The session mutably borrows its picture, so at most one session can be open per picture and
/// nothing else can read or export the picture while it is open. When the session is finished or
/// dropped, the captured commands become an immutable [`VectorRecording`] that replaces the
/// picture's previous content.
///
/// ```
/// use pictor::{Picture, Rect, Rgba8, Size};
///
/// let mut picture = Picture::new(Size::new(8.0, 8.0));
/// {
///     let mut session = picture.record()?;
///     session
///         .canvas()
///         .set_paint(Rgba8::opaque(255, 0, 0))
///         .fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
/// }
/// assert!(picture.as_recording().is_some());
/// assert!(picture.pixels().is_none());
/// # Ok::<(), pictor::PictorError>(())
/// ```
pub struct RecordingSession<'a> {
    picture: &'a mut Picture,
    extent: Size,
    state: SessionState,
}

impl<'a> RecordingSession<'a> {
    /// Open a session, fixing the recording extent to `picture.size()`.
    ///
    /// Fails when the extent is zero, negative or non-finite, and when the picture already holds
    /// a vector recording.
    #[tracing::instrument(level = "debug", skip(picture), fields(kind = ?picture.kind()))]
    pub fn begin(picture: &'a mut Picture) -> PictorResult<Self> {
        match picture.content() {
            PictureContent::Vector(_) => {
                return Err(PictorError::recording(
                    "picture already holds a vector recording",
                ));
            }
            PictureContent::SizeOnly(_) | PictureContent::Raster(_) => {}
        }

        let extent = picture.size();
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(extent.width) || !valid(extent.height) {
            return Err(PictorError::recording(format!(
                "invalid recording extent {}x{}",
                extent.width, extent.height
            )));
        }

        Ok(Self {
            picture,
            extent,
            state: SessionState::Recording(RecordingCanvas::new(extent)),
        })
    }

    /// Extent captured when the session began.
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Drawing surface for this session.
    pub fn canvas(&mut self) -> &mut RecordingCanvas {
        match &mut self.state {
            SessionState::Recording(canvas) => canvas,
            SessionState::Finalized => unreachable!("recording session used after finalization"),
        }
    }

    /// Number of commands recorded so far.
    pub fn command_count(&self) -> usize {
        match &self.state {
            SessionState::Recording(canvas) => canvas.command_count(),
            SessionState::Finalized => 0,
        }
    }

    /// Finalize now instead of at scope exit.
    pub fn finish(mut self) {
        self.finalize();
    }

    fn finalize(&mut self) {
        let state = std::mem::replace(&mut self.state, SessionState::Finalized);
        let SessionState::Recording(canvas) = state else {
            return;
        };
        let recording = VectorRecording::new(canvas.into_commands(), self.extent);
        tracing::debug!(
            commands = recording.len(),
            width = self.extent.width,
            height = self.extent.height,
            "recording finalized"
        );
        self.picture
            .replace_content(PictureContent::Vector(recording));
    }
}

impl Drop for RecordingSession<'_> {
    fn drop(&mut self) {
        self.finalize();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recording/session.rs"]
mod tests;
