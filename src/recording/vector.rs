use std::sync::Arc;

use crate::foundation::core::Size;
use crate::recording::command::DrawCommand;

/// Immutable, replayable command list plus the logical extent it covers.
///
/// Produced once when a [`crate::RecordingSession`] finalizes; afterwards it can only be played
/// back. Cloning is cheap and shares the command list.
#[derive(Clone, Debug)]
pub struct VectorRecording {
    commands: Arc<[DrawCommand]>,
    cull: Size,
}

impl VectorRecording {
    pub(crate) fn new(commands: Vec<DrawCommand>, cull: Size) -> Self {
        Self {
            commands: commands.into(),
            cull,
        }
    }

    /// Bounding extent fixed when recording began.
    pub fn cull_size(&self) -> Size {
        self.cull
    }

    /// Recorded commands in replay order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands that put pixels on the surface.
    pub fn drawing_command_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_drawing()).count()
    }
}
