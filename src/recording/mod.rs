//! Scoped recording of drawing commands into a [`crate::Picture`].
//!
//! A [`session::RecordingSession`] hands out a [`canvas::RecordingCanvas`]; on scope exit the
//! captured commands freeze into a [`vector::VectorRecording`].

/// Drawing surface that captures commands.
pub mod canvas;
/// Command and paint types.
pub mod command;
/// Session lifecycle.
pub mod session;
/// Frozen, replayable recordings.
pub mod vector;
