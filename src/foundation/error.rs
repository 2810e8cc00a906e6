use std::fmt;
use std::path::PathBuf;

/// Boxed lower-level cause carried by decode errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience result type used across pictor.
pub type PictorResult<T> = Result<T, PictorError>;

/// Why a decode failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// The source could not be opened or read.
    Open,
    /// The data is not in a recognized image format.
    UnrecognizedFormat,
    /// The pixel buffer could not be allocated.
    Allocation,
    /// The codec failed while decoding pixels.
    Pixels,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "cannot open source",
            Self::UnrecognizedFormat => "unrecognized image format",
            Self::Allocation => "pixel buffer allocation failed",
            Self::Pixels => "pixel decoding failed",
        };
        f.write_str(s)
    }
}

/// Top-level error taxonomy used by picture APIs.
#[derive(thiserror::Error, Debug)]
pub enum PictorError {
    /// Loading an image into a raster buffer failed.
    #[error("decode error: {kind} ({}): {source}", path.display())]
    Decode {
        /// Path of the decoded file, or a label such as `<memory>`.
        path: PathBuf,
        /// Failure category.
        kind: DecodeErrorKind,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// A recording session could not be opened or was misused.
    #[error("recording error: {0}")]
    Recording(String),

    /// Rasterizing or PNG-encoding a picture failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Writing output failed.
    #[error("io error: '{}': {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid caller-provided data (buffer sizes, dimensions).
    #[error("validation error: {0}")]
    Validation(String),
}

impl PictorError {
    /// Build a [`PictorError::Decode`] value.
    pub fn decode(
        path: impl Into<PathBuf>,
        kind: DecodeErrorKind,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Decode {
            path: path.into(),
            kind,
            source: source.into(),
        }
    }

    /// Build a [`PictorError::Recording`] value.
    pub fn recording(msg: impl Into<String>) -> Self {
        Self::Recording(msg.into())
    }

    /// Build a [`PictorError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PictorError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`PictorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Decode failure category, if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
