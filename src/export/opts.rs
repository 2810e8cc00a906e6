use std::str::FromStr;

use crate::foundation::core::Rgba8;

/// Environment variable read by [`ExportOpts::from_env`].
pub const PNG_COMPRESSION_ENV: &str = "PICTOR_PNG_COMPRESSION";

/// PNG compression effort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PngCompression {
    /// Fastest encoding, larger files.
    Fast,
    /// Encoder default.
    #[default]
    Default,
    /// Smallest files, slowest encoding.
    Best,
}

impl FromStr for PngCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            other => Err(format!("unknown png compression '{other}'")),
        }
    }
}

impl From<PngCompression> for image::codecs::png::CompressionType {
    fn from(c: PngCompression) -> Self {
        match c {
            PngCompression::Fast => Self::Fast,
            PngCompression::Default => Self::Default,
            PngCompression::Best => Self::Best,
        }
    }
}

/// Options for rasterizing and encoding a picture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOpts {
    pub(crate) background: Option<Rgba8>,
    pub(crate) compression: PngCompression,
}

impl ExportOpts {
    /// Defaults overridden by environment variables.
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let compression = lookup(PNG_COMPRESSION_ENV)
            .and_then(|v| v.parse::<PngCompression>().ok())
            .unwrap_or_default();
        Self {
            compression,
            ..Self::default()
        }
    }

    /// Return options that composite the picture over an opaque or translucent background.
    pub fn with_background(mut self, background: Option<Rgba8>) -> Self {
        self.background = background;
        self
    }

    /// Return options with a different PNG compression effort.
    pub fn with_compression(mut self, compression: PngCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Configured background color.
    pub fn background(&self) -> Option<Rgba8> {
        self.background
    }

    /// Configured PNG compression.
    pub fn compression(&self) -> PngCompression {
        self.compression
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/opts.rs"]
mod tests;
