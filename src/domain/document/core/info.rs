// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/info.rs
//
// Read-only description of the current image for the parameter panel.

use std::fmt;
use std::path::PathBuf;

use image::ColorType;

/// Channel layout of a bitmap, named the way image tools usually show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit luminance.
    L,
    /// 8-bit luminance with alpha.
    La,
    Rgb,
    Rgba,
    /// Anything wider than 8 bits per channel.
    Other(ColorType),
}

impl From<ColorType> for ColorMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 => Self::L,
            ColorType::La8 => Self::La,
            ColorType::Rgb8 => Self::Rgb,
            ColorType::Rgba8 => Self::Rgba,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L => write!(f, "L"),
            Self::La => write!(f, "LA"),
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
            Self::Other(color) => write!(f, "{color:?}"),
        }
    }
}

/// Snapshot of the session's current image, computed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// On-disk size of the source file at the time of the query. This is the
    /// size of the file that was loaded, not of the edited image.
    pub filesize_bytes: Option<u64>,
    pub color_mode: ColorMode,
}
