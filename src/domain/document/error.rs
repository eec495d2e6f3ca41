// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/error.rs
//
// Error type shared by the edit session, its operations and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, editing or saving an image.
///
/// An operation that returns an error leaves the session untouched.
#[derive(Debug, Error)]
pub enum EditError {
    /// The file to load does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An edit was requested before any image was loaded.
    #[error("no image loaded")]
    InvalidState,

    /// Arguments were rejected (degenerate crop, non-finite size, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The save path names a format we do not write.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type EditResult<T> = Result<T, EditError>;

impl EditError {
    pub(crate) fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
