// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application. Built from defaults and
// overridden by command-line flags; nothing is persisted.

use std::path::{Path, PathBuf};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Optional default directory to open images from.
    pub default_image_dir: Option<PathBuf>,
    /// Canvas width in pixels used for the display layout.
    pub canvas_width: u32,
    /// Canvas height in pixels used for the display layout.
    pub canvas_height: u32,
    /// Space kept free around the displayed image (split evenly on both sides).
    pub canvas_margin: u32,
    /// Longest side of the preview pane image.
    pub preview_max_side: u32,
    /// Selections narrower or shorter than this (canvas pixels) are discarded.
    pub min_selection: f32,
    /// Initial state of the "keep aspect ratio" toggle.
    pub keep_aspect: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            canvas_width: 800,
            canvas_height: 600,
            canvas_margin: 20,
            preview_max_side: 240,
            min_selection: 5.0,
            keep_aspect: true,
        }
    }
}

impl AppConfig {
    /// Resolve a path given on the command line or dropped onto the canvas.
    ///
    /// Relative paths that do not exist in the working directory are looked up
    /// in `default_image_dir`. Anything else is returned unchanged so the
    /// caller reports the original path when it is missing.
    pub fn resolve_open_path(&self, path: &Path) -> PathBuf {
        if path.is_relative() && !path.exists() {
            if let Some(candidate) = self
                .default_image_dir
                .as_ref()
                .map(|dir| dir.join(path))
                .filter(|p| p.exists())
            {
                return candidate;
            }
        }
        path.to_path_buf()
    }
}
