// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/params.rs
//
// Parameter panel: the current image's info as display lines.

use crate::constant::{SIZE_STEP, SIZE_UNIT_OVERFLOW, SIZE_UNITS};
use crate::domain::document::ImageInfo;

/// Panel text shown when nothing is loaded.
pub const EMPTY_PANEL: &str = "(no image)";

/// Lines of the parameter panel for `info`.
pub fn panel_lines(info: Option<&ImageInfo>) -> Vec<String> {
    let Some(info) = info else {
        return vec![EMPTY_PANEL.to_string()];
    };

    vec![
        format!("Path: {}", info.path.display()),
        format!("Format: {}", info.format),
        format!("Width: {} px", info.width),
        format!("Height: {} px", info.height),
        format!("Mode: {}", info.color_mode),
        format!("File size: {}", human_size(info.filesize_bytes)),
    ]
}

/// Format a byte count with binary units, e.g. `2 KB`.
pub fn human_size(size: Option<u64>) -> String {
    let Some(size) = size else {
        return "N/A".to_string();
    };

    #[allow(clippy::cast_precision_loss)]
    let mut value = size as f64;
    for unit in SIZE_UNITS {
        if value < SIZE_STEP {
            return format!("{value:.0} {unit}");
        }
        value /= SIZE_STEP;
    }
    format!("{value:.2} {SIZE_UNIT_OVERFLOW}")
}
