// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: user actions and canvas gestures.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // File.
    OpenPath(PathBuf),
    /// Raw payload of a drag-and-drop onto the canvas.
    FileDropped(String),
    SaveAs(PathBuf),

    // Edits.
    /// Crop to the current canvas selection.
    ApplyCrop,
    /// Crop to a rectangle given directly in image coordinates.
    CropTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Grayscale,
    /// Resize using the text of the width/height fields.
    Resize {
        width: String,
        height: String,
    },
    ToggleKeepAspect,
    Reset,

    // Crop selection (canvas coordinates).
    CropDragStart {
        x: f32,
        y: f32,
    },
    CropDragMove {
        x: f32,
        y: f32,
    },
    CropDragEnd {
        x: f32,
        y: f32,
    },
    /// Double click on the canvas.
    CancelCrop,

    // View.
    CanvasResized {
        width: u32,
        height: u32,
    },

    // Errors.
    ClearError,
}
