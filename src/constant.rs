// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Largest width or height a resize may produce (guards against runaway allocations).
pub const MAX_DIMENSION: u32 = 32_768;

/// Smallest dimension any resize or display scaling may produce.
pub const MIN_DIMENSION: u32 = 1;

/// Extension appended when a save path has none.
pub const DEFAULT_SAVE_EXT: &str = "png";

/// Minimum canvas size assumed for layout (before the window is measured).
pub const MIN_CANVAS_SIZE: u32 = 200;

/// Minimum drawable area inside the canvas after the margin is removed.
pub const MIN_DRAWABLE_SIZE: u32 = 100;

/// Units for human readable file sizes, smallest first.
pub const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Unit used once the size exceeds every entry in `SIZE_UNITS`.
pub const SIZE_UNIT_OVERFLOW: &str = "TB";

/// Bytes per unit step for human readable file sizes.
pub const SIZE_STEP: f64 = 1024.0;
