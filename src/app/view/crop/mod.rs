// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: selection state dragged out on the canvas.

mod selection;

pub use selection::CropSelection;
