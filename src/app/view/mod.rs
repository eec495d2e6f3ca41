// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// What the window shows: canvas layout, crop selection, preview and the
// parameter panel.

pub mod canvas;
pub mod crop;
pub mod params;
pub mod preview;
