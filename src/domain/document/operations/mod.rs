// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs
//
// Pure edit operations on bitmaps. Each one produces a new image and never
// touches its input.

pub mod crop;
pub mod grayscale;
pub mod resize;

pub use crop::CropRegion;
pub use grayscale::grayscale;
pub use resize::ResizeRequest;
