// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model.

use image::DynamicImage;

use crate::domain::document::error::{EditError, EditResult};

/// Crop region in pixel coordinates.
///
/// Pure domain model - a half-open rectangle `[x, x + width) x [y, y + height)`
/// that is guaranteed to lie inside the image it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a region from two corners given in (possibly fractional) image
    /// coordinates.
    ///
    /// Each coordinate is rounded half-to-even and clamped to the image bounds
    /// independently. The corners are not reordered: an inverted rectangle is
    /// rejected just like an empty one.
    pub fn from_corners(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        image_width: u32,
        image_height: u32,
    ) -> EditResult<Self> {
        let left = clamp_coordinate(x1, image_width)?;
        let right = clamp_coordinate(x2, image_width)?;
        let top = clamp_coordinate(y1, image_height)?;
        let bottom = clamp_coordinate(y2, image_height)?;

        if right <= left || bottom <= top {
            return Err(EditError::invalid_argument(format!(
                "crop rectangle ({left}, {top}) - ({right}, {bottom}) is empty or inverted"
            )));
        }

        Ok(Self::new(left, top, right - left, bottom - top))
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Copy the region out of `image` into a new bitmap.
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        image.crop_imm(self.x, self.y, self.width, self.height)
    }
}

fn clamp_coordinate(value: f64, limit: u32) -> EditResult<u32> {
    if !value.is_finite() {
        return Err(EditError::invalid_argument(format!(
            "crop coordinate {value} is not a finite number"
        )));
    }
    let rounded = value.round_ties_even().clamp(0.0, f64::from(limit));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pixel = rounded as u32;
    Ok(pixel)
}
