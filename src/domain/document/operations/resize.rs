// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/resize.rs
//
// Resize operation domain model.

use image::DynamicImage;
use image::imageops::FilterType;

use crate::constant::{MAX_DIMENSION, MIN_DIMENSION};
use crate::domain::document::error::{EditError, EditResult};

/// Requested output size for a resize.
///
/// With `keep_aspect` the request describes a bounding box: the smaller of the
/// two scale factors wins and both sides are rounded half-to-even. Without it
/// the requested sides are truncated and used as-is. Either way no side drops
/// below one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRequest {
    pub width: f64,
    pub height: f64,
    pub keep_aspect: bool,
}

impl ResizeRequest {
    pub fn new(width: f64, height: f64, keep_aspect: bool) -> Self {
        Self {
            width,
            height,
            keep_aspect,
        }
    }

    /// Compute the output dimensions for a source of `src_width` x `src_height`.
    pub fn target_dimensions(&self, src_width: u32, src_height: u32) -> EditResult<(u32, u32)> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(EditError::invalid_argument(format!(
                "resize target {}x{} is not finite",
                self.width, self.height
            )));
        }

        let (new_width, new_height) = if self.keep_aspect {
            let src_w = f64::from(src_width);
            let src_h = f64::from(src_height);
            let ratio = (self.width / src_w).min(self.height / src_h);
            (
                (src_w * ratio).round_ties_even(),
                (src_h * ratio).round_ties_even(),
            )
        } else {
            (self.width.trunc(), self.height.trunc())
        };

        Ok((to_dimension(new_width)?, to_dimension(new_height)?))
    }

    /// Resample `image` to the requested size with a Lanczos filter.
    pub fn apply(&self, image: &DynamicImage) -> EditResult<DynamicImage> {
        let (width, height) = self.target_dimensions(image.width(), image.height())?;
        Ok(image.resize_exact(width, height, FilterType::Lanczos3))
    }
}

fn to_dimension(value: f64) -> EditResult<u32> {
    let value = value.max(f64::from(MIN_DIMENSION));
    if value > f64::from(MAX_DIMENSION) {
        return Err(EditError::invalid_argument(format!(
            "resize dimension {value} exceeds {MAX_DIMENSION}"
        )));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pixels = value as u32;
    Ok(pixels)
}
