// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Center canvas: where the current image is drawn and how canvas
// coordinates map back to image pixels.

use image::DynamicImage;
use image::imageops::FilterType;

use crate::config::AppConfig;
use crate::constant::{MIN_CANVAS_SIZE, MIN_DIMENSION, MIN_DRAWABLE_SIZE};

/// Placement of the image on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayLayout {
    /// Display pixels per image pixel. Never above 1.0: images are shrunk to
    /// fit but never enlarged.
    pub scale: f64,
    /// Canvas position of the image's top-left corner.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Size of the displayed bitmap.
    pub width: u32,
    pub height: u32,
}

impl DisplayLayout {
    /// Fit an image of `image_width` x `image_height` onto the canvas.
    pub fn fit(image_width: u32, image_height: u32, config: &AppConfig) -> Self {
        let canvas_w = config.canvas_width.max(MIN_CANVAS_SIZE);
        let canvas_h = config.canvas_height.max(MIN_CANVAS_SIZE);
        let margin = config.canvas_margin;

        let avail_w = f64::from(canvas_w.saturating_sub(margin).max(MIN_DRAWABLE_SIZE));
        let avail_h = f64::from(canvas_h.saturating_sub(margin).max(MIN_DRAWABLE_SIZE));

        let scale = (avail_w / f64::from(image_width))
            .min(avail_h / f64::from(image_height))
            .min(1.0);
        let scale = if scale > 0.0 { scale } else { 1.0 };

        let offset = f64::from(margin / 2);
        Self {
            scale,
            offset_x: offset,
            offset_y: offset,
            width: scaled_side(image_width, scale),
            height: scaled_side(image_height, scale),
        }
    }

    /// Map a canvas position to (fractional) image coordinates.
    pub fn to_image(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }

    /// Render the bitmap shown on the canvas.
    pub fn render(&self, image: &DynamicImage) -> DynamicImage {
        if self.width == image.width() && self.height == image.height() {
            return image.clone();
        }
        image.resize_exact(self.width, self.height, FilterType::Lanczos3)
    }
}

/// `side * scale`, truncated, but at least one pixel.
pub fn scaled_side(side: u32, scale: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (f64::from(side) * scale) as u32;
    scaled.max(MIN_DIMENSION)
}
