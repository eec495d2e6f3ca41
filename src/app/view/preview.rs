// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/preview.rs
//
// Preview pane thumbnail.

use image::DynamicImage;
use image::imageops::FilterType;

use super::canvas::scaled_side;

/// Shrink `image` so its longer side fits in `max_side`. Never enlarges.
pub fn render_preview(image: &DynamicImage, max_side: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    let side = f64::from(max_side);
    let scale = (side / f64::from(width))
        .min(side / f64::from(height))
        .min(1.0);

    let (new_width, new_height) = (scaled_side(width, scale), scaled_side(height, scale));
    if (new_width, new_height) == (width, height) {
        return image.clone();
    }
    image.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
