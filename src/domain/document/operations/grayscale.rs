// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/grayscale.rs
//
// Grayscale conversion.

use image::{DynamicImage, GrayImage, Luma, Rgb};

/// Convert `image` to grayscale and expand it back to RGBA.
///
/// The conversion goes through RGB first, so the alpha channel is discarded
/// and every output pixel is fully opaque.
pub fn grayscale(image: &DynamicImage) -> DynamicImage {
    let rgb = image.to_rgb8();
    let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| luma(*rgb.get_pixel(x, y)));
    DynamicImage::ImageLuma8(gray).to_rgba8().into()
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded to nearest.
fn luma(Rgb([r, g, b]): Rgb<u8>) -> Luma<u8> {
    let weighted = u32::from(r) * 19_595 + u32::from(g) * 38_470 + u32::from(b) * 7_471;
    #[allow(clippy::cast_possible_truncation)]
    let value = ((weighted + 0x8000) >> 16) as u8;
    Luma([value])
}
