// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/fixture.rs
//
// Test images and scratch files.

use std::path::PathBuf;

use image::{DynamicImage, Rgba, RgbaImage};

/// Opaque image whose red, green and blue channels all vary.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 7 % 256) as u8,
            255,
        ])
    }))
}

/// Colored image with a constant, partially transparent alpha.
pub fn translucent(width: u32, height: u32, alpha: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([200, 40, 90, alpha]),
    ))
}

/// Fresh scratch directory under the system temp dir, unique per test name.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pictura-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Write `image` as PNG into a scratch directory and return its path.
pub fn write_png(name: &str, image: &DynamicImage) -> PathBuf {
    let path = scratch_dir(name).join(format!("{name}.png"));
    image.save(&path).expect("write fixture png");
    path
}
