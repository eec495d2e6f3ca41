// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/export.rs
//
// Writing the edited image back to disk.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::constant::DEFAULT_SAVE_EXT;
use crate::domain::document::error::{EditError, EditResult};

/// Formats the editor writes.
pub const SAVE_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp];

/// Save `image` as RGB, picking the encoder from the file extension.
///
/// Alpha is dropped before encoding. A path without an extension is saved as
/// PNG with `.png` appended. Returns the path that was written.
pub fn save_image(image: &DynamicImage, path: &Path) -> EditResult<PathBuf> {
    let path = match path.extension() {
        Some(_) => path.to_path_buf(),
        None => path.with_extension(DEFAULT_SAVE_EXT),
    };
    let format = save_format(&path)?;

    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    rgb.save_with_format(&path, format)?;

    log::info!("Saved {} as {format:?}", path.display());
    Ok(path)
}

/// Encoder for `path`, or `UnsupportedFormat` if we do not write that extension.
pub fn save_format(path: &Path) -> EditResult<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    ImageFormat::from_extension(ext)
        .filter(|format| SAVE_FORMATS.contains(format))
        .ok_or_else(|| EditError::UnsupportedFormat(ext.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::fixture;

    #[test]
    fn test_save_format_by_extension() {
        assert_eq!(save_format(Path::new("a.png")).unwrap(), ImageFormat::Png);
        assert_eq!(save_format(Path::new("a.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(save_format(Path::new("a.jpeg")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(save_format(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
        assert!(matches!(
            save_format(Path::new("a.tiff")),
            Err(EditError::UnsupportedFormat(ext)) if ext == "tiff"
        ));
    }

    #[test]
    fn test_save_drops_alpha() {
        let dir = fixture::scratch_dir("save-rgb");
        let path = save_image(&fixture::translucent(5, 3, 40), &dir.join("out.png")).unwrap();

        let written = image::open(&path).unwrap();
        assert_eq!(written.color(), image::ColorType::Rgb8);
        assert_eq!((written.width(), written.height()), (5, 3));
    }

    #[test]
    fn test_save_appends_default_extension() {
        let dir = fixture::scratch_dir("save-ext");
        let path = save_image(&fixture::gradient(4, 4), &dir.join("untitled")).unwrap();

        assert_eq!(path, dir.join("untitled.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_jpeg_and_bmp() {
        let dir = fixture::scratch_dir("save-formats");
        let image = fixture::gradient(16, 16);
        for name in ["out.jpg", "out.bmp"] {
            let path = save_image(&image, &dir.join(name)).unwrap();
            let written = image::open(&path).unwrap();
            assert_eq!((written.width(), written.height()), (16, 16));
        }
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = fixture::scratch_dir("save-unsupported");
        let target = dir.join("out.gif");
        assert!(save_image(&fixture::gradient(4, 4), &target).is_err());
        assert!(!target.exists());
    }
}
