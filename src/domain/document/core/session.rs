// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/session.rs
//
// Edit session: the original image, the edited image and where they came from.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};

use super::info::{ColorMode, ImageInfo};
use crate::domain::document::error::{EditError, EditResult};
use crate::domain::document::operations::{self, CropRegion, ResizeRequest};

/// Everything that exists only once an image has been loaded.
#[derive(Debug, Clone)]
struct LoadedImage {
    source_path: PathBuf,
    source_format: String,
    /// Snapshot taken at load time. Only `reset_to_original` reads it.
    original: DynamicImage,
    /// Result of the edits applied so far. Replaced, never mutated in place.
    current: DynamicImage,
}

/// Holds the single image being edited.
///
/// The session starts empty. `load` fills it (replacing whatever was there)
/// and every edit swaps `current` for a new bitmap. A failed call leaves the
/// session exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    loaded: Option<LoadedImage>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image from disk and make it both the original and the current
    /// image.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> EditResult<&DynamicImage> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EditError::NotFound(path.to_path_buf()));
        }

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let source_format = format_name(reader.format(), path);
        let decoded = DynamicImage::ImageRgba8(reader.decode()?.to_rgba8());

        log::info!(
            "Loaded {} ({}x{}, {})",
            path.display(),
            decoded.width(),
            decoded.height(),
            source_format
        );

        let loaded = self.loaded.insert(LoadedImage {
            source_path: path.to_path_buf(),
            source_format,
            original: decoded.clone(),
            current: decoded,
        });
        Ok(&loaded.current)
    }

    /// Crop the current image to the rectangle between two corners.
    ///
    /// See [`CropRegion::from_corners`] for rounding and clamping.
    pub fn crop(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> EditResult<&DynamicImage> {
        let loaded = self.loaded_mut()?;
        let region = CropRegion::from_corners(
            x1,
            y1,
            x2,
            y2,
            loaded.current.width(),
            loaded.current.height(),
        )?;
        log::debug!("Crop to {:?}", region.as_tuple());

        loaded.current = region.apply(&loaded.current);
        Ok(&loaded.current)
    }

    /// Convert the current image to grayscale. Alpha is not preserved.
    pub fn to_grayscale(&mut self) -> EditResult<&DynamicImage> {
        let loaded = self.loaded_mut()?;
        log::debug!("Grayscale");

        loaded.current = operations::grayscale(&loaded.current);
        Ok(&loaded.current)
    }

    /// Resize the current image.
    ///
    /// See [`ResizeRequest`] for how the output size is derived.
    pub fn resize(&mut self, width: f64, height: f64, keep_aspect: bool) -> EditResult<&DynamicImage> {
        let loaded = self.loaded_mut()?;
        let request = ResizeRequest::new(width, height, keep_aspect);
        let resized = request.apply(&loaded.current)?;
        log::debug!(
            "Resize {}x{} -> {}x{} (keep aspect: {keep_aspect})",
            loaded.current.width(),
            loaded.current.height(),
            resized.width(),
            resized.height()
        );

        loaded.current = resized;
        Ok(&loaded.current)
    }

    /// Replace the current image with a fresh copy of the original.
    ///
    /// Returns `None` if nothing was ever loaded.
    pub fn reset_to_original(&mut self) -> Option<&DynamicImage> {
        let loaded = self.loaded.as_mut()?;
        log::debug!("Reset to original");

        loaded.current = loaded.original.clone();
        Some(&loaded.current)
    }

    /// Describe the current image, or `None` when nothing is loaded.
    ///
    /// The file size is read from disk on every call; if that fails it is
    /// reported as unknown rather than as an error.
    pub fn info(&self) -> Option<ImageInfo> {
        let loaded = self.loaded.as_ref()?;
        let filesize_bytes = std::fs::metadata(&loaded.source_path)
            .map(|meta| meta.len())
            .ok();

        Some(ImageInfo {
            path: loaded.source_path.clone(),
            format: loaded.source_format.clone(),
            width: loaded.current.width(),
            height: loaded.current.height(),
            filesize_bytes,
            color_mode: ColorMode::from(loaded.current.color()),
        })
    }

    /// An owned copy of the current image, independent of the session.
    pub fn current_image(&self) -> Option<DynamicImage> {
        self.current().cloned()
    }

    /// Borrow the current image for display.
    pub fn current(&self) -> Option<&DynamicImage> {
        self.loaded.as_ref().map(|loaded| &loaded.current)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Dimensions of the current image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.current().map(|image| (image.width(), image.height()))
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|loaded| loaded.source_path.as_path())
    }

    fn loaded_mut(&mut self) -> EditResult<&mut LoadedImage> {
        self.loaded.as_mut().ok_or(EditError::InvalidState)
    }
}

/// Name of the detected format, falling back to the file extension.
fn format_name(format: Option<ImageFormat>, path: &Path) -> String {
    match format {
        Some(format) => format!("{format:?}").to_uppercase(),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_uppercase)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::fixture;

    fn loaded_session(name: &str, image: &DynamicImage) -> (EditSession, PathBuf) {
        let path = fixture::write_png(name, image);
        let mut session = EditSession::new();
        session.load(&path).unwrap();
        (session, path)
    }

    #[test]
    fn test_empty_session() {
        let mut session = EditSession::new();
        assert!(!session.is_loaded());
        assert!(session.info().is_none());
        assert!(session.current_image().is_none());
        assert!(session.reset_to_original().is_none());
        assert!(matches!(session.crop(0.0, 0.0, 1.0, 1.0), Err(EditError::InvalidState)));
        assert!(matches!(session.to_grayscale(), Err(EditError::InvalidState)));
        assert!(matches!(session.resize(10.0, 10.0, true), Err(EditError::InvalidState)));
    }

    #[test]
    fn test_load_populates_session() {
        let image = fixture::translucent(12, 8, 100);
        let (session, path) = loaded_session("load", &image);

        let info = session.info().unwrap();
        assert_eq!(info.path, path);
        assert_eq!(info.format, "PNG");
        assert_eq!((info.width, info.height), (12, 8));
        assert_eq!(info.color_mode, ColorMode::Rgba);
        assert_eq!(
            info.filesize_bytes,
            Some(std::fs::metadata(&path).unwrap().len())
        );
        assert_eq!(session.current_image().unwrap().to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn test_load_expands_to_rgba() {
        let rgb = DynamicImage::ImageRgb8(fixture::gradient(5, 5).to_rgb8());
        let (session, _) = loaded_session("load-rgb", &rgb);
        assert!(session.current().unwrap().as_rgba8().is_some());
    }

    #[test]
    fn test_format_falls_back_to_extension() {
        assert_eq!(format_name(None, Path::new("/tmp/picture.tif")), "TIF");
        assert_eq!(format_name(None, Path::new("/tmp/no_extension")), "");
        assert_eq!(format_name(Some(ImageFormat::Jpeg), Path::new("x.png")), "JPEG");
    }

    #[test]
    fn test_load_detects_format_from_content() {
        // PNG bytes behind a misleading extension.
        let dir = fixture::scratch_dir("sniff");
        let path = dir.join("actually-png.bmp");
        fixture::gradient(3, 3)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let mut session = EditSession::new();
        session.load(&path).unwrap();
        assert_eq!(session.info().unwrap().format, "PNG");
    }

    #[test]
    fn test_load_missing_keeps_prior_state() {
        let image = fixture::gradient(6, 4);
        let (mut session, path) = loaded_session("missing", &image);
        session.crop(1.0, 1.0, 5.0, 3.0).unwrap();

        let missing = path.with_file_name("nope.png");
        let err = session.load(&missing).unwrap_err();
        assert!(matches!(err, EditError::NotFound(p) if p == missing));

        assert_eq!(session.source_path(), Some(path.as_path()));
        assert_eq!(session.dimensions(), Some((4, 2)));
    }

    #[test]
    fn test_load_undecodable_keeps_prior_state() {
        let image = fixture::gradient(6, 4);
        let (mut session, path) = loaded_session("garbage", &image);

        let garbage = path.with_file_name("garbage.png");
        std::fs::write(&garbage, b"definitely not an image").unwrap();
        assert!(session.load(&garbage).is_err());
        assert_eq!(session.source_path(), Some(path.as_path()));
        assert_eq!(session.dimensions(), Some((6, 4)));
    }

    #[test]
    fn test_second_load_replaces_session() {
        let (mut session, _) = loaded_session("first", &fixture::gradient(6, 4));
        let second = fixture::write_png("second", &fixture::gradient(3, 9));

        session.load(&second).unwrap();
        assert_eq!(session.dimensions(), Some((3, 9)));
        session.to_grayscale().unwrap();
        session.reset_to_original().unwrap();
        assert_eq!(
            session.current_image().unwrap().to_rgba8(),
            fixture::gradient(3, 9).to_rgba8()
        );
    }

    #[test]
    fn test_full_extent_crop_is_identity() {
        let image = fixture::gradient(10, 7);
        let (mut session, _) = loaded_session("full-crop", &image);
        let before = session.current_image().unwrap();

        let after = session.crop(0.0, 0.0, 10.0, 7.0).unwrap();
        assert_eq!(after.to_rgba8(), before.to_rgba8());
    }

    #[test]
    fn test_failed_crop_leaves_current() {
        let (mut session, _) = loaded_session("bad-crop", &fixture::gradient(10, 7));
        let err = session.crop(20.0, 0.0, 30.0, 7.0).unwrap_err();
        assert!(matches!(err, EditError::InvalidArgument(_)));
        assert_eq!(session.dimensions(), Some((10, 7)));
    }

    #[test]
    fn test_resize_modes() {
        let (mut session, _) = loaded_session("resize", &fixture::gradient(200, 200));

        let resized = session.resize(100.0, 50.0, true).unwrap();
        assert_eq!((resized.width(), resized.height()), (50, 50));

        let resized = session.resize(300.0, 10.0, false).unwrap();
        assert_eq!((resized.width(), resized.height()), (300, 10));
    }

    #[test]
    fn test_grayscale_drops_alpha() {
        let (mut session, _) = loaded_session("gray", &fixture::translucent(4, 4, 10));
        let gray = session.to_grayscale().unwrap().to_rgba8();
        assert!(gray.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2] && p.0[3] == 255));
        assert_eq!(session.info().unwrap().color_mode, ColorMode::Rgba);
    }

    #[test]
    fn test_reset_restores_loaded_pixels() {
        let image = fixture::gradient(30, 20);
        let (mut session, _) = loaded_session("reset", &image);
        let after_load = session.current_image().unwrap();

        session.crop(3.0, 3.0, 25.0, 15.0).unwrap();
        session.to_grayscale().unwrap();
        session.resize(7.0, 7.0, false).unwrap();
        session.reset_to_original().unwrap();

        assert_eq!(session.current_image().unwrap().to_rgba8(), after_load.to_rgba8());
    }

    #[test]
    fn test_current_image_is_independent_copy() {
        let (session, _) = loaded_session("copy", &fixture::gradient(4, 4));
        let mut copy = session.current_image().unwrap();
        if let Some(buffer) = copy.as_mut_rgba8() {
            buffer.put_pixel(0, 0, image::Rgba([1, 2, 3, 4]));
        }
        assert_ne!(
            session.current().unwrap().to_rgba8().get_pixel(0, 0),
            &image::Rgba([1, 2, 3, 4])
        );
    }

    #[test]
    fn test_info_swallows_missing_file() {
        let (session, path) = loaded_session("vanished", &fixture::gradient(4, 4));
        std::fs::remove_file(&path).unwrap();

        let info = session.info().unwrap();
        assert_eq!(info.filesize_bytes, None);
        assert_eq!((info.width, info.height), (4, 4));
    }

    #[test]
    fn test_info_reports_source_size_not_edit() {
        let (mut session, path) = loaded_session("size", &fixture::gradient(64, 64));
        let on_disk = std::fs::metadata(&path).unwrap().len();
        session.resize(2.0, 2.0, false).unwrap();
        assert_eq!(session.info().unwrap().filesize_bytes, Some(on_disk));
    }
}
