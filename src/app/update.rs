// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: turn user actions into session calls and refresh the view.

use std::path::Path;

use super::drop::parse_drop_payload;
use super::message::AppMessage;
use super::model::AppModel;
use crate::domain::document::export;

/// Apply one message to the model.
pub fn update(model: &mut AppModel, message: AppMessage) {
    model.notice = None;

    match message {
        AppMessage::OpenPath(path) => {
            let path = model.config.resolve_open_path(&path);
            open(model, &path);
        }

        AppMessage::FileDropped(payload) => {
            let Some(path) = parse_drop_payload(&payload) else {
                return;
            };
            let path = model.config.resolve_open_path(&path);
            if path.exists() {
                open(model, &path);
            } else {
                model.push_log(format!("Drop: file not found {}", path.display()));
            }
        }

        AppMessage::SaveAs(path) => {
            let Some(image) = model.session.current_image() else {
                model.set_notice("No image to save");
                return;
            };
            match export::save_image(&image, &path) {
                Ok(written) => {
                    let msg = format!("Saved: {}", written.display());
                    model.push_log(msg.clone());
                    model.set_notice(msg);
                }
                Err(e) => model.set_error(e.to_string()),
            }
        }

        AppMessage::ApplyCrop => {
            if !model.crop_selection.has_selection() {
                model.set_notice("No selection");
                return;
            }
            let Some((x1, y1, x2, y2)) = model.selection_in_image() else {
                model.set_notice("No selection");
                return;
            };
            if crop(model, x1, y1, x2, y2) {
                model.crop_selection.reset();
            }
        }

        AppMessage::CropTo { x1, y1, x2, y2 } => {
            crop(model, x1, y1, x2, y2);
        }

        AppMessage::Grayscale => match model.session.to_grayscale().map(|_| ()) {
            Ok(()) => model.refresh_view(),
            Err(e) => model.set_error(e.to_string()),
        },

        AppMessage::Resize { width, height } => {
            let (width, height) = (width.trim(), height.trim());
            if width.is_empty() || height.is_empty() {
                model.set_notice("Enter width and height");
                return;
            }
            let (width, height) = match (width.parse::<i64>(), height.parse::<i64>()) {
                (Ok(w), Ok(h)) => (w, h),
                _ => {
                    model.set_error(format!("invalid size: {width} x {height}"));
                    return;
                }
            };

            #[allow(clippy::cast_precision_loss)]
            let result = model
                .session
                .resize(width as f64, height as f64, model.keep_aspect)
                .map(|_| ());
            match result {
                Ok(()) => model.refresh_view(),
                Err(e) => model.set_error(e.to_string()),
            }
        }

        AppMessage::ToggleKeepAspect => {
            model.keep_aspect = !model.keep_aspect;
        }

        AppMessage::Reset => {
            if model.session.reset_to_original().is_some() {
                model.refresh_view();
            }
            model.crop_selection.reset();
        }

        AppMessage::CropDragStart { x, y } => {
            if model.session.is_loaded() {
                model.crop_selection.start_new_selection(x, y);
            }
        }

        AppMessage::CropDragMove { x, y } => {
            model.crop_selection.update_drag(x, y);
        }

        AppMessage::CropDragEnd { x, y } => {
            let min_size = model.config.min_selection;
            model.crop_selection.end_drag(x, y, min_size);
        }

        AppMessage::CancelCrop => {
            model.crop_selection.reset();
        }

        AppMessage::CanvasResized { width, height } => {
            model.config.canvas_width = width;
            model.config.canvas_height = height;
            if model.session.is_loaded() {
                model.refresh_view();
            }
        }

        AppMessage::ClearError => {
            model.clear_error();
        }
    }
}

fn open(model: &mut AppModel, path: &Path) {
    let result = model.session.load(path).map(|_| ());
    match result {
        Ok(()) => {
            model.crop_selection.reset();
            model.refresh_view();
        }
        Err(e) => model.set_error(e.to_string()),
    }
}

/// Crop and refresh. Returns whether the crop was applied.
fn crop(model: &mut AppModel, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let result = model.session.crop(x1, y1, x2, y2).map(|_| ());
    match result {
        Ok(()) => {
            model.refresh_view();
            true
        }
        Err(e) => {
            model.set_error(e.to_string());
            false
        }
    }
}
