// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use image::DynamicImage;

use crate::app::view::canvas::DisplayLayout;
use crate::app::view::crop::CropSelection;
use crate::app::view::{params, preview};
use crate::config::AppConfig;
use crate::domain::document::EditSession;

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    pub config: AppConfig,

    // Document.
    pub session: EditSession,

    // View.
    pub layout: Option<DisplayLayout>,
    /// Bitmap drawn on the canvas (the current image scaled by `layout`).
    pub display: Option<DynamicImage>,
    pub preview: Option<DynamicImage>,
    /// Parameter panel lines.
    pub params: Vec<String>,

    // Tools.
    pub crop_selection: CropSelection,
    pub keep_aspect: bool,

    // UI state.
    pub log: Vec<String>,
    pub error: Option<String>,
    /// Informational message (nothing went wrong, but nothing happened).
    pub notice: Option<String>,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            keep_aspect: config.keep_aspect,
            config,
            session: EditSession::new(),
            layout: None,
            display: None,
            preview: None,
            params: params::panel_lines(None),
            crop_selection: CropSelection::default(),
            log: Vec::new(),
            error: None,
            notice: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        log::warn!("{msg}");
        self.push_log(format!("Error: {msg}"));
        self.error = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_notice<S: Into<String>>(&mut self, msg: S) {
        self.notice = Some(msg.into());
    }

    /// Append a line to the log pane.
    pub fn push_log<S: Into<String>>(&mut self, line: S) {
        self.log.push(line.into());
    }

    /// Redraw the canvas and preview from the session's current image.
    pub fn refresh_view(&mut self) {
        match self.session.current() {
            Some(image) => {
                let layout = DisplayLayout::fit(image.width(), image.height(), &self.config);
                self.display = Some(layout.render(image));
                self.preview = Some(preview::render_preview(image, self.config.preview_max_side));
                self.layout = Some(layout);
            }
            None => {
                self.layout = None;
                self.display = None;
                self.preview = None;
            }
        }
        self.refresh_params();
    }

    /// Rebuild the parameter panel and note the refresh in the log.
    pub fn refresh_params(&mut self) {
        self.params = params::panel_lines(self.session.info().as_ref());

        let name = self.session.source_path().map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        if let Some(name) = name {
            self.push_log(format!("Parameters updated: {name}"));
        }
    }

    /// Current selection mapped to image coordinates `(x1, y1, x2, y2)`.
    pub fn selection_in_image(&self) -> Option<(f64, f64, f64, f64)> {
        let layout = self.layout?;
        let (x0, y0, x1, y1) = self.crop_selection.as_canvas_rect()?;
        let (ix0, iy0) = layout.to_image(f64::from(x0), f64::from(y0));
        let (ix1, iy1) = layout.to_image(f64::from(x1), f64::from(y1));
        Some((ix0, iy0, ix1, iy1))
    }
}
