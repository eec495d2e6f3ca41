// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop selection state in canvas coordinates.

/// Rectangle being dragged out on the canvas.
///
/// Coordinates are canvas pixels. Mapping to image pixels happens only when
/// the crop is applied, through the current `DisplayLayout`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropSelection {
    /// Fixed corner and moving corner while dragging; normalized
    /// (top-left, bottom-right) once the drag ends.
    pub region: Option<((f32, f32), (f32, f32))>,
    pub is_dragging: bool,
    pub drag_start: Option<(f32, f32)>,
}

impl CropSelection {
    pub fn start_new_selection(&mut self, x: f32, y: f32) {
        self.region = Some(((x, y), (x, y)));
        self.is_dragging = true;
        self.drag_start = Some((x, y));
    }

    pub fn update_drag(&mut self, x: f32, y: f32) {
        if !self.is_dragging {
            return;
        }
        if let Some(start) = self.drag_start {
            self.region = Some((start, (x, y)));
        }
    }

    /// Finish the drag at `(x, y)`.
    ///
    /// The corners are normalized; a selection narrower or shorter than
    /// `min_size` is dropped entirely.
    pub fn end_drag(&mut self, x: f32, y: f32, min_size: f32) {
        let Some((start_x, start_y)) = self.drag_start else {
            return;
        };

        let top_left = (start_x.min(x), start_y.min(y));
        let bottom_right = (start_x.max(x), start_y.max(y));

        self.is_dragging = false;
        self.drag_start = None;

        if bottom_right.0 - top_left.0 < min_size || bottom_right.1 - top_left.1 < min_size {
            self.reset();
        } else {
            self.region = Some((top_left, bottom_right));
        }
    }

    pub fn reset(&mut self) {
        self.region = None;
        self.is_dragging = false;
        self.drag_start = None;
    }

    pub fn has_selection(&self) -> bool {
        self.region.is_some() && !self.is_dragging
    }

    /// Finished selection as `(x0, y0, x1, y1)` in canvas coordinates.
    pub fn as_canvas_rect(&self) -> Option<(f32, f32, f32, f32)> {
        if self.is_dragging {
            return None;
        }
        self.region.map(|((x0, y0), (x1, y1))| (x0, y0, x1, y1))
    }
}
