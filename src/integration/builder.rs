//! Builder for creating Observation objects from various box formats.

use crate::counter::{Observation, TrackId};

/// Builder for creating `Observation` objects from various box formats.
///
/// Boxes are stored in centre format, which is what trackers such as
/// YOLO-style `xywh` outputs report.
#[derive(Debug, Clone, Default)]
pub struct ObservationBuilder {
    track_id: TrackId,
    cx: f32,
    cy: f32,
    w: f32,
    h: f32,
    class_id: u32,
}

impl ObservationBuilder {
    /// Create a new observation builder.
    pub fn new(track_id: TrackId) -> Self {
        Self {
            track_id,
            ..Self::default()
        }
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.cx = cx;
        self.cy = cy;
        self.w = w;
        self.h = h;
        self
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.w = x2 - x1;
        self.h = y2 - y1;
        self.cx = x1 + self.w / 2.0;
        self.cy = y1 + self.h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, l: f32, t: f32, w: f32, h: f32) -> Self {
        self.w = w;
        self.h = h;
        self.cx = l + w / 2.0;
        self.cy = t + h / 2.0;
        self
    }

    /// Set the detector class.
    pub fn class_id(mut self, class_id: u32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Build the final `Observation`.
    pub fn build(self) -> Observation {
        Observation::new(self.track_id, self.cx, self.cy, self.w, self.h, self.class_id)
    }
}
