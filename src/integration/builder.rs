//! Builder for creating TrackedObject values from various box formats.

use crate::integration::TrackedObject;
use crate::stop::{Region, TrackId};

/// Builder for creating `TrackedObject` values from various input formats.
#[derive(Debug, Clone, Default)]
pub struct TrackedObjectBuilder {
    track_id: TrackId,
    class_id: Option<usize>,
    region: Region,
}

impl TrackedObjectBuilder {
    /// Create a new builder.
    pub fn new(track_id: TrackId) -> Self {
        Self {
            track_id,
            ..Self::default()
        }
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.region = Region::from_tlbr(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f64, cy: f64, w: f64, h: f64) -> Self {
        self.region = Region::new(cx, cy, w, h);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, l: f64, t: f64, w: f64, h: f64) -> Self {
        self.region = Region::from_tlwh(l, t, w, h);
        self
    }

    /// Set the detector class ID.
    pub fn class_id(mut self, class_id: usize) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Build the final `TrackedObject`.
    pub fn build(self) -> TrackedObject {
        TrackedObject::new(self.track_id, self.class_id, self.region)
    }
}
