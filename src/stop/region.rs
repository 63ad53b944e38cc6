//! Tracker bounding regions and box-format conversions.

use crate::stop::geometry::Position;

/// Bounding region reported by the tracker, stored in XYWH format.
///
/// Supports conversion from the other common box formats:
/// - TLWH: Top-Left X, Top-Left Y, Width, Height
/// - TLBR: Top-Left X, Top-Left Y, Bottom-Right X, Bottom-Right Y
///
/// Only the centre takes part in stop detection; width and height are kept
/// for downstream consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Centre x coordinate
    pub center_x: f64,
    /// Centre y coordinate
    pub center_y: f64,
    /// Width of the region
    pub width: f64,
    /// Height of the region
    pub height: f64,
}

impl Region {
    /// Create a Region from centre coordinates and dimensions (XYWH format).
    #[inline]
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    /// Create a Region from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            center_x: (x1 + x2) / 2.0,
            center_y: (y1 + y2) / 2.0,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Create a Region from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            center_x: x + width / 2.0,
            center_y: y + height / 2.0,
            width,
            height,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f64; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        [
            self.center_x - half_w,
            self.center_y - half_h,
            self.center_x + half_w,
            self.center_y + half_h,
        ]
    }

    /// Convert to XYWH format: (center_x, center_y, width, height).
    #[inline]
    pub fn to_xywh(&self) -> [f64; 4] {
        [self.center_x, self.center_y, self.width, self.height]
    }

    /// Get the centre point of the region.
    #[inline]
    pub fn center(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }
}
