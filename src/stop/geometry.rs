//! Points and the directed reference line used by the line-side test.

use nalgebra::Point2;

/// Object centre in image coordinates.
pub type Position = Point2<f64>;

/// Directed line through two endpoints.
///
/// The line splits the image plane in two half-planes. A point is "below" the
/// line when the signed area of the triple (start, end, point) is strictly
/// positive. With image coordinates (y grows downwards) and a line drawn left
/// to right, that is the half-plane under the line on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// First endpoint
    pub start: Position,
    /// Second endpoint
    pub end: Position,
}

impl Line {
    /// Create a line from endpoint coordinates (x1, y1, x2, y2).
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Position::new(x1, y1),
            end: Position::new(x2, y2),
        }
    }

    /// Create a line from two endpoints.
    #[inline]
    pub fn from_points(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Endpoints as (x1, y1, x2, y2).
    #[inline]
    pub fn to_coords(&self) -> [f64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    /// Signed cross product `(x2 - x1) * (y - y1) - (y2 - y1) * (x - x1)`.
    #[inline]
    pub fn side(&self, point: &Position) -> f64 {
        (self.end - self.start).perp(&(*point - self.start))
    }

    /// Whether `point` lies strictly on the positive side of the line.
    ///
    /// Points exactly on the line are not below it. A degenerate line always
    /// yields `false`.
    #[inline]
    pub fn is_below(&self, point: &Position) -> bool {
        self.side(point) > 0.0
    }

    /// Both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.to_coords().iter().all(|c| c.is_finite())
    }
}
