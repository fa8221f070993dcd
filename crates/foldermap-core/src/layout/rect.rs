/// Axis-aligned rectangle used throughout the layout pass.
///
/// `f64` throughout: byte sizes up to the exabyte range survive the ratio
/// arithmetic without precision cliffs, and hosts can map to their own pixel
/// type at the boundary.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Same origin with width and height clamped to be non-negative.
    ///
    /// Degenerate input areas (zero or negative dimensions) are legal for
    /// every layout entry point; clamping here is what keeps them from ever
    /// becoming an error downstream.
    pub fn clamped(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            w: self.w.max(0.0),
            h: self.h.max(0.0),
        }
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// May produce negative dimensions; callers clamp when it matters.
    pub fn inset(&self, margin: f64) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: self.w - 2.0 * margin,
            h: self.h - 2.0 * margin,
        }
    }

    /// Point containment, inclusive of the left/top edge and exclusive of
    /// the right/bottom edge so adjacent rectangles never both claim a point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn area(&self) -> f64 {
        self.w.max(0.0) * self.h.max(0.0)
    }
}
