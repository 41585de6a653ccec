// File: crates/plot-core/src/geometry.rs
// Summary: Data-space rectangles and pixel sizes.

use crate::error::{PlotError, Result};

/// Data-space coordinate pair `(x, y)`.
pub type Point = (f64, f64);

/// Viewport size in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero; no scale can be derived from it.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Return the size, or `InvalidViewport` when it has no area.
    pub fn require_non_empty(self) -> Result<Self> {
        if self.is_empty() {
            return Err(PlotError::InvalidViewport { width: self.width, height: self.height });
        }
        Ok(self)
    }
}

/// Visible data-space rectangle.
///
/// `top` is the numerically smallest y and `bottom()` the largest. The canvas
/// flips Y, so `top` ends up at the lower edge of the viewport.
/// Contract: `width` and `height` are finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl ViewRect {
    /// Build from origin and extents, rejecting non-positive or non-finite sizes.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self> {
        let finite = left.is_finite() && top.is_finite() && width.is_finite() && height.is_finite();
        if !finite || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::DegenerateView { width, height });
        }
        Ok(Self { left, top, width, height })
    }

    /// Build from the lower-left and upper-right data-space corners.
    pub fn from_corners(lower_left: Point, upper_right: Point) -> Result<Self> {
        let (llx, lly) = lower_left;
        let (urx, ury) = upper_right;
        Self::new(llx, lly, urx - llx, ury - lly)
    }

    pub const fn left(&self) -> f64 { self.left }
    pub const fn top(&self) -> f64 { self.top }
    pub const fn width(&self) -> f64 { self.width }
    pub const fn height(&self) -> f64 { self.height }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    pub fn top_left(&self) -> Point { (self.left, self.top) }
    pub fn bottom_right(&self) -> Point { (self.right(), self.bottom()) }

    pub fn center(&self) -> Point {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Strictly inside on x (`left < x < right`).
    pub fn spans_x(&self, x: f64) -> bool {
        self.left < x && x < self.right()
    }

    /// Strictly inside on y (`top < y < bottom`).
    pub fn spans_y(&self, y: f64) -> bool {
        self.top < y && y < self.bottom()
    }
}

impl Default for ViewRect {
    /// The widget's initial 2x2 view centered on the origin.
    fn default() -> Self {
        Self { left: -1.0, top: -1.0, width: 2.0, height: 2.0 }
    }
}
