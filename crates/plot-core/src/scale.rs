// File: crates/plot-core/src/scale.rs
// Summary: Pixel-per-unit scales and the affine view transform.

use crate::geometry::{Point, Size, ViewRect};

/// Pixels per data unit, separately for X and Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Derive the scale that fits `rect` into `viewport`.
    /// Returns `None` for an empty viewport.
    pub fn fit(rect: &ViewRect, viewport: Size) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }
        Some(Self {
            x: viewport.width as f64 / rect.width(),
            y: viewport.height as f64 / rect.height(),
        })
    }

    /// Data-space extent covering `px` device pixels on each axis.
    #[inline]
    pub fn px_to_data(&self, px: f64) -> (f64, f64) {
        (px / self.x, px / self.y)
    }

    /// Pixel coordinates of `p` relative to the rect origin (`left`, `top`).
    #[inline]
    pub fn pixel_coords(&self, rect: &ViewRect, p: Point) -> Point {
        ((p.0 - rect.left()) * self.x, (p.1 - rect.top()) * self.y)
    }
}

/// 2x3 affine transform, row-vector convention:
/// `x' = m11*x + m21*y + dx`, `y' = m12*x + m22*y + dy`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        Self { m11, m12, m21, m22, dx, dy }
    }

    /// Mirror across the X axis so data Y grows upward on screen.
    pub const fn flip_y() -> Self {
        Self::new(1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
    }

    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub const fn from_translate(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Scale the linear part, applied before the current mapping.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self {
            m11: self.m11 * sx,
            m12: self.m12 * sx,
            m21: self.m21 * sy,
            m22: self.m22 * sy,
            ..self
        }
    }

    /// Compose: apply `self` first, then `next`.
    pub fn then(self, next: Transform) -> Self {
        Self {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            dx: self.dx * next.m11 + self.dy * next.m21 + next.dx,
            dy: self.dx * next.m12 + self.dy * next.m22 + next.dy,
        }
    }

    #[inline]
    pub fn map(&self, p: Point) -> Point {
        (
            self.m11 * p.0 + self.m21 * p.1 + self.dx,
            self.m12 * p.0 + self.m22 * p.1 + self.dy,
        )
    }

    fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let m11 = self.m22 / det;
        let m12 = -self.m12 / det;
        let m21 = -self.m21 / det;
        let m22 = self.m11 / det;
        Some(Self {
            m11,
            m12,
            m21,
            m22,
            dx: -(self.dx * m11 + self.dy * m21),
            dy: -(self.dx * m12 + self.dy * m22),
        })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
