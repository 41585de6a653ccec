// File: crates/plot-core/src/marker.rs
// Summary: Per-point marker glyphs and their data-space geometry.

use std::fmt;
use std::str::FromStr;

use crate::error::PlotError;
use crate::geometry::Point;
use crate::scene::Shape;

/// Glyph drawn at every point of a plot. `None` draws nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerType {
    None,
    #[default]
    Circle,
    Square,
    Diamond,
}

impl MarkerType {
    /// Shape centered on `center` with half-extents `half` (data units),
    /// or `None` when this marker type draws nothing.
    pub fn shape(self, center: Point, half: (f64, f64)) -> Option<Shape> {
        let (cx, cy) = center;
        let (hx, hy) = half;
        match self {
            MarkerType::None => None,
            MarkerType::Circle => Some(Shape::Ellipse { center, rx: hx, ry: hy }),
            MarkerType::Square => Some(Shape::Polygon(vec![
                (cx - hx, cy - hy),
                (cx + hx, cy - hy),
                (cx + hx, cy + hy),
                (cx - hx, cy + hy),
            ])),
            MarkerType::Diamond => Some(Shape::Polygon(vec![
                (cx, cy - hy),
                (cx + hx, cy),
                (cx, cy + hy),
                (cx - hx, cy),
            ])),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MarkerType::None => "none",
            MarkerType::Circle => "circle",
            MarkerType::Square => "square",
            MarkerType::Diamond => "diamond",
        }
    }
}

impl fmt::Display for MarkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerType {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(MarkerType::None),
            "circle" | "circ" => Ok(MarkerType::Circle),
            "square" => Ok(MarkerType::Square),
            "diamond" => Ok(MarkerType::Diamond),
            _ => Err(PlotError::UnknownMarker(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!("circ".parse::<MarkerType>().unwrap(), MarkerType::Circle);
        assert_eq!("None".parse::<MarkerType>().unwrap(), MarkerType::None);
        assert_eq!("star".parse::<MarkerType>(), Err(PlotError::UnknownMarker("star".into())));
    }

    #[test]
    fn square_is_centered() {
        let Some(Shape::Polygon(pts)) = MarkerType::Square.shape((1.0, 2.0), (0.5, 0.25)) else {
            panic!("square should be a polygon");
        };
        assert_eq!(pts[0], (0.5, 1.75));
        assert_eq!(pts[2], (1.5, 2.25));
        assert!(MarkerType::None.shape((0.0, 0.0), (1.0, 1.0)).is_none());
    }
}
