// File: crates/plot-core/src/style.rs
// Summary: Plot style attributes and the pens/brushes derived from them.

use std::fmt;
use std::str::FromStr;

use crate::error::PlotError;
use crate::marker::MarkerType;
use crate::theme::Color;

/// Stroke dash pattern for connecting lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashPattern {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl DashPattern {
    /// On/off intervals in multiples of the pen width; empty for solid.
    pub fn intervals(&self) -> &'static [f32] {
        match self {
            DashPattern::Solid => &[],
            DashPattern::Dash => &[4.0, 2.0],
            DashPattern::Dot => &[1.0, 2.0],
            DashPattern::DashDot => &[4.0, 2.0, 1.0, 2.0],
            DashPattern::DashDotDot => &[4.0, 2.0, 1.0, 2.0, 1.0, 2.0],
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DashPattern::Solid => "solid",
            DashPattern::Dash => "dash",
            DashPattern::Dot => "dot",
            DashPattern::DashDot => "dash-dot",
            DashPattern::DashDotDot => "dash-dot-dot",
        }
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DashPattern {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "solid" => Ok(DashPattern::Solid),
            "dash" => Ok(DashPattern::Dash),
            "dot" => Ok(DashPattern::Dot),
            "dash-dot" => Ok(DashPattern::DashDot),
            "dash-dot-dot" => Ok(DashPattern::DashDotDot),
            _ => Err(PlotError::UnknownDash(s.to_string())),
        }
    }
}

/// Cosmetic pen: `width` is in device pixels whatever the view transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
    pub dash: DashPattern,
}

impl Pen {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: DashPattern::Solid }
    }
}

/// User-facing style attributes of one plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotStyle {
    pub color: Color,
    pub filled: bool,
    /// Connecting line width in pixels.
    pub line_weight: f32,
    /// Marker diameter in pixels.
    pub marker_size: f64,
    pub marker_type: MarkerType,
    pub dash: DashPattern,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            filled: true,
            line_weight: 1.0,
            marker_size: 8.0,
            marker_type: MarkerType::Circle,
            dash: DashPattern::Solid,
        }
    }
}

/// Pens and fill actually handed to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub marker_pen: Pen,
    pub marker_fill: Option<Color>,
    pub line_pen: Pen,
}

/// Derive the render style from plot attributes. Pure; safe to call on every redraw.
pub fn style_for(style: &PlotStyle) -> RenderStyle {
    RenderStyle {
        marker_pen: Pen::solid(style.color, 1.0),
        marker_fill: style.filled.then_some(style.color),
        line_pen: Pen { color: style.color, width: style.line_weight, dash: style.dash },
    }
}
