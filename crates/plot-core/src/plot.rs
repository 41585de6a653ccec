// File: crates/plot-core/src/plot.rs
// Summary: One plotted series: points, per-point markers, connecting lines and style.
// Notes:
// - Marker extents are pixel sizes divided by the current axis scale, so
//   markers keep a constant on-screen size while their centers stay in data space.
// - Each point and its marker handle live in one record; lines[i] joins
//   records[i] and records[i + 1].

use tracing::trace;

use crate::axis::Axis;
use crate::error::Result;
use crate::geometry::Point;
use crate::marker::MarkerType;
use crate::scene::{Primitive, PrimitiveId, Scene};
use crate::style::{style_for, DashPattern, PlotStyle};
use crate::theme::Color;

/// A data point and the marker drawn for it, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    pub point: Point,
    pub marker: Option<PrimitiveId>,
}

#[derive(Debug, Default)]
pub struct Plot {
    records: Vec<PointRecord>,
    lines: Vec<PrimitiveId>,
    style: PlotStyle,
}

impl Plot {
    pub fn new(style: PlotStyle) -> Self {
        Self { records: Vec::new(), lines: Vec::new(), style }
    }

    pub fn style(&self) -> &PlotStyle { &self.style }
    pub fn records(&self) -> &[PointRecord] { &self.records }
    pub fn lines(&self) -> &[PrimitiveId] { &self.lines }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.records.iter().map(|r| r.point)
    }

    pub fn markers(&self) -> impl Iterator<Item = Option<PrimitiveId>> + '_ {
        self.records.iter().map(|r| r.marker)
    }

    /// Half-extents of a marker in data units; zero while there is no scale.
    fn marker_half(&self, axis: &Axis) -> (f64, f64) {
        axis.scale()
            .map(|s| s.px_to_data(self.style.marker_size / 2.0))
            .unwrap_or((0.0, 0.0))
    }

    /// Append `p`, its marker and the segment from the previous point.
    pub fn add_point<S: Scene + ?Sized>(&mut self, p: Point, axis: &Axis, scene: &mut S) {
        let rs = style_for(&self.style);
        let half = self.marker_half(axis);
        let marker = self
            .style
            .marker_type
            .shape(p, half)
            .map(|shape| scene.add_shape(shape, rs.marker_pen, rs.marker_fill));

        if let Some(prev) = self.records.last() {
            self.lines.push(scene.add_line(prev.point, p, rs.line_pen));
        }
        self.records.push(PointRecord { point: p, marker });
    }

    /// Re-derive pens from the style and refit every marker to the current
    /// scale. Primitives keep their handles. No-op while the viewport is empty.
    pub fn redraw<S: Scene + ?Sized>(&mut self, axis: &Axis, scene: &mut S) -> Result<()> {
        if axis.scale().is_none() {
            trace!("no viewport; plot redraw skipped");
            return Ok(());
        }
        let rs = style_for(&self.style);
        let half = self.marker_half(axis);

        for rec in &self.records {
            if let (Some(id), Some(shape)) = (rec.marker, self.style.marker_type.shape(rec.point, half)) {
                scene.replace(id, Primitive::Shape { shape, pen: rs.marker_pen, fill: rs.marker_fill })?;
            }
        }
        for (id, pair) in self.lines.iter().zip(self.records.windows(2)) {
            let line = Primitive::Line { from: pair[0].point, to: pair[1].point, pen: rs.line_pen };
            scene.replace(*id, line)?;
        }
        trace!(points = self.records.len(), half_x = half.0, half_y = half.1, "plot redrawn");
        Ok(())
    }

    pub fn set_marker_size<S: Scene + ?Sized>(&mut self, size: f64, axis: &Axis, scene: &mut S) -> Result<()> {
        self.style.marker_size = size;
        self.redraw(axis, scene)
    }

    pub fn set_color<S: Scene + ?Sized>(&mut self, color: Color, axis: &Axis, scene: &mut S) -> Result<()> {
        self.style.color = color;
        self.redraw(axis, scene)
    }

    pub fn set_filled<S: Scene + ?Sized>(&mut self, filled: bool, axis: &Axis, scene: &mut S) -> Result<()> {
        self.style.filled = filled;
        self.redraw(axis, scene)
    }

    /// Line weight is in pixels.
    pub fn set_line_weight<S: Scene + ?Sized>(&mut self, weight: f32, axis: &Axis, scene: &mut S) -> Result<()> {
        self.style.line_weight = weight;
        self.redraw(axis, scene)
    }

    pub fn set_line_dash_pattern<S: Scene + ?Sized>(
        &mut self,
        dash: DashPattern,
        axis: &Axis,
        scene: &mut S,
    ) -> Result<()> {
        self.style.dash = dash;
        self.redraw(axis, scene)
    }

    /// Rebuild every marker for the new type. Slow: one remove and one add per point.
    pub fn set_marker_type<S: Scene + ?Sized>(
        &mut self,
        marker: MarkerType,
        axis: &Axis,
        scene: &mut S,
    ) -> Result<()> {
        self.style.marker_type = marker;
        let rs = style_for(&self.style);
        let half = self.marker_half(axis);

        for rec in &mut self.records {
            if let Some(old) = rec.marker.take() {
                scene.remove(old)?;
            }
            rec.marker = marker
                .shape(rec.point, half)
                .map(|shape| scene.add_shape(shape, rs.marker_pen, rs.marker_fill));
        }
        self.redraw(axis, scene)
    }
}
