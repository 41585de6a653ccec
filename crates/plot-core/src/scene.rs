// File: crates/plot-core/src/scene.rs
// Summary: Scene capability trait, primitive handles and the in-memory arena scene.
// Notes:
// - Every primitive is owned by whichever component added it; the scene only
//   stores it under an opaque `PrimitiveId` until that owner removes it.
// - Geometry is in data space; text sizes and pen widths are device pixels.

use std::collections::BTreeMap;

use crate::error::{PlotError, Result};
use crate::geometry::{Point, Size};
use crate::scale::Transform;
use crate::style::Pen;
use crate::theme::Color;

/// Opaque handle to a primitive stored in a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(u64);

/// Closed outline used for markers.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Ellipse { center: Point, rx: f64, ry: f64 },
    Polygon(Vec<Point>),
}

impl Shape {
    pub fn center(&self) -> Point {
        match self {
            Shape::Ellipse { center, .. } => *center,
            Shape::Polygon(pts) => {
                let n = pts.len().max(1) as f64;
                let (sx, sy) = pts.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.0, acc.1 + p.1));
                (sx / n, sy / n)
            }
        }
    }

    /// Axis-aligned extents `(width, height)` in data units.
    pub fn extent(&self) -> (f64, f64) {
        match self {
            Shape::Ellipse { rx, ry, .. } => (rx * 2.0, ry * 2.0),
            Shape::Polygon(pts) => {
                let mut min = (f64::INFINITY, f64::INFINITY);
                let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
                for p in pts {
                    min = (min.0.min(p.0), min.1.min(p.1));
                    max = (max.0.max(p.0), max.1.max(p.1));
                }
                if pts.is_empty() { (0.0, 0.0) } else { (max.0 - min.0, max.1 - min.1) }
            }
        }
    }
}

/// Text node. `origin` is the data-space position of the box's top-left
/// corner as seen on screen; `transform` is the node's own transform, which
/// the axis sets to cancel the view's flip and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub origin: Point,
    pub transform: Transform,
    pub size: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, pen: Pen },
    Shape { shape: Shape, pen: Pen, fill: Option<Color> },
    Text(TextItem),
}

/// Measured text box in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Minimal capability set the plotting core needs from a host canvas.
pub trait Scene {
    fn add(&mut self, primitive: Primitive) -> PrimitiveId;
    /// Replace the primitive stored under `id`, keeping the handle.
    fn replace(&mut self, id: PrimitiveId, primitive: Primitive) -> Result<()>;
    fn remove(&mut self, id: PrimitiveId) -> Result<Primitive>;
    fn get(&self, id: PrimitiveId) -> Option<&Primitive>;

    fn measure_text(&self, text: &str, size: f32) -> TextExtent;

    fn set_view_transform(&mut self, transform: Transform);
    fn view_transform(&self) -> Transform;
    /// Scroll so data-space `center` sits in the middle of the viewport.
    fn center_on(&mut self, center: Point);

    fn viewport_size(&self) -> Size;
    /// Host notification that the viewport changed size.
    fn set_viewport_size(&mut self, size: Size);

    fn add_line(&mut self, from: Point, to: Point, pen: Pen) -> PrimitiveId {
        self.add(Primitive::Line { from, to, pen })
    }

    fn add_shape(&mut self, shape: Shape, pen: Pen, fill: Option<Color>) -> PrimitiveId {
        self.add(Primitive::Shape { shape, pen, fill })
    }
}

/// Text measurement strategy used by `MemoryScene`.
pub trait TextMetrics {
    fn measure(&self, text: &str, size: f32) -> TextExtent;
}

/// Fixed advance per character; deterministic, used when no font backend is present.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMetrics {
    /// Advance per character as a fraction of the font size.
    pub advance: f64,
    /// Line height as a fraction of the font size.
    pub line_height: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.2 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let size = size as f64;
        TextExtent {
            width: text.chars().count() as f64 * self.advance * size,
            height: self.line_height * size,
        }
    }
}

/// Arena-backed scene that keeps primitives in insertion order.
pub struct MemoryScene {
    primitives: BTreeMap<PrimitiveId, Primitive>,
    next_id: u64,
    viewport: Size,
    transform: Transform,
    center: Point,
    metrics: Box<dyn TextMetrics>,
}

impl MemoryScene {
    pub fn new(viewport: Size) -> Self {
        Self::with_metrics(viewport, MonospaceMetrics::default())
    }

    pub fn with_metrics(viewport: Size, metrics: impl TextMetrics + 'static) -> Self {
        Self {
            primitives: BTreeMap::new(),
            next_id: 0,
            viewport,
            transform: Transform::IDENTITY,
            center: (0.0, 0.0),
            metrics: Box::new(metrics),
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives.iter().map(|(id, p)| (*id, p))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Full data-to-device transform: view transform, then the translation
    /// that puts the view center at the middle of the viewport.
    pub fn device_transform(&self) -> Transform {
        let (cx, cy) = self.transform.map(self.center);
        let half_w = self.viewport.width as f64 * 0.5;
        let half_h = self.viewport.height as f64 * 0.5;
        self.transform.then(Transform::from_translate(half_w - cx, half_h - cy))
    }

    pub fn device_point(&self, p: Point) -> Point {
        self.device_transform().map(p)
    }

    /// Data-space point under device pixel `d`; `None` while the view transform is singular.
    pub fn data_point(&self, d: Point) -> Option<Point> {
        self.device_transform().inverse().map(|inv| inv.map(d))
    }
}

impl Scene for MemoryScene {
    fn add(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.primitives.insert(id, primitive);
        id
    }

    fn replace(&mut self, id: PrimitiveId, primitive: Primitive) -> Result<()> {
        match self.primitives.get_mut(&id) {
            Some(slot) => {
                *slot = primitive;
                Ok(())
            }
            None => Err(PlotError::UnknownPrimitive(id)),
        }
    }

    fn remove(&mut self, id: PrimitiveId) -> Result<Primitive> {
        self.primitives.remove(&id).ok_or(PlotError::UnknownPrimitive(id))
    }

    fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(&id)
    }

    fn measure_text(&self, text: &str, size: f32) -> TextExtent {
        self.metrics.measure(text, size)
    }

    fn set_view_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn view_transform(&self) -> Transform {
        self.transform
    }

    fn center_on(&mut self, center: Point) {
        self.center = center;
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }
}
