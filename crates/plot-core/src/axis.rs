// File: crates/plot-core/src/axis.rs
// Summary: Axis model: view rectangle, derived scale, zero-lines, ticks and labels.
// Notes:
// - `update` tears down every primitive the axis owns and rebuilds from scratch.
// - Tick marks and label offsets are specified in pixels and converted through
//   the current scale, so they keep their on-screen size across resizes.

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{Point, ViewRect};
use crate::scale::{Scale, Transform};
use crate::scene::{Primitive, PrimitiveId, Scene, TextItem};
use crate::style::Pen;
use crate::theme::Theme;

/// Half-length of a tick mark, in pixels.
pub const TICK_LENGTH_PX: f64 = 5.0;
/// Gap between the horizontal axis and the top of an x label, in pixels.
pub const X_LABEL_GAP_PX: f64 = 6.0;
/// Gap between the vertical axis and the left of a y label, in pixels.
pub const Y_LABEL_GAP_PX: f64 = 7.5;
/// Upper bound on decimal digits tried by the spacing search.
pub const MAX_SPACING_DECIMALS: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOptions {
    /// Target number of major ticks along X.
    pub num_x_major: u32,
    /// Target number of major ticks along Y.
    pub num_y_major: u32,
    pub axis_text_enabled: bool,
    pub theme: Theme,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self { num_x_major: 5, num_y_major: 5, axis_text_enabled: true, theme: Theme::default() }
    }
}

/// Major tick step `k / 10^decimals`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSpacing {
    pub step: f64,
    pub decimals: u32,
}

/// Find a round tick step for an axis `extent` long.
///
/// Tries `floor(mult * extent / (num_major + 1)) / mult` for `mult = 1, 10, 100, ...`
/// until it is non-zero. Unlike a plain floor search, the step is then widened
/// at the same precision to `ceil(mult * extent / (num_major + 2)) / mult` when
/// the floored step would fit more than `num_major + 2` ticks: an extent of 10
/// with 5 major ticks gets step 2, not 1.
///
/// Extents too small to round within `MAX_SPACING_DECIMALS` digits keep the
/// unrounded step, and `decimals` is sized from the step itself so labels
/// stay distinct.
pub fn major_spacing(extent: f64, num_major: u32) -> TickSpacing {
    let target = extent / (num_major as f64 + 1.0);
    let limit = extent / (num_major as f64 + 2.0);
    for decimals in 0..=MAX_SPACING_DECIMALS {
        let mult = 10f64.powi(decimals as i32);
        let k = (mult * target).floor();
        if k > 0.0 {
            let k = k.max((mult * limit).ceil());
            return TickSpacing { step: k / mult, decimals };
        }
    }
    warn!(extent, num_major, "tick spacing search did not converge; using unrounded step");
    let decimals = (-target.log10()).ceil().max(MAX_SPACING_DECIMALS as f64 + 1.0) as u32;
    TickSpacing { step: target, decimals }
}

/// Tick positions walking outward from `anchor`, strictly inside `(lo, hi)`:
/// first downward, then upward. The anchor itself is not a tick.
pub fn tick_positions(anchor: f64, step: f64, lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    if !(step > 0.0) {
        return ticks;
    }
    let mut i = 1.0;
    while anchor - i * step > lo {
        ticks.push(anchor - i * step);
        i += 1.0;
    }
    let mut i = 1.0;
    while anchor + i * step < hi {
        ticks.push(anchor + i * step);
        i += 1.0;
    }
    ticks
}

/// Label text for tick `value`, at least `decimals` digits, more when the
/// anchor is off the decimal grid. Steps finer than `MAX_SPACING_DECIMALS`
/// digits are labelled in exponent form.
pub fn format_tick(value: f64, decimals: u32) -> String {
    if decimals > MAX_SPACING_DECIMALS {
        return if value == 0.0 { "0".to_string() } else { format!("{value:.3e}") };
    }
    let mut d = decimals;
    while d < MAX_SPACING_DECIMALS {
        let scaled = value * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        d += 1;
    }
    let v = if value.abs() < 0.5 * 10f64.powi(-(d as i32)) { 0.0 } else { value };
    format!("{:.*}", d as usize, v)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HAlign {
    Center,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VAlign {
    Middle,
    Top,
}

pub struct Axis {
    rect: ViewRect,
    scale: Option<Scale>,
    options: AxisOptions,
    scene_objects: Vec<PrimitiveId>,
    /// x of the vertical zero-line and y of the horizontal one.
    anchors: Point,
    x_spacing: Option<TickSpacing>,
    y_spacing: Option<TickSpacing>,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
}

impl Axis {
    pub fn new(options: AxisOptions) -> Self {
        Self {
            rect: ViewRect::default(),
            scale: None,
            options,
            scene_objects: Vec::new(),
            anchors: (0.0, 0.0),
            x_spacing: None,
            y_spacing: None,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
        }
    }

    pub fn rect(&self) -> &ViewRect { &self.rect }
    pub fn options(&self) -> &AxisOptions { &self.options }
    /// Pixels per data unit; `None` until the viewport has a non-zero size.
    pub fn scale(&self) -> Option<Scale> { self.scale }
    pub fn scene_objects(&self) -> &[PrimitiveId] { &self.scene_objects }
    pub fn zero_lines(&self) -> Point { self.anchors }
    pub fn x_spacing(&self) -> Option<TickSpacing> { self.x_spacing }
    pub fn y_spacing(&self) -> Option<TickSpacing> { self.y_spacing }
    pub fn x_ticks(&self) -> &[f64] { &self.x_ticks }
    pub fn y_ticks(&self) -> &[f64] { &self.y_ticks }

    /// Mutable options; call `update` afterwards for them to take effect.
    pub fn options_mut(&mut self) -> &mut AxisOptions { &mut self.options }

    /// Replace the view and rebuild synchronously.
    pub fn set_view<S: Scene + ?Sized>(&mut self, rect: ViewRect, scene: &mut S) -> Result<()> {
        self.rect = rect;
        self.update(scene)
    }

    /// Canvas transform: flip Y, then scale to pixels. No translation term.
    pub fn transform(&self) -> Option<Transform> {
        self.scale.map(|s| Transform::flip_y().scale(s.x, s.y))
    }

    /// Point the canvas should be centered on.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Pixel coordinates of `p`, measured from the rect's (`left`, `top`) corner.
    pub fn pixel_coords(&self, p: Point) -> Option<Point> {
        self.scale.map(|s| s.pixel_coords(&self.rect, p))
    }

    /// Recompute the scale and regenerate every axis primitive.
    pub fn update<S: Scene + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        self.scale = Scale::fit(&self.rect, scene.viewport_size());

        // Every owned handle is released even if one of them is already gone.
        let mut stale = None;
        for id in self.scene_objects.drain(..) {
            if let Err(e) = scene.remove(id) {
                stale.get_or_insert(e);
            }
        }
        self.x_ticks.clear();
        self.y_ticks.clear();
        self.x_spacing = None;
        self.y_spacing = None;
        if let Some(e) = stale {
            return Err(e);
        }

        let Some(scale) = self.scale else {
            debug!(viewport = ?scene.viewport_size(), "viewport empty; axis left blank");
            return Ok(());
        };

        let r = self.rect;
        let (cx, cy) = r.center();
        let theme = self.options.theme;
        let axis_pen = Pen::solid(theme.axis_line, 1.0);
        let tick_pen = Pen::solid(theme.tick, 1.0);

        // Zero-lines sit at 0 when it is in view, else through the middle.
        let ya = if r.spans_x(0.0) { 0.0 } else { cx };
        let xa = if r.spans_y(0.0) { 0.0 } else { cy };
        self.anchors = (ya, xa);
        self.scene_objects.push(scene.add_line((ya, r.bottom()), (ya, r.top()), axis_pen));
        self.scene_objects.push(scene.add_line((r.left(), xa), (r.right(), xa), axis_pen));

        let xs = major_spacing(r.width(), self.options.num_x_major);
        let ys = major_spacing(r.height(), self.options.num_y_major);
        self.x_spacing = Some(xs);
        self.y_spacing = Some(ys);
        self.x_ticks = tick_positions(ya, xs.step, r.left(), r.right());
        self.y_ticks = tick_positions(xa, ys.step, r.top(), r.bottom());

        let (tick_dx, tick_dy) = scale.px_to_data(TICK_LENGTH_PX);
        for x in self.x_ticks.clone() {
            let id = scene.add_line((x, xa - tick_dy), (x, xa + tick_dy), tick_pen);
            self.scene_objects.push(id);
            if self.options.axis_text_enabled {
                let y = xa - X_LABEL_GAP_PX / scale.y;
                self.add_text(scene, scale, format_tick(x, xs.decimals), (x, y), HAlign::Center, VAlign::Top);
            }
        }
        for y in self.y_ticks.clone() {
            let id = scene.add_line((ya - tick_dx, y), (ya + tick_dx, y), tick_pen);
            self.scene_objects.push(id);
            if self.options.axis_text_enabled {
                let x = ya + Y_LABEL_GAP_PX / scale.x;
                self.add_text(scene, scale, format_tick(y, ys.decimals), (x, y), HAlign::Left, VAlign::Middle);
            }
        }

        debug!(
            rect = ?r,
            x_step = xs.step,
            y_step = ys.step,
            x_ticks = self.x_ticks.len(),
            y_ticks = self.y_ticks.len(),
            primitives = self.scene_objects.len(),
            "axis updated"
        );
        Ok(())
    }

    /// Add a label near `at`, kept upright, pixel-sized and inside the view.
    fn add_text<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        scale: Scale,
        text: String,
        at: Point,
        h: HAlign,
        v: VAlign,
    ) {
        let size = self.options.theme.label_size;
        let extent = scene.measure_text(&text, size);
        let w = extent.width / scale.x;
        let ht = extent.height / scale.y;
        let r = self.rect;

        // Box spans [x, x + w] by [y - ht, y]; y is the upper edge on screen.
        let mut x = match h {
            HAlign::Center => at.0 - w / 2.0,
            HAlign::Left => at.0,
        };
        let mut y = match v {
            VAlign::Middle => at.1 + ht / 2.0,
            VAlign::Top => at.1,
        };

        if x + w > r.right() {
            x = r.right() - w;
        }
        if x < r.left() {
            x = r.left();
        }
        if y > r.bottom() {
            y = r.bottom();
        }
        if y - ht < r.top() {
            y = r.top() + ht;
        }

        let item = TextItem {
            text,
            origin: (x, y),
            transform: Transform::from_scale(1.0 / scale.x, -1.0 / scale.y),
            size,
            color: self.options.theme.axis_label,
        };
        self.scene_objects.push(scene.add(Primitive::Text(item)));
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(AxisOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_decimal_search() {
        assert_eq!(major_spacing(3.0, 5), TickSpacing { step: 0.5, decimals: 1 });
        assert_eq!(major_spacing(2.0, 5), TickSpacing { step: 0.3, decimals: 1 });
        assert_eq!(major_spacing(0.02, 5), TickSpacing { step: 0.003, decimals: 3 });
        assert_eq!(major_spacing(120.0, 5), TickSpacing { step: 20.0, decimals: 0 });
    }

    #[test]
    fn spacing_is_widened_to_cap_tick_count() {
        // floor(10 / 6) = 1 would give 8 ticks inside (-5, 5).
        let s = major_spacing(10.0, 5);
        assert_eq!(s, TickSpacing { step: 2.0, decimals: 0 });
        assert_eq!(tick_positions(0.0, s.step, -5.0, 5.0), vec![-2.0, -4.0, 2.0, 4.0]);
    }

    #[test]
    fn spacing_search_is_bounded() {
        let s = major_spacing(1e-30, 5);
        assert!(s.step > 0.0);
        assert!(s.decimals > MAX_SPACING_DECIMALS);
        assert_eq!(s.decimals, 31);
    }

    #[test]
    fn sub_grid_steps_use_exponent_labels() {
        let s = major_spacing(2e-17, 5);
        let labels: Vec<_> = tick_positions(0.0, s.step, -1e-17, 1e-17)
            .into_iter()
            .map(|v| format_tick(v, s.decimals))
            .collect();
        assert!(labels.len() >= 4, "{labels:?}");
        for (i, a) in labels.iter().enumerate() {
            assert!(a.contains('e'), "{a}");
            assert!(labels[i + 1..].iter().all(|b| b != a), "duplicate label in {labels:?}");
        }
        assert_eq!(format_tick(-0.0, 18), "0");
    }

    #[test]
    fn ticks_exclude_bounds_and_anchor() {
        let t = tick_positions(0.0, 0.5, -1.5, 1.5);
        assert_eq!(t, vec![-0.5, -1.0, 0.5, 1.0]);
        assert!(tick_positions(0.0, 0.0, -1.0, 1.0).is_empty());
    }

    #[test]
    fn labels_are_round() {
        assert_eq!(format_tick(3.0 * 0.1, 1), "0.3");
        assert_eq!(format_tick(2.0, 0), "2");
        assert_eq!(format_tick(-1e-17, 1), "0.0");
        assert_eq!(format_tick(7.25, 1), "7.25");
    }
}
