// File: crates/plot-core/src/canvas.rs
// Summary: PlotCanvas owns the scene, the axis and the registered plots and
// drives their recomputation on view changes and resizes.

use tracing::debug;

use crate::axis::{Axis, AxisOptions};
use crate::error::Result;
use crate::geometry::{Point, Size, ViewRect};
use crate::marker::MarkerType;
use crate::plot::Plot;
use crate::scene::{MemoryScene, Scene};
use crate::style::{DashPattern, PlotStyle};
use crate::theme::{Color, Theme};

/// Handle to a plot registered with a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlotId(usize);

pub struct PlotCanvas<S: Scene = MemoryScene> {
    scene: S,
    axis: Axis,
    plots: Vec<Plot>,
    order: Vec<PlotId>,
}

impl<S: Scene> PlotCanvas<S> {
    /// Canvas with default axis options, showing (-1,-1)..(1,1).
    pub fn new(scene: S) -> Result<Self> {
        Self::with_options(scene, AxisOptions::default())
    }

    pub fn with_options(scene: S, options: AxisOptions) -> Result<Self> {
        let mut canvas = Self { scene, axis: Axis::new(options), plots: Vec::new(), order: Vec::new() };
        let initial = ViewRect::default();
        canvas.set_axis_view(initial.top_left(), initial.bottom_right())?;
        Ok(canvas)
    }

    pub fn axis(&self) -> &Axis { &self.axis }
    pub fn scene(&self) -> &S { &self.scene }
    /// Registered plots in registration order.
    pub fn plot_ids(&self) -> &[PlotId] { &self.order }

    pub fn get_plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.get(id.0)
    }

    /// Mutable access to one plot together with the axis and scene it draws into.
    pub fn plot(&mut self, id: PlotId) -> Option<PlotMut<'_, S>> {
        let plot = self.plots.get_mut(id.0)?;
        Some(PlotMut { plot, axis: &self.axis, scene: &mut self.scene })
    }

    /// Construct a plot on this canvas; it is registered immediately.
    pub fn new_plot(&mut self, style: PlotStyle) -> PlotId {
        let id = PlotId(self.plots.len());
        self.plots.push(Plot::new(style));
        self.add_plot(id);
        id
    }

    /// Register a plot for redraws. Registering twice is a no-op.
    pub(crate) fn add_plot(&mut self, id: PlotId) {
        if self.order.contains(&id) {
            return;
        }
        self.order.push(id);
    }

    /// Show the data-space box spanned by `lower_left` and `upper_right`.
    pub fn set_axis_view(&mut self, lower_left: Point, upper_right: Point) -> Result<()> {
        let rect = ViewRect::from_corners(lower_left, upper_right)?;
        debug!(?rect, "set axis view");
        self.axis.set_view(rect, &mut self.scene)?;
        self.apply_view();
        self.redraw_plots()
    }

    /// Host notification of a new viewport size.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        debug!(width = size.width, height = size.height, "viewport resized");
        self.scene.set_viewport_size(size);
        self.refresh()
    }

    pub fn set_axis_text_enabled(&mut self, enabled: bool) -> Result<()> {
        self.axis.options_mut().axis_text_enabled = enabled;
        self.refresh()
    }

    pub fn set_major_ticks(&mut self, num_x: u32, num_y: u32) -> Result<()> {
        let options = self.axis.options_mut();
        options.num_x_major = num_x;
        options.num_y_major = num_y;
        self.refresh()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.axis.options_mut().theme = theme;
        self.refresh()
    }

    /// Rebuild the axis for the current rect and viewport, then redraw plots.
    pub fn refresh(&mut self) -> Result<()> {
        self.axis.update(&mut self.scene)?;
        self.apply_view();
        self.redraw_plots()
    }

    fn apply_view(&mut self) {
        if let Some(t) = self.axis.transform() {
            self.scene.set_view_transform(t);
        }
        self.scene.center_on(self.axis.center());
    }

    fn redraw_plots(&mut self) -> Result<()> {
        for id in &self.order {
            self.plots[id.0].redraw(&self.axis, &mut self.scene)?;
        }
        Ok(())
    }
}

/// A plot borrowed from its canvas, ready to mutate.
pub struct PlotMut<'a, S: Scene> {
    plot: &'a mut Plot,
    axis: &'a Axis,
    scene: &'a mut S,
}

impl<S: Scene> PlotMut<'_, S> {
    pub fn get(&self) -> &Plot {
        &*self.plot
    }

    pub fn add_point(&mut self, p: Point) {
        self.plot.add_point(p, self.axis, self.scene);
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = Point>) {
        for p in points {
            self.add_point(p);
        }
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.plot.redraw(self.axis, self.scene)
    }

    pub fn set_marker_size(&mut self, size: f64) -> Result<()> {
        self.plot.set_marker_size(size, self.axis, self.scene)
    }

    pub fn set_marker_type(&mut self, marker: MarkerType) -> Result<()> {
        self.plot.set_marker_type(marker, self.axis, self.scene)
    }

    pub fn set_color(&mut self, color: Color) -> Result<()> {
        self.plot.set_color(color, self.axis, self.scene)
    }

    pub fn set_filled(&mut self, filled: bool) -> Result<()> {
        self.plot.set_filled(filled, self.axis, self.scene)
    }

    pub fn set_line_weight(&mut self, weight: f32) -> Result<()> {
        self.plot.set_line_weight(weight, self.axis, self.scene)
    }

    pub fn set_line_dash_pattern(&mut self, dash: DashPattern) -> Result<()> {
        self.plot.set_line_dash_pattern(dash, self.axis, self.scene)
    }
}
