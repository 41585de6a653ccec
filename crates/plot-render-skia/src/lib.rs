// File: crates/plot-render-skia/src/lib.rs
// Summary: Rasterizes a plot-core MemoryScene with Skia CPU raster surfaces (PNG / RGBA8).

pub mod text;

use std::rc::Rc;

use anyhow::Result;
use plot_core::{Color, MemoryScene, Pen, Primitive, Scene, Shape, Size, TextItem, Transform};
use skia_safe as skia;
use tracing::debug;

pub use text::{SkiaTextMetrics, TextShaper};

pub struct RenderOptions {
    pub background: Color,
    pub antialias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: Color::WHITE, antialias: true }
    }
}

pub struct SkiaRenderer {
    shaper: Rc<TextShaper>,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: Rc::new(TextShaper::new()) }
    }

    /// Text metrics sharing this renderer's shaper.
    pub fn metrics(&self) -> SkiaTextMetrics {
        SkiaTextMetrics::from_shaper(Rc::clone(&self.shaper))
    }

    /// Empty scene of `size` whose label boxes are measured with Skia.
    pub fn new_scene(&self, size: Size) -> MemoryScene {
        MemoryScene::with_metrics(size, self.metrics())
    }

    fn rasterize(&self, scene: &MemoryScene, opts: &RenderOptions) -> Result<skia::Surface> {
        let size = scene.viewport_size().require_non_empty()?;
        let mut surface = skia::surfaces::raster_n32_premul((size.width as i32, size.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background));

        let t = scene.device_transform();
        for (_, primitive) in scene.iter() {
            match primitive {
                Primitive::Line { from, to, pen } => draw_line(canvas, &t, *from, *to, pen, opts.antialias),
                Primitive::Shape { shape, pen, fill } => draw_shape(canvas, &t, shape, pen, *fill, opts.antialias),
                Primitive::Text(item) => self.draw_text(canvas, &t, item),
            }
        }
        debug!(primitives = scene.len(), width = size.width, height = size.height, "scene rasterized");
        Ok(surface)
    }

    fn draw_text(&self, canvas: &skia::Canvas, view: &Transform, item: &TextItem) {
        // The node transform cancels the view's scale; whatever remains sizes the glyphs.
        let glyph = item.transform.then(*view);
        let size = item.size * glyph.m22.abs() as f32;
        let (x, y) = view.map(item.origin);
        self.shaper.draw_top_left(canvas, &item.text, x as f32, y as f32, size, to_skia(item.color));
    }

    pub fn render_to_png_bytes(&self, scene: &MemoryScene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        scene: &MemoryScene,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, scene: &MemoryScene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(scene, opts)?;
        let Size { width, height } = scene.viewport_size();
        let info = skia::ImageInfo::new(
            (width as i32, height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {width}x{height} pixels failed");
        }
        Ok((pixels, width, height, stride))
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(pen: &Pen, antialias: bool) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(antialias);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(pen.width);
    paint.set_color(to_skia(pen.color));
    let intervals = pen.dash.intervals();
    if !intervals.is_empty() {
        let unit = pen.width.max(1.0);
        let scaled: Vec<f32> = intervals.iter().map(|i| i * unit).collect();
        paint.set_path_effect(skia::PathEffect::dash(&scaled, 0.0));
    }
    paint
}

fn point(t: &Transform, p: (f64, f64)) -> (f32, f32) {
    let (x, y) = t.map(p);
    (x as f32, y as f32)
}

fn draw_line(canvas: &skia::Canvas, t: &Transform, from: (f64, f64), to: (f64, f64), pen: &Pen, aa: bool) {
    canvas.draw_line(point(t, from), point(t, to), &stroke_paint(pen, aa));
}

fn draw_shape(canvas: &skia::Canvas, t: &Transform, shape: &Shape, pen: &Pen, fill: Option<Color>, aa: bool) {
    let fill_paint = fill.map(|c| {
        let mut p = skia::Paint::default();
        p.set_anti_alias(aa);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(to_skia(c));
        p
    });
    let stroke = stroke_paint(pen, aa);

    match shape {
        Shape::Ellipse { center, rx, ry } => {
            let (cx, cy) = point(t, *center);
            // View transforms here never rotate, so radii scale per axis.
            let rx = (rx * t.m11.abs()) as f32;
            let ry = (ry * t.m22.abs()) as f32;
            let rect = skia::Rect::from_ltrb(cx - rx, cy - ry, cx + rx, cy + ry);
            if let Some(p) = &fill_paint {
                canvas.draw_oval(rect, p);
            }
            canvas.draw_oval(rect, &stroke);
        }
        Shape::Polygon(points) => {
            let Some((first, rest)) = points.split_first() else { return };
            let mut path = skia::Path::new();
            path.move_to(point(t, *first));
            for p in rest {
                path.line_to(point(t, *p));
            }
            path.close();
            if let Some(p) = &fill_paint {
                canvas.draw_path(&path, p);
            }
            canvas.draw_path(&path, &stroke);
        }
    }
}
