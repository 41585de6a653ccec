// File: crates/plot-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; also backs scene text metrics.

use std::rc::Rc;

use plot_core::{TextExtent, TextMetrics};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Tick labels are numeric; prefer tabular-number families.
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and total height, in pixels.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        (p.longest_line(), p.height())
    }

    /// Draw with the box's top-left corner at (`x`, `y`).
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Scene text metrics measured with the same shaper that draws the labels,
/// so axis clamping matches the rendered glyph boxes.
#[derive(Clone)]
pub struct SkiaTextMetrics {
    shaper: Rc<TextShaper>,
}

impl SkiaTextMetrics {
    pub fn from_shaper(shaper: Rc<TextShaper>) -> Self {
        Self { shaper }
    }
}

impl TextMetrics for SkiaTextMetrics {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let (w, h) = self.shaper.measure(text, size);
        TextExtent { width: w as f64, height: h as f64 }
    }
}
