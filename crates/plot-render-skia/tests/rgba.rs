// File: crates/plot-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plot_core::{Color, PlotCanvas, PlotStyle, Size};
use plot_render_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_rgba8_buffer() {
    let renderer = SkiaRenderer::new();
    let mut canvas = PlotCanvas::new(renderer.new_scene(Size::new(100, 100))).expect("canvas");
    canvas.set_axis_text_enabled(false).unwrap(); // avoid font variance
    let id = canvas.new_plot(PlotStyle { color: Color::RED, ..Default::default() });
    canvas.plot(id).unwrap().add_point((0.5, 0.5));

    let (px, w, h, stride) = renderer.render_to_rgba8(canvas.scene(), &RenderOptions::default()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // (0.5, 0.5) in a (-1,-1)..(1,1) view lands at device (75, 25).
    let i = 25 * stride + 75 * 4;
    let (r, g, b) = (px[i], px[i + 1], px[i + 2]);
    assert!(r > 200 && g < 60 && b < 60, "marker pixel was {r},{g},{b}");
}

#[test]
fn empty_viewport_is_an_error() {
    let renderer = SkiaRenderer::new();
    let canvas = PlotCanvas::new(renderer.new_scene(Size::new(0, 10))).expect("canvas");
    assert!(renderer.render_to_png_bytes(canvas.scene(), &RenderOptions::default()).is_err());
}
